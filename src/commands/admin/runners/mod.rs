mod attendances;
mod set;
mod show;
pub mod status;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(alias = "ls")]
    Status(status::Options),
    Show(show::Options),
    Set(set::Options),
    #[clap(alias = "logs")]
    Attendances(attendances::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Inspect and steer the auto attendance runner")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::Status(_) => status::handle(state).await,
        Commands::Show(options) => show::handle(&options, state).await,
        Commands::Set(options) => set::handle(&options, state).await,
        Commands::Attendances(options) => attendances::handle(&options, state).await,
    }
}
