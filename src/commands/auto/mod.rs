pub mod list;
mod lectures;
mod off;
mod set;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    Lectures(lectures::Options),
    #[clap(alias = "on")]
    Set(set::Options),
    #[clap(alias = "disable")]
    Off(off::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Attend lectures automatically (Pro)")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(&options, state).await,
        Commands::Lectures(options) => lectures::handle(&options, state).await,
        Commands::Set(options) => set::handle(&options, state).await,
        Commands::Off(options) => off::handle(&options, state).await,
    }
}
