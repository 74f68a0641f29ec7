mod delete;
mod edit;
pub mod show;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(alias = "info")]
    Show(show::Options),
    #[clap(alias = "update")]
    Edit(edit::Options),
    #[clap(name = "delete", alias = "rm")]
    Delete(delete::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage your account")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::Show(_) => show::handle(state).await,
        Commands::Edit(options) => edit::handle(options, state).await,
        Commands::Delete(options) => delete::handle(&options, state).await,
    }
}
