pub mod list;
mod locate;
mod sync;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    #[clap(alias = "update")]
    Sync(sync::Options),
    #[clap(alias = "rooms")]
    Locate(locate::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage the lectures you are enrolled in")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(&options, state).await,
        Commands::Sync(options) => sync::handle(&options, state).await,
        Commands::Locate(options) => locate::handle(&options, state).await,
    }
}
