mod delete;
mod generate;
pub mod list;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    #[clap(name = "gen", alias = "generate", alias = "new")]
    Generate(generate::Options),
    #[clap(name = "rm", alias = "delete")]
    Delete(delete::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage ProKeys")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(&options, state).await,
        Commands::Generate(options) => generate::handle(&options, state).await,
        Commands::Delete(options) => delete::handle(&options, state).await,
    }
}
