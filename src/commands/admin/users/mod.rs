pub mod list;
mod role;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "ls", alias = "list")]
    List(list::Options),
    #[clap(name = "set-pro", about = "Grant or revoke Pro")]
    SetPro(role::Options),
    #[clap(name = "set-admin", about = "Grant or revoke admin")]
    SetAdmin(role::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage users")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(&options, state).await,
        Commands::SetPro(options) => role::handle(&options, "set_pro", state).await,
        Commands::SetAdmin(options) => role::handle(&options, "set_admin", state).await,
    }
}
