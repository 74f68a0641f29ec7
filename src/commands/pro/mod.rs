pub mod info;
pub mod verify;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::routes::Route;
use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(alias = "ad")]
    Info(info::Options),
    #[clap(alias = "activate")]
    Verify(verify::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "SuperPlato Pro")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

impl Options {
    pub fn route(&self) -> Route {
        match self.commands {
            Commands::Info(_) => Route::ProAd,
            Commands::Verify(_) => Route::ProKeyVerify,
        }
    }
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    match options.commands {
        Commands::Info(_) => info::render(),
        Commands::Verify(options) => verify::handle(&options, state).await,
    }
}
