#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use superplato_cli::commands::handle_command;
use superplato_cli::state::{State, StateOptions};
use superplato_cli::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    // create a new CLI instance
    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = match State::new(StateOptions::from_env(cli.api_url)).await {
        Ok(state) => state,

        Err(error) => {
            log::error!("{error:#}");
            std::process::exit(1);
        }
    };

    if let Err(error) = handle_command(cli.commands, state).await {
        log::error!("{error}");
        utils::clean_term();
        std::process::exit(1);
    }

    utils::clean_term();

    Ok(())
}
