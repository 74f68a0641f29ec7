use anyhow::Result;
use clap::Parser;

use super::utils::delete_account;
use crate::commands::auth::logout::logout;
use crate::state::State;
use crate::utils::confirm;

#[derive(Debug, Parser)]
#[clap(about = "Delete your account and everything stored with it")]
pub struct Options {
    #[clap(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    if !confirm(
        "Delete your account? Your attendance history is removed too",
        options.yes,
    )? {
        log::info!("Cancelled");

        return Ok(());
    }

    let deleted = delete_account(&state.http).await;

    // signed out whatever the server answered
    logout(state).await?;

    let message = deleted?;

    log::info!("{}", message.as_deref().unwrap_or("Account deleted"));

    Ok(())
}
