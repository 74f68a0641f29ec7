use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::brute_force;
use crate::config::EXEC_NAME;
use crate::state::State;
use crate::utils::confirm;

#[derive(Debug, Parser)]
#[clap(about = "Try every code for the running lecture (Pro)")]
pub struct Options {
    #[clap(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    ensure!(
        state.session.is_pro,
        "Trying every code is a Pro feature, see `{EXEC_NAME} pro info`"
    );

    if !confirm(
        "Try every code for the running lecture? Only do this for a lecture you are attending",
        options.yes,
    )? {
        log::info!("Cancelled");

        return Ok(());
    }

    log::info!("Trying codes, this can take a few minutes");

    let message = brute_force(&state.http).await?;

    log::info!("{}", message.as_deref().unwrap_or("Attendance submitted"));

    Ok(())
}
