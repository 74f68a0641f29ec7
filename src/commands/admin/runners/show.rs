use anyhow::Result;
use clap::Parser;

use crate::commands::admin::utils::{get_user_auto_targets, get_user_lectures};
use crate::commands::auto::utils::format_enrolled;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Show a user's lectures and which ones run on auto attendance")]
pub struct Options {
    #[clap(name = "user", help = "User ID")]
    pub user_id: u64,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let lectures = get_user_lectures(&state.http, options.user_id).await?;

    if lectures.is_empty() {
        log::info!("User {} has no lectures", options.user_id);

        return Ok(());
    }

    let enabled = get_user_auto_targets(&state.http, options.user_id).await?;

    println!("{}", format_enrolled(&lectures, &enabled)?.join("\n"));

    Ok(())
}
