use anyhow::Result;
use clap::Parser;

use crate::commands::admin::utils::set_user_auto_targets;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Replace a user's auto attendance lectures, none turns it off")]
pub struct Options {
    #[clap(name = "user", help = "User ID")]
    pub user_id: u64,
    #[clap(name = "ids", help = "Lecture IDs to attend automatically")]
    pub lecture_ids: Vec<u64>,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let message =
        set_user_auto_targets(&state.http, options.user_id, &options.lecture_ids).await?;

    log::info!("{}", message.as_deref().unwrap_or("Auto attendance saved"));

    Ok(())
}
