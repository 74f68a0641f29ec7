use anyhow::Result;
use clap::Parser;

use super::utils::{format_lectures, get_my_lectures, sync_lectures};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Import your lectures and timetable from PLATO")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    log::info!("Syncing lectures from PLATO, this can take a minute");

    let message = sync_lectures(&state.http).await?;

    log::info!("{}", message.as_deref().unwrap_or("Lectures synced"));

    let lectures = get_my_lectures(&state.http).await?;

    if !lectures.is_empty() {
        println!("{}", format_lectures(&lectures, true)?.join("\n"));
    }

    Ok(())
}
