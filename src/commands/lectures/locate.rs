use anyhow::Result;
use clap::Parser;

use super::utils::{format_lectures, update_locations};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Resolve the building and room of every lecture")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    let lectures = update_locations(&state.http).await?;

    log::info!("Updated rooms for {} lecture(s)", lectures.len());

    if !lectures.is_empty() {
        println!("{}", format_lectures(&lectures, true)?.join("\n"));
    }

    Ok(())
}
