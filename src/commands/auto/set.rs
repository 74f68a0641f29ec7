use anyhow::{ensure, Result};
use clap::Parser;

use super::utils::{get_enrolled_lectures, set_auto_lectures};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Attend these lectures automatically, replacing the current selection")]
pub struct Options {
    #[clap(name = "ids", help = "Lecture IDs, see `auto lectures`", required = true)]
    pub lecture_ids: Vec<u64>,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let enrolled = get_enrolled_lectures(&state.http).await?;

    let unknown = options
        .lecture_ids
        .iter()
        .filter(|id| !enrolled.iter().any(|lecture| lecture.lecture_id == **id))
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    ensure!(
        unknown.is_empty(),
        "You are not enrolled in lecture(s) {}",
        unknown.join(", ")
    );

    let message = set_auto_lectures(&state.http, &options.lecture_ids).await?;

    log::info!("{}", message.as_deref().unwrap_or("Auto attendance saved"));

    Ok(())
}
