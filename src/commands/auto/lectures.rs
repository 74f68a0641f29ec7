use anyhow::Result;
use clap::Parser;

use super::utils::{format_enrolled, get_auto_courses, get_enrolled_lectures};
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List every lecture you can attend automatically")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    let lectures = get_enrolled_lectures(&state.http).await?;

    if lectures.is_empty() {
        log::info!("No lectures yet, run `{EXEC_NAME} lectures sync` first");

        return Ok(());
    }

    let enabled = get_auto_courses(&state.http)
        .await?
        .data
        .courses
        .iter()
        .map(|course| course.lecture_id)
        .collect::<Vec<_>>();

    println!("{}", format_enrolled(&lectures, &enabled)?.join("\n"));

    Ok(())
}
