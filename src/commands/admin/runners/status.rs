use anyhow::Result;
use clap::Parser;

use crate::commands::admin::types::RunnerTarget;
use crate::commands::admin::utils::get_runner_status;
use crate::state::State;
use crate::utils::table;

#[derive(Debug, Parser)]
#[clap(about = "List every lecture the runner attends, per user")]
pub struct Options {}

pub async fn handle(state: &State) -> Result<()> {
    let status = get_runner_status(&state.http).await?;

    if status.data.is_empty() {
        log::info!("Nobody has auto attendance enabled");

        return Ok(());
    }

    log::info!("Watching {} user and lecture pair(s)", status.count);

    println!("{}", format_targets(&status.data)?.join("\n"));

    Ok(())
}

fn format_targets(targets: &[RunnerTarget]) -> Result<Vec<String>> {
    let rows = targets.iter().map(|target| {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}-{}\t{}",
            target.user_id,
            target.user_name.as_deref().unwrap_or("-"),
            target.student_id.as_deref().unwrap_or("-"),
            target.lecture_id,
            target.lecture_name.as_deref().unwrap_or("-"),
            target.lecture_code.as_deref().unwrap_or("-"),
            target.lecture_section.as_deref().unwrap_or("-"),
            target
                .plato_course_id
                .map_or_else(|| "-".to_string(), |id| id.to_string()),
        )
    });

    table(
        Some("USER\tNAME\tSTUDENT ID\tLECTURE\tLECTURE NAME\tCODE\tCOURSE"),
        rows,
    )
}
