use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;
use console::style;

use super::attendance::utils::get_status;
use super::lectures::types::NextLecture;
use super::lectures::utils::get_next_lecture;
use crate::config::EXEC_NAME;
use crate::session::{ProfileSource, SessionStatus};
use crate::state::State;

#[derive(Debug, Parser, Default)]
#[clap(about = "Show your next lecture and whether you can attend now")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    if state.session.status == SessionStatus::Unauthenticated {
        println!("{}", style("SuperPlato").bold());
        println!("Attendance for PLATO, from your terminal.");
        log::info!("Run `{EXEC_NAME} auth login` to get started");

        return Ok(());
    }

    let profile = state.http.me().await?.unwrap_or_default();

    println!(
        "Hi {}!",
        profile.name.as_deref().filter(|name| !name.is_empty()).unwrap_or("there")
    );

    match get_next_lecture(&state.http).await? {
        Some(next) => println!("{}", describe_next(&next)),
        None => log::debug!("No answer for the next lecture"),
    }

    let status = get_status(&state.http).await?;

    if status.data.can_attend {
        log::info!(
            "{} is running, submit the code with `{EXEC_NAME} attendance submit <code>`",
            status.data.lecture_name.as_deref().unwrap_or("A lecture")
        );
    } else if let Some(message) = status.message {
        println!("{message}");
    }

    if !state.session.is_pro {
        log::info!("Automate attendance with Pro, see `{EXEC_NAME} pro info`");
    }

    Ok(())
}

fn clock(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|timestamp| NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S").ok())
        .map_or_else(|| "?".to_string(), |time| time.format("%H:%M").to_string())
}

fn describe_next(next: &NextLecture) -> String {
    let name = next.name.as_deref().unwrap_or("A lecture");
    let start = clock(next.start_time.as_deref());
    let end = clock(next.end_time.as_deref());

    match next.status.as_deref() {
        Some("ongoing") => format!("Now: {name} ({start}~{end})"),
        Some("upcoming") => format!("Next: {name} at {start} (until {end})"),
        _ => "No more lectures today".to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn next(json: &str) -> NextLecture {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_describe_next() {
        assert_eq!(
            describe_next(&next(
                r#"{"status": "ongoing", "name": "Operating Systems", "start_time": "2024-03-04T09:00:00", "end_time": "2024-03-04T10:15:00"}"#
            )),
            "Now: Operating Systems (09:00~10:15)"
        );

        assert_eq!(
            describe_next(&next(
                r#"{"status": "upcoming", "name": "Linear Algebra", "start_time": "2024-03-04T13:30:00", "end_time": "2024-03-04T14:45:00"}"#
            )),
            "Next: Linear Algebra at 13:30 (until 14:45)"
        );

        assert_eq!(describe_next(&next(r#"{"status": "none"}"#)), "No more lectures today");
    }
}
