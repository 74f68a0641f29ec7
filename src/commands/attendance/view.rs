use anyhow::Result;
use clap::Parser;
use console::style;

use super::utils::{format_summary_value, get_course_attendance, parse_course_id};
use crate::state::State;
use crate::utils::table;

#[derive(Debug, Parser)]
#[clap(about = "Show your attendance record for a PLATO course")]
pub struct Options {
    #[clap(
        name = "course",
        help = "PLATO course ID, see `lectures ls`",
        value_parser = parse_course_id
    )]
    pub course: String,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    show(&options.course, state).await
}

pub async fn show(course: &str, state: &State) -> Result<()> {
    log::info!("Reading attendance from PLATO, this can take a moment");

    let attendance = get_course_attendance(&state.http, course).await?;

    println!(
        "{}",
        style(attendance.lecture_name.as_deref().unwrap_or(course)).bold()
    );

    if !attendance.summary.is_empty() {
        let rows = attendance
            .summary
            .iter()
            .map(|(label, value)| format!("{label}\t{}", format_summary_value(value)));

        println!("{}", table(None, rows)?.join("\n"));
    }

    if !attendance.records.is_empty() {
        println!();

        let rows = attendance.records.iter().map(|record| {
            let period = record
                .period
                .as_ref()
                .map_or_else(|| "-".to_string(), format_summary_value);

            format!("{}\t{period}\t{}", record.date, record.status)
        });

        println!("{}", table(Some("DATE\tPERIOD\tSTATUS"), rows)?.join("\n"));
    }

    if let Some(summary) = attendance.gpt_summary.filter(|summary| !summary.is_empty()) {
        println!();
        println!("{summary}");
    }

    Ok(())
}
