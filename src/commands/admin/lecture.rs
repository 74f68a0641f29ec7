use anyhow::Result;
use clap::Parser;

use super::utils::get_lecture;
use crate::commands::lectures::utils::{format_room, format_schedule};
use crate::config::EXEC_NAME;
use crate::state::State;
use crate::utils::table;

#[derive(Debug, Parser)]
#[clap(about = "Show a lecture and its timetable")]
pub struct Options {
    #[clap(name = "id", help = "Lecture ID")]
    pub lecture_id: Option<String>,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    show(options.lecture_id.as_deref(), state).await
}

pub async fn show(lecture_id: Option<&str>, state: &State) -> Result<()> {
    let Some(lecture_id) = lecture_id else {
        log::info!("Look up a lecture with `{EXEC_NAME} admin lecture <id>`");

        return Ok(());
    };

    let lecture = get_lecture(&state.http, lecture_id).await?;

    let mut rows = vec![
        format!("ID\t{}", lecture.lecture_id),
        format!("Name\t{}", lecture.lecture_name.as_deref().unwrap_or("-")),
        format!(
            "Code\t{}-{}",
            lecture.code.as_deref().unwrap_or("-"),
            lecture.section.as_deref().unwrap_or("-")
        ),
        format!(
            "PLATO course\t{}",
            lecture
                .plato_course_id
                .map_or_else(|| "-".to_string(), |id| id.to_string())
        ),
    ];

    if lecture.schedules.is_empty() {
        rows.push("Schedule\t-".to_string());
    }

    for (idx, schedule) in lecture.schedules.iter().enumerate() {
        rows.push(format!(
            "{}\t{} ({})",
            if idx == 0 { "Schedule" } else { "" },
            format_schedule(schedule),
            format_room(schedule)
        ));
    }

    println!("{}", table(None, rows)?.join("\n"));

    Ok(())
}
