use anyhow::Result;
use clap::Parser;

use super::utils::get_auto_courses;
use crate::config::EXEC_NAME;
use crate::state::State;
use crate::utils::table;

#[derive(Debug, Parser, Default)]
#[clap(about = "List the lectures attended automatically")]
pub struct Options {
    #[clap(short, long, help = "Only print the IDs of the lectures")]
    pub quiet: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let response = get_auto_courses(&state.http).await?;
    let courses = response.data.courses;

    if options.quiet {
        let ids = courses
            .iter()
            .map(|course| course.lecture_id.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");

        return Ok(());
    }

    if courses.is_empty() {
        log::info!("Auto attendance is off, pick lectures with `{EXEC_NAME} auto set <ids>`");
        log::info!("See the IDs with `{EXEC_NAME} auto lectures`");

        return Ok(());
    }

    if let Some(message) = response.message {
        log::info!("{message}");
    }

    let rows = courses.iter().map(|course| {
        format!(
            "{}\t{}\t{}-{}",
            course.lecture_id,
            course.lecture_name.as_deref().unwrap_or("-"),
            course.code.as_deref().unwrap_or("-"),
            course.section.as_deref().unwrap_or("-"),
        )
    });

    println!("{}", table(Some("ID\tNAME\tCODE"), rows)?.join("\n"));

    Ok(())
}
