use anyhow::Result;
use clap::Parser;

use super::utils::{format_lectures, get_my_lectures};
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser, Default)]
#[clap(about = "List your lectures and their timetable")]
pub struct Options {
    #[clap(short, long, help = "Only print the IDs of the lectures")]
    pub quiet: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let lectures = get_my_lectures(&state.http).await?;

    if options.quiet {
        let ids = lectures
            .iter()
            .map(|lecture| lecture.id.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        println!("{ids}");

        return Ok(());
    }

    if lectures.is_empty() {
        log::info!("No lectures yet, run `{EXEC_NAME} lectures sync` to import them from PLATO");

        return Ok(());
    }

    println!("{}", format_lectures(&lectures, true)?.join("\n"));

    Ok(())
}
