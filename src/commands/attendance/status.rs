use anyhow::Result;
use clap::Parser;

use super::utils::get_status;
use crate::config::EXEC_NAME;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Check whether a lecture is running right now")]
pub struct Options {}

pub async fn handle(state: &State) -> Result<()> {
    let status = get_status(&state.http).await?;

    if let Some(message) = &status.message {
        println!("{message}");
    }

    if status.data.can_attend {
        log::info!(
            "Submit the code for {} with `{EXEC_NAME} attendance submit <code>`",
            status.data.lecture_name.as_deref().unwrap_or("this lecture")
        );
    }

    Ok(())
}
