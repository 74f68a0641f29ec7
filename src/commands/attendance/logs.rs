use anyhow::Result;
use clap::Parser;

use super::utils::{format_logs, get_logs};
use crate::state::State;

#[derive(Debug, Parser, Default)]
#[clap(about = "List your attendance history, newest first")]
pub struct Options {
    #[clap(short = 'n', long = "limit", help = "Only show the most recent entries")]
    pub limit: Option<usize>,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let mut logs = get_logs(&state.http).await?;

    if logs.is_empty() {
        log::info!("No attendance recorded yet");

        return Ok(());
    }

    if let Some(limit) = options.limit {
        logs.truncate(limit);
    }

    println!("{}", format_logs(&logs, true)?.join("\n"));

    Ok(())
}
