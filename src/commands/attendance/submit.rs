use anyhow::Result;
use clap::Parser;

use super::utils::submit_code;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Submit the attendance code of the running lecture")]
pub struct Options {
    #[clap(name = "code", help = "The 3 digit code announced in class")]
    pub code: String,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let message = submit_code(&state.http, options.code.trim()).await?;

    log::info!("{}", message.as_deref().unwrap_or("Attendance submitted"));

    Ok(())
}
