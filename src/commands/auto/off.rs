use anyhow::Result;
use clap::Parser;

use super::utils::set_auto_lectures;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Turn auto attendance off for every lecture")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    set_auto_lectures(&state.http, &[]).await?;

    log::info!("Auto attendance is off");

    Ok(())
}
