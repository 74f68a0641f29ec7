use anyhow::Result;
use clap::Parser;

use crate::commands::admin::utils::{delete_pro_key, parse_pro_key};
use crate::state::State;
use crate::utils::confirm;

#[derive(Debug, Parser)]
#[clap(about = "Delete a ProKey")]
pub struct Options {
    #[clap(name = "key", help = "The ProKey to delete", value_parser = parse_pro_key)]
    pub key: String,
    #[clap(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    if !confirm(&format!("Delete ProKey `{}`?", options.key), options.yes)? {
        log::info!("Cancelled");

        return Ok(());
    }

    let message = delete_pro_key(&state.http, &options.key).await?;

    log::info!("{}", message.as_deref().unwrap_or("ProKey deleted"));

    Ok(())
}
