use anyhow::Result;
use clap::{ArgAction, Parser};

use crate::commands::admin::utils::set_user_flag;
use crate::state::State;

#[derive(Debug, Parser)]
pub struct Options {
    #[clap(name = "user", help = "User ID")]
    pub user_id: u64,
    #[clap(name = "value", help = "`true` to grant, `false` to revoke", action = ArgAction::Set)]
    pub value: bool,
}

/// Grants or revokes a role, `flag` is the endpoint name.
pub async fn handle(options: &Options, flag: &str, state: &State) -> Result<()> {
    let message = set_user_flag(&state.http, options.user_id, flag, options.value).await?;

    log::info!("{}", message.as_deref().unwrap_or("User updated"));

    Ok(())
}
