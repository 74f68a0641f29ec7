use anyhow::Result;
use clap::Parser;

use crate::commands::admin::utils::get_user_attendances;
use crate::commands::attendance::utils::format_logs;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List a user's attendance history")]
pub struct Options {
    #[clap(name = "user", help = "User ID")]
    pub user_id: u64,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let logs = get_user_attendances(&state.http, options.user_id).await?;

    if logs.is_empty() {
        log::info!("User {} has no attendance recorded", options.user_id);

        return Ok(());
    }

    println!("{}", format_logs(&logs, true)?.join("\n"));

    Ok(())
}
