use anyhow::Result;
use clap::Parser;

use crate::commands::admin::utils::{get_users, yes_no};
use crate::state::State;
use crate::utils::table;

#[derive(Debug, Parser, Default)]
#[clap(about = "List users")]
pub struct Options {
    #[clap(long = "pro", help = "Only list Pro users")]
    pub pro: bool,
    #[clap(long = "admins", help = "Only list admins")]
    pub admins: bool,
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let mut users = get_users(&state.http).await?;

    if options.pro {
        users.retain(|user| user.is_pro.unwrap_or_default());
    }

    if options.admins {
        users.retain(|user| user.is_admin.unwrap_or_default());
    }

    if users.is_empty() {
        log::info!("No users found");

        return Ok(());
    }

    let rows = users.iter().map(|user| {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            user.id,
            user.name.as_deref().unwrap_or("-"),
            user.student_id.as_deref().unwrap_or("-"),
            yes_no(user.is_pro),
            yes_no(user.is_admin),
            user.firebase_uid.as_deref().unwrap_or("-"),
        )
    });

    println!(
        "{}",
        table(Some("ID\tNAME\tSTUDENT ID\tPRO\tADMIN\tFIREBASE UID"), rows)?.join("\n")
    );

    Ok(())
}
