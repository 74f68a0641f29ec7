use anyhow::Result;
use clap::Parser;

use crate::config::EXEC_NAME;
use crate::session::{ProfileSource, SessionStatus};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get information about the current user")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    let session = state.session;

    if session.status == SessionStatus::Unauthenticated {
        log::info!("You are not logged in, run `{EXEC_NAME} auth login` to sign in");

        return Ok(());
    }

    let profile = state.http.me().await?.unwrap_or_default();

    println!(
        "You are logged in as `{}` ({})",
        profile.name.as_deref().unwrap_or("unnamed"),
        profile.student_id().as_deref().unwrap_or("no student ID")
    );
    println!("Status: {}", session.status);
    println!("Pro: {}", if session.is_pro { "yes" } else { "no" });

    if session.is_admin {
        println!("Admin: yes");
    }

    if session.status == SessionStatus::Onboarding {
        log::info!("Finish setting up your account with `{EXEC_NAME} onboarding`");
    }

    Ok(())
}
