use anyhow::{anyhow, Result};
use clap::Parser;

use crate::session::ProfileSource;
use crate::state::State;
use crate::utils::table;

#[derive(Debug, Parser)]
#[clap(about = "Show your account")]
pub struct Options {}

pub async fn handle(state: &State) -> Result<()> {
    let profile = state
        .http
        .me()
        .await?
        .ok_or_else(|| anyhow!("No response from the server"))?;

    let rows = vec![
        format!("Name\t{}", profile.name.as_deref().unwrap_or("-")),
        format!(
            "Student ID\t{}",
            profile.student_id().as_deref().unwrap_or("-")
        ),
        format!(
            "PLATO password\t{}",
            if profile.has_student_password() {
                "saved"
            } else {
                "missing"
            }
        ),
        format!("Pro\t{}", if profile.is_pro() { "yes" } else { "no" }),
    ];

    println!("{}", table(None, rows)?.join("\n"));

    Ok(())
}
