use anyhow::{anyhow, ensure, Context, Result};
use clap::Parser;

use super::utils::{update_profile, ProfileForm, KEEP_PASSWORD};
use crate::session::ProfileSource;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Change your name, student ID or PLATO password")]
pub struct Options {
    #[clap(long = "name", help = "New name")]
    pub name: Option<String>,
    #[clap(long = "student-id", help = "New student ID")]
    pub student_id: Option<String>,
    #[clap(long = "password", help = "Prompt for a new PLATO password")]
    pub password: bool,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    let profile = state
        .http
        .me()
        .await?
        .ok_or_else(|| anyhow!("No response from the server"))?;

    let interactive = options.name.is_none() && options.student_id.is_none() && !options.password;

    let name = match options.name {
        Some(name) => name,
        None if interactive => dialoguer::Input::<String>::new()
            .with_prompt("Name")
            .with_initial_text(profile.name.clone().unwrap_or_default())
            .interact_text()
            .context("Failed to read the name")?,
        None => profile.name.clone().unwrap_or_default(),
    };

    let student_id = match options.student_id {
        Some(student_id) => student_id,
        None if interactive => dialoguer::Input::<String>::new()
            .with_prompt("Student ID")
            .with_initial_text(profile.student_id().unwrap_or_default())
            .interact_text()
            .context("Failed to read the student ID")?,
        None => profile.student_id().unwrap_or_default(),
    };

    let student_password = if options.password {
        dialoguer::Password::new()
            .with_prompt("New PLATO password")
            .with_confirmation("Repeat the password", "Passwords do not match")
            .interact()
            .context("Failed to read the password")?
    } else {
        KEEP_PASSWORD.to_string()
    };

    ensure!(!name.trim().is_empty(), "Name is required");
    ensure!(!student_id.trim().is_empty(), "Student ID is required");

    let message = update_profile(
        &state.http,
        &ProfileForm {
            name,
            student_id,
            student_password,
        },
    )
    .await?;

    log::info!("{}", message.as_deref().unwrap_or("Profile updated"));

    Ok(())
}
