use anyhow::{ensure, Context, Result};
use clap::Parser;

use super::account::utils::{update_profile, ProfileForm};
use super::lectures::utils::sync_lectures;
use super::pages;
use crate::config::EXEC_NAME;
use crate::session::ProfileSource;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Link your PLATO account")]
pub struct Options {
    #[clap(long = "name", help = "Your name")]
    pub name: Option<String>,
    #[clap(long = "student-id", help = "Your student ID")]
    pub student_id: Option<String>,
    #[clap(
        long = "student-password",
        help = "Your PLATO password",
        long_help = "Your PLATO password, prompted for when omitted so it stays out of your shell history"
    )]
    pub student_password: Option<String>,
    #[clap(long = "agree", help = "Agree to the privacy policy without prompting")]
    pub agree: bool,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    let default_name = default_name(state).await?;

    let name = match options.name {
        Some(name) => name,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Name")
            .with_initial_text(default_name.unwrap_or_default())
            .interact_text()
            .context("Failed to read the name")?,
    };

    let student_id = match options.student_id {
        Some(student_id) => student_id,
        None => dialoguer::Input::<String>::new()
            .with_prompt("Student ID")
            .interact_text()
            .context("Failed to read the student ID")?,
    };

    let student_password = match options.student_password {
        Some(password) => password,
        None => dialoguer::Password::new()
            .with_prompt("PLATO password")
            .interact()
            .context("Failed to read the password")?,
    };

    let agreed = options.agree || {
        pages::privacy()?;
        println!();

        dialoguer::Confirm::new()
            .with_prompt("Do you agree to the privacy policy?")
            .default(false)
            .interact()
            .context("Failed to read the answer")?
    };

    let form = ProfileForm {
        name,
        student_id,
        student_password,
    };

    submit(&form, agreed, state).await
}

/// Saves the PLATO credentials, then imports the lectures with them.
pub async fn submit(form: &ProfileForm, agreed: bool, state: &State) -> Result<()> {
    ensure!(agreed, "You have to agree to the privacy policy to continue");
    ensure!(!form.name.trim().is_empty(), "Name is required");
    ensure!(!form.student_id.trim().is_empty(), "Student ID is required");
    ensure!(!form.student_password.is_empty(), "PLATO password is required");

    let message = update_profile(&state.http, form).await?;

    log::info!("{}", message.as_deref().unwrap_or("Profile saved"));
    log::info!("Importing your lectures from PLATO, this can take a minute");

    let message = sync_lectures(&state.http).await?;

    log::info!("{}", message.as_deref().unwrap_or("Lectures imported"));
    log::info!("All set! Run `{EXEC_NAME} home` to see your next lecture");

    Ok(())
}

async fn default_name(state: &State) -> Result<Option<String>> {
    Ok(state
        .http
        .me()
        .await?
        .and_then(|profile| profile.name)
        .filter(|name| !name.is_empty()))
}

pub async fn render(state: &State) -> Result<()> {
    let name = default_name(state).await?;

    log::info!(
        "Welcome{}! Link your PLATO account to start",
        name.map(|name| format!(", {name}")).unwrap_or_default()
    );
    log::info!("Run `{EXEC_NAME} onboarding` and enter your student ID and PLATO password");

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::StateOptions;
    use crate::store::storage::Storage;

    async fn state() -> State {
        let mut storage = Storage::in_memory();
        storage.set_token("valid").await.unwrap();

        let port = portpicker::pick_unused_port().unwrap();

        State::with_storage(
            storage,
            StateOptions {
                override_api_url: Some(format!("http://127.0.0.1:{port}")),
                override_token: None,
            },
        )
        .await
        .unwrap()
    }

    fn form() -> ProfileForm {
        ProfileForm {
            name: "Kim".to_string(),
            student_id: "202412345".to_string(),
            student_password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn test_consent_required() {
        let error = submit(&form(), false, &state().await).await.unwrap_err();

        assert!(error.to_string().contains("privacy policy"));
    }

    #[tokio::test]
    async fn test_empty_student_id_rejected() {
        let form = ProfileForm {
            student_id: "  ".to_string(),
            ..form()
        };

        let error = submit(&form, true, &state().await).await.unwrap_err();

        assert_eq!(error.to_string(), "Student ID is required");
    }
}
