mod browser_auth;
pub mod types;

use anyhow::{anyhow, Result};
use clap::Parser;

use self::browser_auth::browser_login;
use self::types::{LoginRequest, LoginResponse};
use crate::config::{EXEC_NAME, ID_TOKEN_ENV};
use crate::state::http::types::Envelope;
use crate::state::State;

#[derive(Debug, Parser, Default, PartialEq, Eq)]
#[clap(about = "Login to SuperPlato")]
pub struct Options {
    #[clap(
        long = "id-token",
        help = "Google ID token to exchange for a session",
        long_help = "Google ID token to exchange for a session, falls back to $PLATO_ID_TOKEN and then to signing in through the browser"
    )]
    pub id_token: Option<String>,
}

pub async fn handle(options: Options, state: &State) -> Result<()> {
    let id_token = if let Some(id_token) = options.id_token {
        id_token
    } else if let Ok(env_token) = std::env::var(ID_TOKEN_ENV) {
        env_token
    } else {
        browser_login().await?
    };

    login(&id_token, state).await
}

/// Exchanges an identity provider token for an API token and stores it.
pub async fn login(id_token: &str, state: &State) -> Result<()> {
    // nothing from an earlier session may survive a new login
    state.storage.lock().await.sweep_session_keys().await?;

    match exchange(id_token, state).await {
        Ok(response) => {
            let token = response
                .token
                .as_deref()
                .ok_or_else(|| anyhow!("Login succeeded but no token was returned"))?;

            state.storage.lock().await.set_token(token).await?;

            log::info!("Logged in");

            if !response.profile_complete {
                log::info!("Finish setting up your account with `{EXEC_NAME} onboarding`");
            }

            Ok(())
        }

        Err(error) => {
            let mut storage = state.storage.lock().await;
            storage.clear_token().await?;
            storage.sweep_session_keys().await?;

            Err(anyhow!("Login failed: {error}"))
        }
    }
}

async fn exchange(id_token: &str, state: &State) -> Result<LoginResponse> {
    let response = state
        .http
        .post_public::<_, Envelope<LoginResponse>>(
            "/api/auth/login_firebase",
            &LoginRequest { token: id_token },
        )
        .await?
        .success("Invalid identity token, please sign in again")?;

    Ok(response.data)
}
