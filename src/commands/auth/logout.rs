use anyhow::Result;
use clap::Parser;

use crate::state::http::types::{Empty, Envelope};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Logout the current user")]
pub struct Options {}

pub async fn handle(_options: &Options, state: &State) -> Result<()> {
    logout(state).await?;

    log::info!("You have been logged out");

    Ok(())
}

/// Ends the server side session, then drops every stored credential.
pub async fn logout(state: &State) -> Result<()> {
    // the local sweep happens whatever the server says
    if let Err(error) = state
        .http
        .request::<Envelope<Empty>>("POST", "/api/auth/logout", None)
        .await
    {
        log::debug!("Server logout failed: {error:#}");
    }

    let mut storage = state.storage.lock().await;

    storage.clear_token().await?;
    storage.sweep_session_keys().await
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::StateOptions;
    use crate::store::storage::{Scope, Storage};

    #[tokio::test]
    async fn test_logout_sweeps_session_keys() {
        let mut storage = Storage::in_memory();

        for key in ["jwt", "authToken", "session", "unrelatedKey"] {
            storage.set(Scope::Local, key, "value").await.unwrap();
        }

        // the server is unreachable, logout still clears local state
        let port = portpicker::pick_unused_port().unwrap();
        let state = State::with_storage(
            storage,
            StateOptions {
                override_api_url: Some(format!("http://127.0.0.1:{port}")),
                override_token: None,
            },
        )
        .await
        .unwrap();

        logout(&state).await.unwrap();

        let storage = state.storage.lock().await;
        assert_eq!(storage.keys(Scope::Local), vec!["unrelatedKey"]);
        assert_eq!(storage.token(), None);
    }
}
