use anyhow::{ensure, Result};
use clap::Parser;
use reqwest::multipart::Form;

use crate::config::EXEC_NAME;
use crate::state::http::types::Empty;
use crate::state::http::Payload;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Activate Pro with a ProKey")]
pub struct Options {
    #[clap(name = "key", help = "The ProKey, like PRO-XXXX-XXXX")]
    pub key: String,
}

pub fn render() -> Result<()> {
    log::info!("Activate Pro with `{EXEC_NAME} pro verify <key>`");

    Ok(())
}

pub async fn handle(options: &Options, state: &State) -> Result<()> {
    let key = options.key.trim();

    ensure!(!key.is_empty(), "Enter a ProKey");

    let response = state
        .http
        .fetch::<Empty>(
            "POST",
            "/api/auth/verify_pro_key",
            Some(Payload::Multipart(
                Form::new().text("api_key", key.to_string()),
            )),
        )
        .await?
        .success("That ProKey is not valid")?;

    log::info!(
        "{}",
        response.message.as_deref().unwrap_or("Pro is now active")
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::state::StateOptions;
    use crate::store::storage::Storage;

    #[tokio::test]
    async fn test_blank_key_rejected() {
        let state = State::with_storage(
            Storage::in_memory(),
            StateOptions {
                override_api_url: None,
                override_token: Some("valid".to_string()),
            },
        )
        .await
        .unwrap();

        let error = handle(&Options { key: "   ".to_string() }, &state)
            .await
            .unwrap_err();

        assert_eq!(error.to_string(), "Enter a ProKey");
    }
}
