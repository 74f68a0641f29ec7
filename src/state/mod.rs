pub mod http;

use anyhow::Result;

use self::http::HttpClient;
use crate::config::{API_URL_ENV, TOKEN_KEY, TOKEN_ENV};
use crate::session::{self, Session};
use crate::store::storage::{Scope, SharedStorage, Storage};

#[derive(Debug)]
pub struct State {
    pub http: HttpClient,
    pub storage: SharedStorage,
    pub session: Session,
}

pub struct StateOptions {
    pub override_api_url: Option<String>,
    pub override_token: Option<String>,
}

impl StateOptions {
    pub fn from_env(override_api_url: Option<String>) -> Self {
        Self {
            override_api_url: override_api_url.or_else(|| std::env::var(API_URL_ENV).ok()),
            override_token: std::env::var(TOKEN_ENV).ok().filter(|token| !token.is_empty()),
        }
    }
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let storage = Storage::load().await?;

        Self::with_storage(storage, options).await
    }

    pub async fn with_storage(mut storage: Storage, options: StateOptions) -> Result<Self> {
        // an override token only lives for this process
        if let Some(token) = options.override_token {
            storage.set(Scope::Session, TOKEN_KEY, &token).await?;
        }

        let storage = storage.shared();
        let http = HttpClient::new(storage.clone(), options.override_api_url)?;

        Ok(Self {
            http,
            storage,
            session: Session::default(),
        })
    }

    /// Classifies the session. Gated commands call this once before dispatch.
    pub async fn bootstrap(&mut self) -> Session {
        self.session = session::bootstrap(&self.storage, &self.http).await;

        self.session
    }
}
