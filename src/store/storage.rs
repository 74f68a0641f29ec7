use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs::{self, File};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::sync::Mutex;

use super::utils::home_path;
use crate::config::{SESSION_KEYS, STORAGE_DIR, STORAGE_FILE, TOKEN_KEY};

pub type SharedStorage = Arc<Mutex<Storage>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Written to disk, survives between runs.
    Local,
    /// Lives as long as the process.
    Session,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Entries {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// Key-value storage with a persistent and a process scoped half.
#[derive(Debug, Default)]
pub struct Storage {
    local: BTreeMap<String, String>,
    session: BTreeMap<String, String>,
    path: Option<PathBuf>,
}

impl Storage {
    pub fn path() -> Result<PathBuf> {
        home_path(&format!("{STORAGE_DIR}/{STORAGE_FILE}"))
    }

    pub async fn load() -> Result<Self> {
        Self::open(Self::path()?).await
    }

    pub async fn open(path: PathBuf) -> Result<Self> {
        if fs::metadata(&path).await.is_err() {
            log::debug!("No storage at {path:?}, starting empty");

            return Ok(Self {
                path: Some(path),
                ..Default::default()
            });
        }

        let mut file = File::open(&path)
            .await
            .context("Error opening storage file")?;

        let mut buffer = String::new();
        file.read_to_string(&mut buffer).await?;

        let Entries { entries } =
            serde_json::from_str(&buffer).context("Failed to deserialize storage")?;

        Ok(Self {
            local: entries,
            session: BTreeMap::new(),
            path: Some(path),
        })
    }

    /// Storage that is never written to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedStorage {
        Arc::new(Mutex::new(self))
    }

    fn scope(&self, scope: Scope) -> &BTreeMap<String, String> {
        match scope {
            Scope::Local => &self.local,
            Scope::Session => &self.session,
        }
    }

    fn scope_mut(&mut self, scope: Scope) -> &mut BTreeMap<String, String> {
        match scope {
            Scope::Local => &mut self.local,
            Scope::Session => &mut self.session,
        }
    }

    pub fn get(&self, scope: Scope, key: &str) -> Option<&str> {
        self.scope(scope).get(key).map(String::as_str)
    }

    pub fn keys(&self, scope: Scope) -> Vec<&str> {
        self.scope(scope).keys().map(String::as_str).collect()
    }

    pub async fn set(&mut self, scope: Scope, key: &str, value: &str) -> Result<()> {
        self.scope_mut(scope)
            .insert(key.to_string(), value.to_string());

        if scope == Scope::Local {
            self.persist().await?;
        }

        Ok(())
    }

    pub async fn remove(&mut self, scope: Scope, key: &str) -> Result<()> {
        let removed = self.scope_mut(scope).remove(key).is_some();

        if removed && scope == Scope::Local {
            self.persist().await?;
        }

        Ok(())
    }

    /// The live bearer token. A process override in the session scope wins.
    pub fn token(&self) -> Option<&str> {
        self.get(Scope::Session, TOKEN_KEY)
            .or_else(|| self.get(Scope::Local, TOKEN_KEY))
            .filter(|token| !token.is_empty())
    }

    pub async fn set_token(&mut self, token: &str) -> Result<()> {
        self.set(Scope::Local, TOKEN_KEY, token).await
    }

    pub async fn clear_token(&mut self) -> Result<()> {
        self.session.remove(TOKEN_KEY);
        self.remove(Scope::Local, TOKEN_KEY).await
    }

    /// Drops the token the server just refused. An override only clears itself.
    pub async fn reject_token(&mut self) -> Result<()> {
        if self.session.remove(TOKEN_KEY).is_some() {
            return Ok(());
        }

        self.remove(Scope::Local, TOKEN_KEY).await
    }

    /// Removes every known credential key from both scopes and leaves the rest alone.
    pub async fn sweep_session_keys(&mut self) -> Result<()> {
        let mut changed = false;

        for key in SESSION_KEYS {
            self.session.remove(*key);

            if self.local.remove(*key).is_some() {
                log::debug!("Removed `{key}` from storage");
                changed = true;
            }
        }

        if changed {
            self.persist().await?;
        }

        Ok(())
    }

    pub async fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        fs::create_dir_all(path.parent().context("Failed to get storage directory")?)
            .await
            .context("Failed to create storage directory")?;

        let mut file = File::create(path)
            .await
            .context("Error opening storage file")?;

        let entries = Entries {
            entries: self.local.clone(),
        };

        file.write_all(
            serde_json::to_string(&entries)
                .context("Failed to serialize storage")?
                .as_bytes(),
        )
        .await
        .context("Failed to write storage")?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_token_absent_by_default() {
        let storage = Storage::in_memory();

        assert_eq!(storage.token(), None);
    }

    #[tokio::test]
    async fn test_empty_token_is_absent() {
        let mut storage = Storage::in_memory();
        storage.set_token("").await.unwrap();

        assert_eq!(storage.token(), None);
    }

    #[tokio::test]
    async fn test_session_override_wins() {
        let mut storage = Storage::in_memory();
        storage.set_token("stored").await.unwrap();
        storage
            .set(Scope::Session, TOKEN_KEY, "override")
            .await
            .unwrap();

        assert_eq!(storage.token(), Some("override"));

        storage.clear_token().await.unwrap();
        assert_eq!(storage.token(), None);
    }

    #[tokio::test]
    async fn test_rejected_override_keeps_stored_token() {
        let mut storage = Storage::in_memory();
        storage.set_token("stored").await.unwrap();
        storage
            .set(Scope::Session, TOKEN_KEY, "override")
            .await
            .unwrap();

        storage.reject_token().await.unwrap();

        assert_eq!(storage.get(Scope::Session, TOKEN_KEY), None);
        assert_eq!(storage.get(Scope::Local, TOKEN_KEY), Some("stored"));

        storage.reject_token().await.unwrap();
        assert_eq!(storage.token(), None);
    }

    #[tokio::test]
    async fn test_sweep_keeps_unrelated_keys() {
        let mut storage = Storage::in_memory();

        for key in ["jwt", "authToken", "session", "unrelatedKey"] {
            storage.set(Scope::Local, key, "value").await.unwrap();
        }
        storage.set(Scope::Session, "jwt", "value").await.unwrap();
        storage.set(Scope::Session, "theme", "dark").await.unwrap();

        storage.sweep_session_keys().await.unwrap();

        assert_eq!(storage.keys(Scope::Local), vec!["unrelatedKey"]);
        assert_eq!(storage.keys(Scope::Session), vec!["theme"]);
    }

    #[tokio::test]
    async fn test_persist_round_trip() {
        let dir = std::env::temp_dir().join(format!("plato-storage-{}", std::process::id()));
        let path = dir.join(STORAGE_FILE);

        let mut storage = Storage::open(path.clone()).await.unwrap();
        storage.set_token("abc").await.unwrap();
        storage
            .set(Scope::Session, "ephemeral", "gone")
            .await
            .unwrap();

        let reopened = Storage::open(path).await.unwrap();
        assert_eq!(reopened.token(), Some("abc"));
        assert_eq!(reopened.get(Scope::Session, "ephemeral"), None);

        fs::remove_dir_all(dir).await.ok();
    }
}
