use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::HOME_ENV;

/// Joins `to_join` onto `PLATO_HOME` when set, the user's home directory otherwise.
pub fn home_path(to_join: &str) -> Result<PathBuf> {
    let home = match std::env::var_os(HOME_ENV) {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => dirs::home_dir().context("Could not find `home` directory")?,
    };

    let path = home.join(to_join);

    log::debug!("Home path + joined: {path:?}");

    Ok(path)
}
