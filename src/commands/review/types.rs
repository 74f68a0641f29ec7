use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Model {
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4o")]
    Gpt4o,
    #[serde(rename = "o1-pro")]
    O1Pro,
}

impl FromStr for Model {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        serde_json::from_str(&format!("\"{}\"", s.to_lowercase()))
            .map_err(|_| anyhow!("Unknown model `{s}`, pick one of gpt-3.5-turbo, gpt-4o, o1-pro"))
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let model = match self {
            Self::Gpt35Turbo => "gpt-3.5-turbo",
            Self::Gpt4o => "gpt-4o",
            Self::O1Pro => "o1-pro",
        };

        write!(f, "{model}")
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub model: Option<String>,
    // plain text for chat models, structured output for o1-pro
    #[serde(default)]
    pub answer: Option<Value>,
}
