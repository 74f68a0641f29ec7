use anyhow::{anyhow, Result};
use serde::Deserialize;
use serde_json::Value;

/// The `{status, message, ...payload}` shape every endpoint answers with.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    // validation errors put a string or a list here
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(flatten)]
    pub data: T,
}

/// Payload for endpoints that only answer with status and message.
#[derive(Debug, Default, Deserialize)]
pub struct Empty {}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }

    /// Server provided text for a failure, if there is any.
    pub fn error_message(&self) -> Option<String> {
        self.message
            .clone()
            .filter(|message| !message.is_empty())
            .or_else(|| match &self.detail {
                Some(Value::String(detail)) => Some(detail.clone()),
                Some(Value::Null) | None => None,
                Some(detail) => Some(detail.to_string()),
            })
    }

    /// Turns a non-success status into an error carrying the server message verbatim.
    pub fn success(self, fallback: &str) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }

        Err(anyhow!(
            "{}",
            self.error_message().unwrap_or_else(|| fallback.to_string())
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    struct Keys {
        #[serde(default)]
        created: Vec<String>,
    }

    #[test]
    fn test_success_envelope() {
        let envelope: Envelope<Keys> = serde_json::from_str(
            r#"{"status": "success", "message": "ok", "created": ["PRO-1234-ABCD"]}"#,
        )
        .unwrap();

        let envelope = envelope.success("failed").unwrap();
        assert_eq!(envelope.message.as_deref(), Some("ok"));
        assert_eq!(envelope.data.created, vec!["PRO-1234-ABCD"]);
    }

    #[test]
    fn test_failure_keeps_server_message() {
        let envelope: Envelope<Empty> =
            serde_json::from_str(r#"{"status": "error", "message": "not in class"}"#).unwrap();

        assert_eq!(
            envelope.success("failed").unwrap_err().to_string(),
            "not in class"
        );
    }

    #[test]
    fn test_failure_falls_back_to_detail() {
        let envelope: Envelope<Keys> =
            serde_json::from_str(r#"{"detail": "key does not exist"}"#).unwrap();

        assert!(!envelope.is_success());
        assert_eq!(
            envelope.success("failed").unwrap_err().to_string(),
            "key does not exist"
        );
    }

    #[test]
    fn test_failure_without_message() {
        let envelope: Envelope<Empty> = serde_json::from_str(r#"{"status": "empty"}"#).unwrap();

        assert_eq!(
            envelope.success("Delete failed").unwrap_err().to_string(),
            "Delete failed"
        );
    }
}
