use std::fmt::Display;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::state::http::HttpClient;
use crate::store::storage::SharedStorage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unauthenticated,
    /// Logged in, but the student ID or the linked PLATO password is missing.
    Onboarding,
    Ready,
}

impl Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::Unauthenticated => "not logged in",
            Self::Onboarding => "onboarding",
            Self::Ready => "ready",
        };

        write!(f, "{status}")
    }
}

/// Who is using the client, computed once per run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub status: SessionStatus,
    pub is_admin: bool,
    pub is_pro: bool,
}

/// Response of `GET /api/auth/me`.
///
/// The server is loose with types here (`student_password` is a boolean,
/// `student_id` may be null or empty) so fields are kept as raw values and
/// checked for truthiness.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub student_id: Option<Value>,
    #[serde(default)]
    pub student_password: Option<Value>,
    #[serde(default)]
    pub is_admin: Option<Value>,
    #[serde(default)]
    pub is_pro: Option<Value>,
}

pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(value)) => *value,
        Some(Value::Number(number)) => number.as_f64().map_or(false, |n| n != 0.0 && !n.is_nan()),
        Some(Value::String(value)) => !value.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

impl Profile {
    pub fn has_student_id(&self) -> bool {
        truthy(self.student_id.as_ref())
    }

    pub fn has_student_password(&self) -> bool {
        truthy(self.student_password.as_ref())
    }

    pub fn is_admin(&self) -> bool {
        truthy(self.is_admin.as_ref())
    }

    pub fn is_pro(&self) -> bool {
        truthy(self.is_pro.as_ref())
    }

    pub fn student_id(&self) -> Option<String> {
        match &self.student_id {
            Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
            Some(Value::Number(id)) => Some(id.to_string()),
            _ => None,
        }
    }
}

impl Session {
    pub fn classify(profile: Option<Profile>) -> Self {
        let Some(profile) = profile else {
            return Self::default();
        };

        let status = if profile.has_student_id() && profile.has_student_password() {
            SessionStatus::Ready
        } else {
            SessionStatus::Onboarding
        };

        Self {
            status,
            is_admin: profile.is_admin(),
            is_pro: profile.is_pro(),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == SessionStatus::Ready
    }
}

/// Answers "who am I" for the current token.
#[async_trait]
pub trait ProfileSource {
    async fn me(&self) -> Result<Option<Profile>>;
}

#[async_trait]
impl ProfileSource for HttpClient {
    async fn me(&self) -> Result<Option<Profile>> {
        self.request::<Profile>("GET", "/api/auth/me", None).await
    }
}

/// Classifies the session. Without a stored token no request is made, and any
/// failure of the single "who am I" request counts as not logged in.
pub async fn bootstrap<S>(storage: &SharedStorage, source: &S) -> Session
where
    S: ProfileSource + Sync + ?Sized,
{
    let has_token = storage.lock().await.token().is_some();

    if !has_token {
        log::debug!("No token stored, not logged in");

        return Session::default();
    }

    let session = match source.me().await {
        Ok(profile) => Session::classify(profile),

        Err(error) => {
            log::debug!("Session check failed: {error:#}");

            Session::default()
        }
    };

    log::debug!("Session: {session:?}");

    session
}
