#[cfg(test)]
pub mod test_server;
pub mod types;

use anyhow::{anyhow, Context, Result};
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client as AsyncClient, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use self::types::Envelope;
use crate::config::{API_BASE_URL, EXEC_NAME, VERSION};
use crate::store::storage::SharedStorage;

/// Request bodies the API accepts.
#[derive(Debug)]
pub enum Payload {
    Json(Value),
    Form(Vec<(String, String)>),
    Multipart(Form),
}

impl Payload {
    fn apply(self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Json(body) => request.json(&body),
            Self::Form(fields) => request.form(&fields),
            Self::Multipart(form) => request.multipart(form),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    pub client: AsyncClient,
    pub base_url: String,
    pub ua: String,
    storage: SharedStorage,
}

impl HttpClient {
    pub fn new(storage: SharedStorage, api_url: Option<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(ACCEPT, "application/json".parse()?);

        let ua = format!(
            "plato_cli/{VERSION} on {}",
            sys_info::os_type().unwrap_or_else(|_| "unknown".to_string())
        );

        let base_url = api_url
            .unwrap_or_else(|| API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client: AsyncClient::builder()
                .user_agent(ua.clone())
                .default_headers(headers)
                .build()
                .context("Failed to build the HTTP client")?,
            base_url,
            ua,
            storage,
        })
    }

    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }

    /// Token is read on every call so a cleared token is never reused.
    async fn token(&self) -> Option<String> {
        self.storage.lock().await.token().map(str::to_string)
    }

    /// Authenticated request.
    ///
    /// Yields `Ok(None)` when there is no token, when the server rejects the
    /// token (the token is cleared too), or when the body is not JSON of the
    /// expected shape. Only transport failures are errors.
    pub async fn request<T>(
        &self,
        method: &str,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let Some(token) = self.token().await else {
            log::debug!("No token stored, skipping {method} {path}");

            return Ok(None);
        };

        let mut request = self
            .client
            .request(method.parse()?, format!("{}{}", self.base_url, path))
            .bearer_auth(token);

        log::debug!("request: {method} {path}");

        if let Some(payload) = payload {
            request = payload.apply(request);
        }

        #[cfg(debug_assertions)]
        let now = tokio::time::Instant::now();

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        #[cfg(debug_assertions)]
        log::debug!("response in: {:#?}", now.elapsed());

        self.handle_response(response).await
    }

    async fn handle_response<T>(&self, response: reqwest::Response) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            log::debug!("HTTP {status}, dropping the stored token");

            self.storage.lock().await.reject_token().await?;

            return Ok(None);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !content_type.contains("application/json") {
            log::warn!("Not a JSON response: {content_type:?} (HTTP {status})");

            return Ok(None);
        }

        match response.json::<T>().await {
            Ok(body) => Ok(Some(body)),

            Err(error) => {
                log::warn!("Malformed response (HTTP {status}): {error}");

                Ok(None)
            }
        }
    }

    /// Authenticated request for an enveloped endpoint where "no data" is a failure.
    pub async fn fetch<T>(
        &self,
        method: &str,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
    {
        self.request::<Envelope<T>>(method, path, payload)
            .await?
            .ok_or_else(|| {
                anyhow!("No response from the server. Are you logged in? Try `{EXEC_NAME} auth login`")
            })
    }

    /// Unauthenticated JSON POST, used for the login exchange.
    pub async fn post_public<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        log::debug!("request: POST {path} (public)");

        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", self.base_url))?;

        let status = response.status();

        response
            .json::<T>()
            .await
            .with_context(|| format!("Unexpected login response (HTTP {status})"))
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::config::TOKEN_KEY;
    use crate::store::storage::{Scope, Storage};

    async fn client(prefix: &str, token: Option<&str>) -> HttpClient {
        let base = test_server::spawn().await;

        let mut storage = Storage::in_memory();
        if let Some(token) = token {
            storage.set_token(token).await.unwrap();
        }

        HttpClient::new(storage.shared(), Some(format!("{base}/{prefix}"))).unwrap()
    }

    #[tokio::test]
    async fn test_no_token_skips_request() {
        // nothing listens on this port, a request would fail
        let port = portpicker::pick_unused_port().unwrap();
        let http = HttpClient::new(
            Storage::in_memory().shared(),
            Some(format!("http://127.0.0.1:{port}")),
        )
        .unwrap();

        let response = http.request::<Value>("GET", "/api/auth/me", None).await;

        assert!(matches!(response, Ok(None)));
    }

    #[tokio::test]
    async fn test_bearer_header_attached() {
        let http = client("echo", Some("secret")).await;

        let response = http
            .request::<Value>("GET", "/api/auth/me", None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response["authorization"], "Bearer secret");
        assert_eq!(response["path"], "/echo/api/auth/me");
    }

    #[tokio::test]
    async fn test_forbidden_clears_token() {
        let http = client("forbidden", Some("stale")).await;

        let response = http.request::<Value>("GET", "/api/auth/me", None).await;

        assert!(matches!(response, Ok(None)));
        assert_eq!(http.storage().lock().await.token(), None);
    }

    #[tokio::test]
    async fn test_unauthorized_clears_token() {
        let http = client("unauthorized", Some("stale")).await;

        let response = http.request::<Value>("POST", "/api/lectures/update", None).await;

        assert!(matches!(response, Ok(None)));
        assert_eq!(http.storage().lock().await.token(), None);
    }

    #[tokio::test]
    async fn test_unauthorized_override_keeps_stored_token() {
        let base = test_server::spawn().await;

        let mut storage = Storage::in_memory();
        storage.set_token("stored").await.unwrap();
        storage
            .set(Scope::Session, TOKEN_KEY, "stale-override")
            .await
            .unwrap();

        let http = HttpClient::new(storage.shared(), Some(format!("{base}/unauthorized"))).unwrap();

        let response = http.request::<Value>("GET", "/api/auth/me", None).await;

        assert!(matches!(response, Ok(None)));

        let storage = http.storage().lock().await;
        assert_eq!(storage.get(Scope::Session, TOKEN_KEY), None);
        assert_eq!(storage.get(Scope::Local, TOKEN_KEY), Some("stored"));
    }

    #[tokio::test]
    async fn test_html_is_no_data() {
        let http = client("html", Some("valid")).await;

        let response = http.request::<Value>("GET", "/api/attendance/status", None).await;

        assert!(matches!(response, Ok(None)));
        // only authorization failures drop the token
        assert_eq!(http.storage().lock().await.token(), Some("valid"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_no_data() {
        let http = client("broken", Some("valid")).await;

        let response = http.request::<Value>("GET", "/api/attendance/logs", None).await;

        assert!(matches!(response, Ok(None)));
    }

    #[tokio::test]
    async fn test_transport_failure_is_error() {
        let port = portpicker::pick_unused_port().unwrap();
        let mut storage = Storage::in_memory();
        storage.set_token("valid").await.unwrap();

        let http =
            HttpClient::new(storage.shared(), Some(format!("http://127.0.0.1:{port}"))).unwrap();

        assert!(http.request::<Value>("GET", "/api/auth/me", None).await.is_err());
    }

    #[tokio::test]
    async fn test_json_payload_sent() {
        let http = client("echo", Some("valid")).await;

        let response = http
            .request::<Value>(
                "POST",
                "/api/attendance/auto_attend",
                Some(Payload::Json(json!({ "auth_code": "042" }))),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response["method"], "POST");
        assert_eq!(response["body"], r#"{"auth_code":"042"}"#);
    }

    #[tokio::test]
    async fn test_form_payload_sent() {
        let http = client("echo", Some("valid")).await;

        let response = http
            .request::<Value>(
                "POST",
                "/api/auth/update_profile",
                Some(Payload::Form(vec![
                    ("name".to_string(), "Kim".to_string()),
                    ("student_id".to_string(), "2024".to_string()),
                ])),
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response["body"], "name=Kim&student_id=2024");
    }

    #[tokio::test]
    async fn test_fetch_without_token_is_error() {
        let http = HttpClient::new(Storage::in_memory().shared(), None).unwrap();

        let response = http
            .fetch::<types::Empty>("GET", "/api/attendance/status", None)
            .await;

        assert!(response.is_err());
    }
}
