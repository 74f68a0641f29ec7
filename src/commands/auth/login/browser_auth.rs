use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use hyper::{Body, Request, Response};
use reqwest::Url;
use tokio::sync::mpsc::Sender;

use crate::config::WEB_AUTH_URL;
use crate::utils::browser::listen_for_callback;
use crate::utils::urlify;

pub async fn browser_login() -> Result<String> {
    let port = portpicker::pick_unused_port().context("No free port for the login callback")?;

    let auth_url = auth_url(port)?;

    // launch a web server to handle the auth request
    if webbrowser::open(&auth_url).is_ok() {
        log::info!("Opening browser to: {}", urlify(&auth_url));

        listen_for_callback(port, 2, request_handler).await
    } else {
        log::info!("Could not open a web browser.");
        log::info!("Sign in at {} and paste the ID token below.", urlify(WEB_AUTH_URL));

        // fallback to simple input
        dialoguer::Password::new()
            .with_prompt("ID token")
            .interact()
            .context("Failed to read the ID token")
    }
}

fn auth_url(port: u16) -> Result<String> {
    let callback_url = format!("http://localhost:{port}/");

    Ok(Url::parse_with_params(WEB_AUTH_URL, [("callback", callback_url)])
        .context("Invalid web auth URL")?
        .to_string())
}

/// The `id_token` query parameter of a callback request, percent-decoded.
fn id_token(req: &Request<Body>) -> Option<String> {
    let url = Url::parse(&format!("http://localhost{}", req.uri())).ok()?;

    url.query_pairs()
        .find(|(key, _)| key == "id_token")
        .map(|(_, value)| value.into_owned())
}

fn request_handler(
    req: Request<Body>,
    sender: Sender<String>,
) -> Pin<Box<dyn Future<Output = Result<Response<Body>, Infallible>> + Send>> {
    Box::pin(async move {
        // only send if it's an actual token
        if let Some(id_token) = id_token(&req).filter(|token| !token.is_empty()) {
            sender.send(id_token).await.ok();

            return Ok(Response::new(
                "You are signed in, you can close this tab.".into(),
            ));
        }

        Ok(Response::builder()
            .status(400)
            .body("No ID token received".into())
            .unwrap_or_default())
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_callback_extracts_id_token() {
        let port = portpicker::pick_unused_port().unwrap();
        let listener = tokio::spawn(listen_for_callback(port, 1, request_handler));

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let rejected = reqwest::get(format!("http://127.0.0.1:{port}/?state=1"))
            .await
            .unwrap();
        assert_eq!(rejected.status(), 400);

        reqwest::get(format!("http://127.0.0.1:{port}/?state=1&id_token=abc.def"))
            .await
            .ok();

        assert_eq!(listener.await.unwrap().unwrap(), "abc.def");
    }

    #[test]
    fn test_auth_url_encodes_callback() {
        let url = Url::parse(&auth_url(4321).unwrap()).unwrap();

        assert!(url.as_str().contains("callback=http%3A%2F%2Flocalhost%3A4321%2F"));
        assert_eq!(
            url.query_pairs().find(|(key, _)| key == "callback").unwrap().1,
            "http://localhost:4321/"
        );
    }

    #[test]
    fn test_id_token_is_decoded() {
        let req = Request::get("/?id_token=a%2Bb%3D%3D&state=1")
            .body(Body::empty())
            .unwrap();

        assert_eq!(id_token(&req).as_deref(), Some("a+b=="));

        let req = Request::get("/?state=1").body(Body::empty()).unwrap();
        assert_eq!(id_token(&req), None);
    }
}
