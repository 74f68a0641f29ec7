use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use hyper::header::{AUTHORIZATION, CONTENT_TYPE};
use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use serde_json::json;

/// Starts a local API stand-in and returns its base URL.
///
/// The first path segment picks the behavior, so a client built with
/// `{base}/forbidden` gets a 403 for every endpoint.
pub async fn spawn() -> String {
    spawn_recording().await.0
}

/// Paths requested so far, in order.
pub type Hits = Arc<Mutex<Vec<String>>>;

/// Like [`spawn`], also recording the path of every request.
pub async fn spawn_recording() -> (String, Hits) {
    let port = portpicker::pick_unused_port().expect("No free port");
    let hits = Hits::default();

    let recorder = hits.clone();
    let service = make_service_fn(move |_| {
        let hits = recorder.clone();

        async move {
            Ok::<_, Infallible>(service_fn(move |req| handler(req, hits.clone())))
        }
    });

    let server = Server::bind(&([127, 0, 0, 1], port).into()).serve(service);

    tokio::spawn(server);

    (format!("http://127.0.0.1:{port}"), hits)
}

async fn handler(req: Request<Body>, hits: Hits) -> Result<Response<Body>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    hits.lock().expect("Hits lock").push(path.clone());
    let authorization = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let body = hyper::body::to_bytes(req.into_body())
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).to_string())
        .unwrap_or_default();

    let (status, content_type, body) = match path.split('/').nth(1).unwrap_or_default() {
        "forbidden" => (403, "application/json", json!({ "detail": "Forbidden" }).to_string()),
        "unauthorized" => (401, "application/json", json!({ "detail": "Expired" }).to_string()),
        "html" => (200, "text/html; charset=utf-8", "<html></html>".to_string()),
        "broken" => (200, "application/json", "{\"status\": ".to_string()),

        "onboarding" => (
            200,
            "application/json",
            json!({
                "id": 7,
                "name": "Kim",
                "student_id": "",
                "student_password": "",
                "is_admin": true,
                "is_pro": false
            })
            .to_string(),
        ),

        "ready" => (
            200,
            "application/json",
            json!({
                "id": 7,
                "name": "Kim",
                "student_id": "202412345",
                "student_password": true,
                "profile_complete": true,
                "is_admin": false,
                "is_pro": true
            })
            .to_string(),
        ),

        // a ready student without entitlements, every other endpoint just succeeds
        "member" if path.ends_with("/api/auth/me") => (
            200,
            "application/json",
            json!({
                "id": 8,
                "name": "Lee",
                "student_id": "202454321",
                "student_password": true,
                "is_admin": false,
                "is_pro": false
            })
            .to_string(),
        ),

        "member" => (200, "application/json", json!({ "status": "success" }).to_string()),

        "login-ok" => (
            200,
            "application/json",
            json!({
                "status": "success",
                "message": "Firebase login succeeded",
                "user_id": 7,
                "token": "server-jwt",
                "profile_complete": false
            })
            .to_string(),
        ),

        "login-fail" => (
            200,
            "application/json",
            json!({ "status": "error", "message": "Invalid Firebase token" }).to_string(),
        ),

        "echo" => (
            200,
            "application/json",
            json!({
                "status": "success",
                "method": method,
                "path": path,
                "authorization": authorization,
                "body": body
            })
            .to_string(),
        ),

        _ => (404, "application/json", json!({ "detail": "Not Found" }).to_string()),
    };

    Ok(Response::builder()
        .status(status)
        .header(CONTENT_TYPE, content_type)
        .body(body.into())
        .expect("Valid response"))
}
