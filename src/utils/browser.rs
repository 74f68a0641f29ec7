use std::future::Future;
use std::{convert::Infallible, pin::Pin};

use anyhow::{bail, Result};
use hyper::{
    service::{make_service_fn, service_fn},
    Body, Request, Response, Server,
};
use tokio::sync::mpsc::{channel, Sender};

pub type RequestHandler =
    fn(
        Request<Body>,
        Sender<String>,
    ) -> Pin<Box<dyn Future<Output = Result<Response<Body>, Infallible>> + Send>>;

/// Serves `request_handler` on localhost until it sends a value or the timeout hits.
pub async fn listen_for_callback(
    port: u16,
    timeout_min: u16,
    request_handler: RequestHandler,
) -> Result<String> {
    let (sender, mut receiver) = channel::<String>(1);

    let service = make_service_fn(move |_| {
        let sender = sender.clone();

        async move {
            Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                request_handler(req, sender.clone())
            }))
        }
    });

    let address = ([127, 0, 0, 1], port).into();

    let server = Server::try_bind(&address)?.serve(service);

    let runtime = tokio::spawn(async move {
        if let Err(error) = server.await {
            log::error!("Server error: {error}");
        }
    });

    let timeout = tokio::time::Duration::from_secs(u64::from(timeout_min) * 60);
    let response = tokio::time::timeout(timeout, receiver.recv()).await;

    runtime.abort();

    match response {
        Ok(Some(value)) => Ok(value),
        Ok(None) => bail!("Callback server stopped unexpectedly"),
        Err(_) => bail!("Timed out after {timeout_min} minutes"),
    }
}
