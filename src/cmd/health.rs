//! `spacelink health` — check a running instance.
//!
//! Sends a `GET /ping` request to the specified URL and reports
//! whether the instance answered with the expected pong payload.

use http_body_util::BodyExt;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::cli::HealthArgs;
use crate::error::SpacelinkError;
use crate::health::PingResponse;

pub async fn execute(args: HealthArgs) -> Result<(), SpacelinkError> {
    let url = format!("{}/ping", args.url.trim_end_matches('/'));
    let uri: hyper::Uri =
        url.parse()
            .map_err(|e: hyper::http::uri::InvalidUri| SpacelinkError::UriParse {
                source: Box::new(e),
            })?;

    let connector = hyper_util::client::legacy::connect::HttpConnector::new();
    let client = Client::builder(TokioExecutor::new()).build(connector);

    let req = hyper::Request::builder()
        .uri(uri)
        .body(http_body_util::Full::new(bytes::Bytes::new()))
        .map_err(|e| SpacelinkError::HttpRequest {
            source: Box::new(e),
        })?;

    let response = tokio::time::timeout(std::time::Duration::from_secs(10), client.request(req))
        .await
        .map_err(|_| SpacelinkError::HttpRequest {
            source: "ping check timed out after 10s".into(),
        })?
        .map_err(|e| SpacelinkError::HttpRequest {
            source: Box::new(e),
        })?;

    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .map_err(|e| SpacelinkError::HttpRequest {
            source: Box::new(e),
        })?
        .to_bytes();

    if !status.is_success() {
        return Err(SpacelinkError::PingFailed(status));
    }

    if args.json {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    }

    let body_str = String::from_utf8_lossy(&body);
    match serde_json::from_str::<PingResponse>(&body_str) {
        Ok(ping) => {
            println!("\u{2713} spacelink is up ({})", args.url);
            println!("  response: {}", ping.message);
        }
        Err(e) => {
            eprintln!("Failed to parse ping response: {e}");
            println!("{body_str}");
        }
    }

    Ok(())
}
