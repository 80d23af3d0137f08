//! Executes a [`Request`] over HTTPS and decodes the JSON response.

use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH};
use reqwest::Body;
use serde_json::Value;
use tokio_util::codec::{BytesCodec, FramedRead};
use url::Url;

use crate::request::{Request, UploadFile};
use crate::Error;

/// Raw outcome of one HTTP exchange.
#[derive(Clone, Debug)]
pub struct TransportResponse {
    pub status: u16,
    /// Decoded JSON body, or `Value::Null` when the body is not valid JSON.
    pub body: Value,
}

/// Sends requests, one connection per call.
///
/// Each call builds a fresh `reqwest::Client` with rustls and its bundled
/// trust anchors. There is no timeout and no retry: the request is attempted
/// once and the caller waits until it completes.
#[derive(Clone, Copy, Debug, Default)]
pub struct Transport;

impl Transport {
    pub fn new() -> Self {
        Self
    }

    /// Sends `request` and decodes whatever comes back.
    ///
    /// The status code is reported but never interpreted: error envelopes from
    /// the API are returned the same way as successful bodies.
    pub async fn send(&self, request: &Request) -> Result<TransportResponse, Error> {
        let url = Url::parse(request.url()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(request.url().to_string())
        })?;
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;

        let mut builder = client.request(request.method().into(), url);
        if let Some(token) = request.access_token() {
            builder = builder.header(AUTHORIZATION, format!("Bearer {}", token));
        }
        // Appended alongside the bearer header, never replacing it.
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }
        if let Some(file) = request.file() {
            let (body, size) = open_upload(file).await?;
            if request.header(CONTENT_LENGTH.as_str()).is_none() {
                builder = builder.header(CONTENT_LENGTH, size.to_string());
            }
            builder = builder.body(body);
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        // The upload stream, and with it the file handle, is dropped when
        // `send` returns on both the success and the error path.
        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status().as_u16();
        let bytes = resp.bytes().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        let body = match serde_json::from_slice::<Value>(&bytes) {
            Ok(body) => body,
            Err(e) => {
                let snippet = truncate_body(&String::from_utf8_lossy(&bytes));
                tracing::warn!("Failed to decode response: {} | status: {} | body: {}", e, status, snippet);
                Value::Null
            }
        };
        tracing::debug!(status, "received response");

        Ok(TransportResponse { status, body })
    }
}

async fn open_upload(file: &UploadFile) -> Result<(Body, u64), Error> {
    let to_error = |source: std::io::Error| Error::UploadFile {
        path: file.path.clone(),
        source,
    };
    let handle = tokio::fs::File::open(&file.path).await.map_err(to_error)?;
    let size = handle.metadata().await.map_err(to_error)?.len();
    let stream = FramedRead::new(handle, BytesCodec::new());
    Ok((Body::wrap_stream(stream), size))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.chars().count() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", body.chars().take(MAX).collect::<String>())
    }
}
