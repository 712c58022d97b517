//! Primary transport: a configured reqwest client with a bounded timeout.

use std::time::Duration;

use async_trait::async_trait;
use uuid::Uuid;

use super::{Transport, TransportFailure, WireMethod, WireRequest};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// The main configured HTTP client used for the first conversion attempt.
///
/// One `reqwest::Client` is built at construction and reused across calls:
/// JSON content negotiation, the configured total timeout, and conservative
/// pool keepalive defaults.
pub struct HttpTransport {
    client: reqwest::Client,
    convert_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .pool_idle_timeout(Some(Duration::from_secs(90)))
            .build()
            .map_err(|e| {
                ClientError::configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            convert_url: config.convert_url(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(
        &self,
        request: &WireRequest,
    ) -> Result<serde_json::Value, TransportFailure> {
        let mut req = match request.method {
            WireMethod::Post => self.client.post(&self.convert_url),
            WireMethod::Options => self
                .client
                .request(reqwest::Method::OPTIONS, &self.convert_url),
        };

        // Correlation id for log linkage. The gateway may ignore it.
        req = req.header("x-tts-request-id", Uuid::new_v4().to_string());
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(failure_from_send_error)?;
        reply_from_response(resp).await
    }
}

/// Maps a reqwest error onto the failure taxonomy: elapsed timeout, a
/// request that was never sent, or a send that got no response.
pub(crate) fn failure_from_send_error(err: reqwest::Error) -> TransportFailure {
    if err.is_timeout() {
        TransportFailure::Timeout
    } else if err.is_builder() {
        TransportFailure::Build(err.to_string())
    } else {
        TransportFailure::Network(err.to_string())
    }
}

/// Reads a response into the gateway's JSON reply or a failure.
///
/// Probe replies and 204-style bodies are empty; they come back as `Null`
/// rather than a decode failure.
pub(crate) async fn reply_from_response(
    resp: reqwest::Response,
) -> Result<serde_json::Value, TransportFailure> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(TransportFailure::Status {
            status: status.as_u16(),
            body,
        });
    }

    let text = resp.text().await.map_err(failure_from_send_error)?;
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| TransportFailure::Decode(e.to_string()))
}
