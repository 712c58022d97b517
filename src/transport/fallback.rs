//! Fallback transport: an alternate invocation path used once, only for
//! transport-origin failures.

use async_trait::async_trait;

use super::http::{failure_from_send_error, reply_from_response};
use super::{Transport, TransportFailure, WireMethod, WireRequest};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// One-shot escape hatch for deployments where the primary path's preflight
/// or connection-reuse behavior is blocked by network policy.
///
/// Differences from [`HttpTransport`](super::HttpTransport): no pooled
/// connections (every attempt negotiates a fresh one), an explicit `Accept`
/// header, no cookies or stored credentials attached, and no client-level
/// timeout. The missing timeout preserves the primary/fallback asymmetry of
/// the original deployment; the network stack's defaults still bound the
/// attempt.
pub struct FallbackTransport {
    client: reqwest::Client,
    convert_url: String,
}

impl FallbackTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| {
                ClientError::configuration(format!(
                    "Failed to create fallback HTTP client: {}",
                    e
                ))
            })?;

        Ok(Self {
            client,
            convert_url: config.convert_url(),
        })
    }
}

#[async_trait]
impl Transport for FallbackTransport {
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

        req = req.header("accept", "application/json");
        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let resp = req.send().await.map_err(failure_from_send_error)?;
        reply_from_response(resp).await
    }
}
