//! Conversion control flow: primary attempt, classification, one-shot
//! fallback.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::classify::classify;
use crate::error::ClientError;
use crate::transport::{Transport, WireRequest};
use crate::types::{ConversionRequest, ConversionResult, Voice};
use crate::Result;

/// Client for the hosted text-to-speech conversion gateway.
///
/// Stateless across calls: each `convert` invocation is independent, and the
/// shared transport configuration is immutable after construction, so
/// unrelated calls may run concurrently with no coordination.
pub struct ConversionClient {
    pub(crate) primary: Arc<dyn Transport>,
    pub(crate) fallback: Arc<dyn Transport>,
}

impl std::fmt::Debug for ConversionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversionClient").finish_non_exhaustive()
    }
}

impl ConversionClient {
    pub fn builder() -> super::builder::ConversionClientBuilder {
        super::builder::ConversionClientBuilder::new()
    }

    /// Converts `text` to audio with the given voice.
    ///
    /// The caller is responsible for rejecting empty text beforehand. On a
    /// qualifying transport-origin failure (access denied or network error)
    /// the request is retried exactly once through the fallback transport;
    /// every other failure class propagates immediately.
    pub async fn convert(&self, text: &str, voice: Voice) -> Result<ConversionResult> {
        let request = WireRequest::convert(ConversionRequest::new(text, voice));
        let start = Instant::now();
        debug!(
            voice = voice.as_str(),
            text_preview = preview(text).as_str(),
            "sending conversion request"
        );

        let failure = match self.primary.send(&request).await {
            Ok(reply) => {
                let result = ConversionResult::from_reply(&reply)?;
                debug!(
                    shape = result.shape(),
                    duration_ms = start.elapsed().as_millis(),
                    "conversion succeeded"
                );
                return Ok(result);
            }
            Err(failure) => failure,
        };

        let error = classify(&failure);
        info!(
            http_status = failure.status(),
            error_kind = error.kind.name(),
            retry_via_fallback = error.retryable,
            duration_ms = start.elapsed().as_millis(),
            "primary conversion request failed"
        );
        if !error.retryable {
            return Err(error);
        }

        // Single best-effort escape hatch, never looped. Once the fallback
        // attempt has been made its outcome is final regardless of kind.
        match self.fallback.send(&request).await {
            Ok(reply) => {
                let result = ConversionResult::from_reply(&reply)?;
                debug!(
                    shape = result.shape(),
                    duration_ms = start.elapsed().as_millis(),
                    "fallback conversion succeeded"
                );
                Ok(result)
            }
            Err(failure) => {
                let inner = classify(&failure);
                info!(
                    http_status = failure.status(),
                    error_kind = inner.kind.name(),
                    duration_ms = start.elapsed().as_millis(),
                    "fallback conversion request failed"
                );
                Err(ClientError::fallback_failed(inner))
            }
        }
    }

    /// Converts `text` with the gateway's default voice (`Joanna`).
    pub async fn convert_with_default_voice(&self, text: &str) -> Result<ConversionResult> {
        self.convert(text, Voice::default()).await
    }

    /// Probes the conversion endpoint with an `OPTIONS` request through the
    /// primary transport. Diagnostic only; never affects `convert` behavior.
    pub async fn check_connectivity(&self) -> bool {
        match self.primary.send(&WireRequest::probe()).await {
            Ok(_) => {
                debug!("connectivity probe succeeded");
                true
            }
            Err(failure) => {
                debug!(failure = %failure, "connectivity probe failed");
                false
            }
        }
    }
}

fn preview(text: &str) -> String {
    let mut p: String = text.chars().take(50).collect();
    if p.len() < text.len() {
        p.push_str("...");
    }
    p
}
