//! Transport seam between the conversion client and the network.
//!
//! Both invocation paths implement [`Transport`], so tests can substitute
//! deterministic mocks for either one. A transport yields the gateway's JSON
//! reply or a [`TransportFailure`] describing what went wrong as plain data;
//! the retry decision downstream is a pure decision over that data, never
//! control flow via exception interception.

mod fallback;
mod http;

pub use fallback::FallbackTransport;
pub use http::HttpTransport;

use async_trait::async_trait;

use crate::types::ConversionRequest;

/// HTTP method of an outbound call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireMethod {
    /// Conversion call.
    Post,
    /// Connectivity probe.
    Options,
}

/// A single outbound call to the conversion endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
    pub method: WireMethod,
    pub body: Option<ConversionRequest>,
}

impl WireRequest {
    pub fn convert(body: ConversionRequest) -> Self {
        Self {
            method: WireMethod::Post,
            body: Some(body),
        }
    }

    pub fn probe() -> Self {
        Self {
            method: WireMethod::Options,
            body: None,
        }
    }
}

/// Transport-level failure, as data.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransportFailure {
    /// The timeout elapsed before a response arrived.
    #[error("request timed out")]
    Timeout,

    /// The gateway answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16, body: String },

    /// The request was sent but no response was received.
    #[error("network failure: {0}")]
    Network(String),

    /// The request was never sent.
    #[error("request construction failed: {0}")]
    Build(String),

    /// A success reply whose body was not parseable JSON.
    #[error("undecodable response body: {0}")]
    Decode(String),
}

impl TransportFailure {
    /// HTTP status, when the gateway answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Single-method seam: issue one request, get the JSON reply or a failure.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &WireRequest)
        -> Result<serde_json::Value, TransportFailure>;
}
