//! Error taxonomy for the conversion client.
//!
//! Every failure surfaced to a caller is a [`ClientError`]: a stable
//! [`ErrorKind`], a human-readable message suitable for direct display, and
//! the fallback-eligibility flag the retry decision is made over. Messages
//! never carry raw transport internals; HTTP status codes are included where
//! they help diagnosis.

use std::fmt;

/// Stable failure categories for conversion calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The primary transport's timeout elapsed before a response arrived.
    Timeout,
    /// HTTP 400: the gateway rejected the request payload.
    InvalidRequest,
    /// HTTP 403: cross-origin or gateway policy rejection suspected.
    AccessDenied,
    /// HTTP 404: no conversion endpoint at the configured base address.
    EndpointNotFound,
    /// HTTP 500 or any other unexpected status.
    ServerError,
    /// The request was sent but no response was received.
    NetworkError,
    /// The request could not be constructed or the client is misconfigured.
    ClientConfigError,
    /// The gateway replied with a body matching neither success shape.
    ProtocolViolation,
    /// The one-shot fallback attempt itself failed. Terminal.
    FallbackFailed,
}

impl ErrorKind {
    /// Returns the stable snake_case name (e.g. `"access_denied"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::InvalidRequest => "invalid_request",
            Self::AccessDenied => "access_denied",
            Self::EndpointNotFound => "endpoint_not_found",
            Self::ServerError => "server_error",
            Self::NetworkError => "network_error",
            Self::ClientConfigError => "client_config_error",
            Self::ProtocolViolation => "protocol_violation",
            Self::FallbackFailed => "fallback_failed",
        }
    }

    /// Returns whether this kind is eligible for the one-shot fallback
    /// retry.
    ///
    /// Only `AccessDenied` and `NetworkError` qualify: the two signatures
    /// consistent with a transport-level block rather than an
    /// application-level rejection.
    #[inline]
    pub fn retryable_via_fallback(&self) -> bool {
        matches!(self, Self::AccessDenied | Self::NetworkError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classified, caller-displayable conversion failure.
///
/// Constructed at the point a failure is detected and immediately
/// propagated; never cached, and never retried internally beyond the one
/// fallback attempt. `Display` yields `message` verbatim.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    pub kind: ErrorKind,
    pub message: String,
    pub retryable: bool,
}

impl ClientError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            retryable: kind.retryable_via_fallback(),
        }
    }

    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ClientConfigError, message)
    }

    pub(crate) fn protocol_violation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ProtocolViolation, message)
    }

    /// Wraps the classified failure of the fallback attempt.
    pub(crate) fn fallback_failed(inner: ClientError) -> Self {
        Self::new(
            ErrorKind::FallbackFailed,
            format!("Fallback request failed: {}", inner.message),
        )
    }
}
