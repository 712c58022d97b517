//! Failure classification: raw transport failures to stable client errors.

use crate::error::{ClientError, ErrorKind};
use crate::transport::TransportFailure;

/// Classifies a transport failure into a [`ClientError`].
///
/// First match wins. Only `AccessDenied` and `NetworkError` come out
/// retryable; everything else is an application-level rejection that would
/// fail identically on the alternate path.
pub(crate) fn classify(failure: &TransportFailure) -> ClientError {
    match failure {
        TransportFailure::Timeout => {
            ClientError::new(ErrorKind::Timeout, "Request timeout - please try again")
        }
        TransportFailure::Status { status, body } => classify_status(*status, body),
        TransportFailure::Network(_) => ClientError::new(
            ErrorKind::NetworkError,
            "Network error - please check your connection",
        ),
        TransportFailure::Build(_) => ClientError::new(
            ErrorKind::ClientConfigError,
            "Request could not be constructed",
        ),
        TransportFailure::Decode(_) => {
            ClientError::new(ErrorKind::ProtocolViolation, "Unexpected response format")
        }
    }
}

fn classify_status(status: u16, body: &str) -> ClientError {
    match status {
        400 => ClientError::new(
            ErrorKind::InvalidRequest,
            error_from_body(body).unwrap_or_else(|| "Invalid request".to_string()),
        ),
        403 => ClientError::new(
            ErrorKind::AccessDenied,
            "Access denied - cross-origin issue suspected",
        ),
        404 => ClientError::new(ErrorKind::EndpointNotFound, "API endpoint not found"),
        500 => ClientError::new(
            ErrorKind::ServerError,
            error_from_body(body).unwrap_or_else(|| "Server error".to_string()),
        ),
        other => ClientError::new(
            ErrorKind::ServerError,
            format!(
                "Server error ({}): {}",
                other,
                error_from_body(body).unwrap_or_else(|| "Unknown error".to_string())
            ),
        ),
    }
}

/// Pulls the gateway's `{"error": ...}` message out of an error body.
fn error_from_body(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    json.get("error")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
