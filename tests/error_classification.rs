//! Tests for the error taxonomy's fallback-eligibility metadata.

use tts_gateway_client::{ClientError, ErrorKind};

#[test]
fn test_retryable_error_kinds() {
    // Only the two signatures consistent with a transport-level block.
    let retryable_kinds = vec![ErrorKind::AccessDenied, ErrorKind::NetworkError];

    for kind in retryable_kinds {
        assert!(
            kind.retryable_via_fallback(),
            "Error kind '{}' should be retryable via fallback",
            kind
        );
    }
}

#[test]
fn test_non_retryable_error_kinds() {
    let non_retryable_kinds = vec![
        ErrorKind::Timeout,
        ErrorKind::InvalidRequest,
        ErrorKind::EndpointNotFound,
        ErrorKind::ServerError,
        ErrorKind::ClientConfigError,
        ErrorKind::ProtocolViolation,
        ErrorKind::FallbackFailed,
    ];

    for kind in non_retryable_kinds {
        assert!(
            !kind.retryable_via_fallback(),
            "Error kind '{}' should NOT be retryable via fallback",
            kind
        );
    }
}

#[test]
fn test_error_kind_stable_names() {
    assert_eq!(ErrorKind::Timeout.name(), "timeout");
    assert_eq!(ErrorKind::InvalidRequest.name(), "invalid_request");
    assert_eq!(ErrorKind::AccessDenied.name(), "access_denied");
    assert_eq!(ErrorKind::EndpointNotFound.name(), "endpoint_not_found");
    assert_eq!(ErrorKind::ServerError.name(), "server_error");
    assert_eq!(ErrorKind::NetworkError.name(), "network_error");
    assert_eq!(ErrorKind::ClientConfigError.name(), "client_config_error");
    assert_eq!(ErrorKind::ProtocolViolation.name(), "protocol_violation");
    assert_eq!(ErrorKind::FallbackFailed.name(), "fallback_failed");
}

#[test]
fn test_display_is_message_verbatim() {
    let err = ClientError::new(ErrorKind::ServerError, "Server error (502): upstream gone");
    assert_eq!(err.to_string(), "Server error (502): upstream gone");
}

#[test]
fn test_new_derives_retryable_from_kind() {
    assert!(ClientError::new(ErrorKind::AccessDenied, "blocked").retryable);
    assert!(!ClientError::new(ErrorKind::ServerError, "boom").retryable);
}
