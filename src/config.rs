//! Immutable client configuration.

use std::env;
use std::time::Duration;

/// Transport configuration shared by the primary and fallback paths.
///
/// Captured once at client construction and never mutated afterwards; every
/// `convert` call reads the same values.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base address of the conversion gateway.
    pub base_url: String,
    /// Total timeout for the primary transport. The fallback transport
    /// carries no client-level timeout and relies on the network stack's
    /// defaults; that asymmetry is deliberate.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Minimal production-friendly defaults (env-overridable): 30 second
    /// primary timeout, `TTS_HTTP_TIMEOUT_SECS` to override.
    pub fn new(base_url: impl Into<String>) -> Self {
        let timeout_secs = env::var("TTS_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(30);

        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Full URL of the conversion endpoint.
    pub fn convert_url(&self) -> String {
        format!("{}/convert", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_url_joins_without_double_slash() {
        let config = ClientConfig::new("https://api.example.com/prod/");
        assert_eq!(config.convert_url(), "https://api.example.com/prod/convert");
    }

    #[test]
    fn test_default_timeout_is_thirty_seconds() {
        let config = ClientConfig::new("https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
