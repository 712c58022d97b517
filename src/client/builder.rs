//! Builder for creating clients with custom configuration.

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::core::ConversionClient;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{FallbackTransport, HttpTransport, Transport};
use crate::Result;

/// Builder for [`ConversionClient`].
///
/// Keep this surface small and predictable: a base address, an optional
/// timeout override, and transport injection points for tests.
pub struct ConversionClientBuilder {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    primary: Option<Arc<dyn Transport>>,
    fallback: Option<Arc<dyn Transport>>,
}

impl ConversionClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout_secs: None,
            primary: None,
            fallback: None,
        }
    }

    /// Base address of the conversion gateway.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the primary transport timeout. Defaults to 30 seconds,
    /// env-overridable via `TTS_HTTP_TIMEOUT_SECS`.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs.max(1));
        self
    }

    /// Inject the primary transport (primarily for testing with mocks).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.primary = Some(transport);
        self
    }

    /// Inject the fallback transport (primarily for testing with mocks).
    pub fn fallback_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.fallback = Some(transport);
        self
    }

    /// Builds the client. Construction failures (missing or invalid base
    /// address, HTTP client build errors) surface as `ClientConfigError`.
    pub fn build(self) -> Result<ConversionClient> {
        let Self {
            base_url,
            timeout_secs,
            primary,
            fallback,
        } = self;

        let (primary, fallback) = match (primary, fallback) {
            (Some(primary), Some(fallback)) => (primary, fallback),
            (primary, fallback) => {
                let base_url = base_url.ok_or_else(|| {
                    ClientError::configuration("Base address must be specified")
                })?;
                Url::parse(&base_url).map_err(|_| {
                    ClientError::configuration("Base address is not a valid URL")
                })?;

                let mut config = ClientConfig::new(base_url);
                if let Some(secs) = timeout_secs {
                    config.timeout = Duration::from_secs(secs);
                }

                let primary: Arc<dyn Transport> = match primary {
                    Some(transport) => transport,
                    None => Arc::new(HttpTransport::new(&config)?),
                };
                let fallback: Arc<dyn Transport> = match fallback {
                    Some(transport) => transport,
                    None => Arc::new(FallbackTransport::new(&config)?),
                };
                (primary, fallback)
            }
        };

        Ok(ConversionClient { primary, fallback })
    }
}

impl Default for ConversionClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
