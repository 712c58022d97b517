//! # tts-gateway-client
//!
//! Resilient client for a hosted text-to-speech conversion gateway.
//!
//! ## Overview
//!
//! The gateway accepts `POST /convert` with `{"text", "voice"}` and answers
//! with either a hosted audio URL or an inline base64 audio payload. This
//! crate issues that request, tolerates transport-level failures by retrying
//! exactly once through an alternate network path, normalizes both success
//! shapes into a single [`ConversionResult`], and classifies failures into a
//! stable [`ErrorKind`] taxonomy with caller-displayable messages.
//!
//! ## Key Behaviors
//!
//! - **Primary transport**: configured HTTP client with a fixed base
//!   address, JSON content negotiation, and a bounded 30 second timeout.
//! - **Fallback transport**: alternate invocation path used only for the two
//!   failure signatures consistent with a transport-level block (access
//!   denied, network error); bounded to exactly one attempt, never looped.
//! - **Normalization**: `{"audio_url": ...}` and
//!   `{"isBase64Encoded": true, "body": ...}` both become a playable
//!   [`ConversionResult`]; anything else is a protocol violation.
//! - **Stateless**: no state survives a call; identical calls against a
//!   deterministic gateway produce identical outcomes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tts_gateway_client::{ConversionClient, ConversionResult, Voice};
//!
//! #[tokio::main]
//! async fn main() -> tts_gateway_client::Result<()> {
//!     let client = ConversionClient::builder()
//!         .base_url("https://api.example.com/prod")
//!         .build()?;
//!
//!     match client.convert("Hello world", Voice::Joanna).await? {
//!         ConversionResult::Url { audio_url, .. } => {
//!             println!("audio at {}", audio_url)
//!         }
//!         ConversionResult::Inline { bytes, mime } => {
//!             println!("{} inline bytes of {}", bytes.len(), mime)
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Conversion client, builder, and failure classification |
//! | [`transport`] | Transport seam with primary and fallback HTTP paths |
//! | [`types`] | Request, voice, and normalized result types |
//! | [`config`] | Immutable transport configuration |
//! | [`error`] | Error taxonomy |

pub mod client;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ConversionClient, ConversionClientBuilder};
pub use config::ClientConfig;
pub use error::{ClientError, ErrorKind};
pub use types::{ConversionRequest, ConversionResult, Voice, AUDIO_MPEG};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ClientError>;
