//! Conversion request and normalized result types.

use std::fmt;

use base64::Engine as _;
use serde::Serialize;

use crate::error::ClientError;

/// Voice identifiers the gateway supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Voice {
    #[default]
    Joanna,
    Matthew,
    Amy,
    Brian,
}

impl Voice {
    /// Wire identifier, exactly as the gateway expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Joanna => "Joanna",
            Self::Matthew => "Matthew",
            Self::Amy => "Amy",
            Self::Brian => "Brian",
        }
    }

    /// Display label for selection UIs.
    pub fn label(&self) -> &'static str {
        self.as_str()
    }

    /// The full voice catalog.
    pub fn all() -> &'static [Voice] {
        &[Self::Joanna, Self::Matthew, Self::Amy, Self::Brian]
    }

    /// Case-insensitive lookup of a wire identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "joanna" => Some(Self::Joanna),
            "matthew" => Some(Self::Matthew),
            "amy" => Some(Self::Amy),
            "brian" => Some(Self::Brian),
            _ => None,
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Body of a conversion request.
///
/// The caller is responsible for rejecting empty `text` beforehand; the
/// gateway answers an empty payload with an invalid-request error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionRequest {
    pub text: String,
    pub voice: Voice,
}

impl ConversionRequest {
    pub fn new(text: impl Into<String>, voice: Voice) -> Self {
        Self {
            text: text.into(),
            voice,
        }
    }
}

/// MIME type of inline audio payloads.
pub const AUDIO_MPEG: &str = "audio/mpeg";

/// Normalized conversion output: exactly one of a hosted audio URL or an
/// inline, already-decoded audio payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// A fetchable address for the generated audio. `filename` is carried
    /// when the gateway names the stored object.
    Url {
        audio_url: String,
        filename: Option<String>,
    },
    /// Audio delivered inline, base64-decoded before return.
    Inline { bytes: Vec<u8>, mime: &'static str },
}

impl ConversionResult {
    /// Short shape name for logs.
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Self::Url { .. } => "url",
            Self::Inline { .. } => "inline",
        }
    }

    /// Normalizes a gateway success reply.
    ///
    /// A reply matching neither shape is a protocol violation and surfaces
    /// as an error, never silently dropped.
    pub(crate) fn from_reply(reply: &serde_json::Value) -> Result<Self, ClientError> {
        if let Some(audio_url) = reply.get("audio_url").and_then(|v| v.as_str()) {
            let filename = reply
                .get("filename")
                .and_then(|v| v.as_str())
                .map(str::to_string);
            return Ok(Self::Url {
                audio_url: audio_url.to_string(),
                filename,
            });
        }

        if reply.get("isBase64Encoded").and_then(|v| v.as_bool()) == Some(true) {
            if let Some(encoded) = reply.get("body").and_then(|v| v.as_str()) {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(encoded)
                    .map_err(|_| {
                        ClientError::protocol_violation("Audio payload was not valid base64")
                    })?;
                return Ok(Self::Inline {
                    bytes,
                    mime: AUDIO_MPEG,
                });
            }
        }

        Err(ClientError::protocol_violation("Unexpected response format"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_voice_defaults_to_joanna() {
        assert_eq!(Voice::default(), Voice::Joanna);
    }

    #[test]
    fn test_voice_from_name_is_case_insensitive() {
        assert_eq!(Voice::from_name("matthew"), Some(Voice::Matthew));
        assert_eq!(Voice::from_name("AMY"), Some(Voice::Amy));
        assert_eq!(Voice::from_name("nobody"), None);
    }

    #[test]
    fn test_request_serializes_to_wire_shape() {
        let request = ConversionRequest::new("Hello world", Voice::Brian);
        let wire = serde_json::to_value(&request).unwrap();
        assert_eq!(wire, json!({"text": "Hello world", "voice": "Brian"}));
    }

    #[test]
    fn test_url_reply_normalizes_with_filename() {
        let reply = json!({"audio_url": "https://example/a.mp3", "filename": "a.mp3"});
        let result = ConversionResult::from_reply(&reply).unwrap();
        assert_eq!(
            result,
            ConversionResult::Url {
                audio_url: "https://example/a.mp3".to_string(),
                filename: Some("a.mp3".to_string()),
            }
        );
    }

    #[test]
    fn test_inline_reply_decodes_base64_body() {
        let reply = json!({"isBase64Encoded": true, "body": "QVVESU8="});
        let result = ConversionResult::from_reply(&reply).unwrap();
        assert_eq!(
            result,
            ConversionResult::Inline {
                bytes: b"AUDIO".to_vec(),
                mime: AUDIO_MPEG,
            }
        );
    }

    #[test]
    fn test_reply_with_neither_shape_is_protocol_violation() {
        let err = ConversionResult::from_reply(&json!({})).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ProtocolViolation);
        assert_eq!(err.message, "Unexpected response format");
    }

    #[test]
    fn test_undecodable_base64_is_protocol_violation() {
        let reply = json!({"isBase64Encoded": true, "body": "not@base64!"});
        let err = ConversionResult::from_reply(&reply).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ProtocolViolation);
    }

    #[test]
    fn test_base64_flag_without_body_is_protocol_violation() {
        let reply = json!({"isBase64Encoded": true});
        let err = ConversionResult::from_reply(&reply).unwrap_err();
        assert_eq!(err.kind, ErrorKind::ProtocolViolation);
    }
}
