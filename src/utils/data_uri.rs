//! Encoding and parsing of `data:<mimetype>;base64,<payload>` URIs.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::image::ImageUpload;

/// A self-describing inline encoding of binary content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    /// Encodes an uploaded file as a data URI.
    pub fn encode(upload: &ImageUpload) -> Self {
        Self(format!(
            "data:{};base64,{}",
            upload.content_type,
            BASE64.encode(&upload.bytes)
        ))
    }

    /// Wraps an already-encoded data URI string without checking it.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Splits the URI into its MIME type and decoded payload.
    pub fn parse(&self) -> Result<(String, Vec<u8>)> {
        let rest = self
            .0
            .strip_prefix("data:")
            .ok_or_else(|| Error::DataUri("missing data: scheme".to_string()))?;

        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| Error::DataUri("missing base64 marker".to_string()))?;

        if mime.is_empty() {
            return Err(Error::DataUri("missing MIME type".to_string()));
        }

        let bytes = BASE64
            .decode(payload)
            .map_err(|e| Error::DataUri(format!("invalid base64 payload: {}", e)))?;

        Ok((mime.to_string(), bytes))
    }
}

impl std::fmt::Display for DataUri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
