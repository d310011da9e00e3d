use serde::{Deserialize, Serialize};

/// Maximum accepted profile picture size in bytes (2 MiB).
pub const MAX_PICTURE_BYTES: usize = 2 * 1024 * 1024;

/// MIME types accepted for profile pictures.
pub const ALLOWED_PICTURE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];

/// A file chosen by the user, before any encoding or remote check.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Verdict returned by the image moderation check.
///
/// Matches the external contract: `isWorkAppropriate` plus an optional
/// `reason`, typically present when the image was rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageCheckResult {
    pub is_work_appropriate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ImageCheckResult {
    pub fn appropriate() -> Self {
        Self {
            is_work_appropriate: true,
            reason: None,
        }
    }

    pub fn inappropriate(reason: impl Into<String>) -> Self {
        Self {
            is_work_appropriate: false,
            reason: Some(reason.into()),
        }
    }
}
