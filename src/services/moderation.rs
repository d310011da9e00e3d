//! Image moderation service.
//!
//! Wraps an [`ImageClassifier`] with the guarantees the form controller
//! relies on: empty input short-circuits without a remote call, and any
//! provider failure is converted into a well-formed rejection. The caller
//! never sees an error. Each image is classified at most once; nothing is
//! retried or cached.

use std::sync::Arc;

use crate::models::image::ImageCheckResult;
use crate::providers::ImageClassifier;
use crate::utils::data_uri::DataUri;

/// Reason reported when no image data was supplied.
pub const NO_IMAGE_REASON: &str = "No image data provided.";

/// Reason reported when the classification call fails.
pub const CLASSIFICATION_FAILED_REASON: &str = "An error occurred while analyzing the image.";

#[derive(Clone)]
pub struct ModerationService {
    classifier: Arc<dyn ImageClassifier>,
}

impl ModerationService {
    pub fn new(classifier: Arc<dyn ImageClassifier>) -> Self {
        Self { classifier }
    }

    /// Checks whether the image behind `data_uri` is work-appropriate.
    ///
    /// Infallible outward: provider errors are logged and mapped to a
    /// generic inappropriate verdict.
    pub async fn check_image(&self, data_uri: &DataUri) -> ImageCheckResult {
        if data_uri.is_empty() {
            return ImageCheckResult::inappropriate(NO_IMAGE_REASON);
        }

        match self.classifier.classify(data_uri).await {
            Ok(result) => result,
            Err(error) => {
                tracing::error!(%error, "Error checking image");
                ImageCheckResult::inappropriate(CLASSIFICATION_FAILED_REASON)
            }
        }
    }
}
