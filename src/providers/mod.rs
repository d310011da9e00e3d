//! Image classification providers.
//!
//! The moderation service talks to a provider through the
//! [`ImageClassifier`] trait; [`openai::OpenAiVisionProvider`] implements
//! it against any OpenAI-compatible chat-completions endpoint.

pub mod openai;

pub use openai::OpenAiVisionProvider;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::image::ImageCheckResult;
use crate::utils::data_uri::DataUri;

/// Classifies an image for work appropriateness.
///
/// The external model is the sole source of truth for the verdict; there
/// is no local rule-based fallback.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(&self, image: &DataUri) -> Result<ImageCheckResult>;
}
