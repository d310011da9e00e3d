//! OpenAI-compatible vision provider for image moderation.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ModerationConfig;
use crate::error::{Error, Result};
use crate::models::image::ImageCheckResult;
use crate::providers::ImageClassifier;
use crate::utils::data_uri::DataUri;

/// Instruction given to the model for every classification request.
const MODERATION_PROMPT: &str = "You determine whether an image is work-appropriate. \
\"Work-appropriate\" means the image is suitable for display in a professional \
environment and does not contain nudity, violence, or other offensive content. \
Analyze the attached image and respond with a JSON object of the form \
{\"isWorkAppropriate\": boolean, \"reason\": string}. If the image is not \
work-appropriate, explain why in \"reason\"; otherwise omit it.";

/// Chat-completions response shape, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Vision classifier backed by an OpenAI-compatible endpoint.
pub struct OpenAiVisionProvider {
    client: reqwest::Client,
    config: ModerationConfig,
}

impl std::fmt::Debug for OpenAiVisionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiVisionProvider")
            .field("base_url", &self.config.base_url)
            .field("model", &self.config.model)
            .finish()
    }
}

impl OpenAiVisionProvider {
    pub fn new(config: ModerationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn request_body(&self, image: &DataUri) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "response_format": { "type": "json_object" },
            "messages": [
                {
                    "role": "user",
                    "content": [
                        { "type": "text", "text": MODERATION_PROMPT },
                        {
                            "type": "image_url",
                            "image_url": { "url": image.as_str() }
                        }
                    ]
                }
            ]
        })
    }

    fn parse_verdict(body: &CompletionResponse) -> Result<ImageCheckResult> {
        let content = body
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or_else(|| Error::Provider("model returned no content".to_string()))?;

        serde_json::from_str(content)
            .map_err(|e| Error::Provider(format!("unparseable model verdict: {}", e)))
    }
}

#[async_trait]
impl ImageClassifier for OpenAiVisionProvider {
    async fn classify(&self, image: &DataUri) -> Result<ImageCheckResult> {
        // Reject malformed input before spending a model call on it.
        let (mime, _) = image.parse()?;

        let url = self.config.completions_url();
        tracing::debug!(model = %self.config.model, %mime, "Requesting image classification");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.config.api_key())
            .json(&self.request_body(image))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Provider(format!(
                "classification request failed with status {}: {}",
                status, body
            )));
        }

        let body: CompletionResponse = response.json().await?;
        Self::parse_verdict(&body)
    }
}
