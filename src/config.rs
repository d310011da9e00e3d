use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use std::fmt;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub moderation: ModerationConfig,
    pub registration: RegistrationConfig,
}

/// Settings for the image moderation provider.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModerationConfig {
    // Never serialized; absent unless FORMFLOW__MODERATION__API_KEY is set.
    #[serde(skip_serializing, default = "empty_secret")]
    pub api_key: SecretString,
    pub base_url: String,
    pub model: String,
}

/// Settings for the stub registration backend.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistrationConfig {
    /// Simulated save latency in milliseconds.
    pub delay_ms: u64,
}

fn empty_secret() -> SecretString {
    "".to_string().into()
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            // Override with environment variables using `FORMFLOW__` prefix and `__` separator
            // e.g., FORMFLOW__MODERATION__MODEL="gpt-4o-mini"
            .add_source(
                config::Environment::with_prefix("FORMFLOW")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ModerationConfig {
    /// Returns the chat-completions endpoint for the configured base URL.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Exposes the provider API key for request authorization.
    pub fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl Default for ModerationConfig {
    fn default() -> Self {
        Self {
            api_key: "".to_string().into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self { delay_ms: 1000 }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Use serde to serialize to pretty JSON
        // API key is automatically skipped due to #[serde(skip_serializing)]
        match serde_json::to_string_pretty(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "Error serializing config"),
        }
    }
}
