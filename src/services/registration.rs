//! Registration backends.
//!
//! The controller only knows the [`RegistrationBackend`] trait, so a real
//! user store can replace [`StubRegistration`] without touching the form
//! logic.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::RegistrationConfig;
use crate::models::registration::{RegistrationInput, RegistrationOutcome};

/// Persists a validated registration payload.
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    async fn register(&self, input: &RegistrationInput) -> RegistrationOutcome;
}

/// Placeholder backend: logs, simulates save latency, reports success.
///
/// A production deployment would hash the password, enforce email
/// uniqueness, and store the profile picture; none of that happens here.
pub struct StubRegistration {
    delay: Duration,
}

impl StubRegistration {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &RegistrationConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms))
    }
}

impl Default for StubRegistration {
    fn default() -> Self {
        Self::from_config(&RegistrationConfig::default())
    }
}

#[async_trait]
impl RegistrationBackend for StubRegistration {
    async fn register(&self, input: &RegistrationInput) -> RegistrationOutcome {
        // Never log credentials.
        tracing::info!(email = %input.email, full_name = %input.full_name, "Registering user");
        tokio::time::sleep(self.delay).await;

        RegistrationOutcome {
            success: true,
            message: "Registration successful!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stub_reports_success() {
        let backend = StubRegistration::new(Duration::from_millis(0));
        let outcome = backend.register(&RegistrationInput::default()).await;
        assert!(outcome.success);
        assert_eq!(outcome.message, "Registration successful!");
    }
}
