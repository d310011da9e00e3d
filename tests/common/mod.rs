//! Shared test doubles and helpers for the integration suites.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use formflow::error::{Error, Result};
use formflow::form::FormController;
use formflow::models::image::{ImageCheckResult, ImageUpload};
use formflow::models::registration::{Gender, RegistrationInput, RegistrationOutcome};
use formflow::notify::{Notification, Notifier};
use formflow::providers::ImageClassifier;
use formflow::services::moderation::ModerationService;
use formflow::services::registration::RegistrationBackend;
use formflow::utils::data_uri::DataUri;

/// Initializes test logging; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One scripted classifier response.
pub enum Verdict {
    Approve,
    Reject(&'static str),
    Fail,
}

/// Classifier that replays scripted verdicts and counts its calls.
///
/// When the script runs out it keeps approving.
pub struct ScriptedClassifier {
    verdicts: Mutex<VecDeque<Verdict>>,
    calls: AtomicUsize,
}

impl ScriptedClassifier {
    pub fn new(verdicts: Vec<Verdict>) -> Arc<Self> {
        Arc::new(Self {
            verdicts: Mutex::new(verdicts.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn approving() -> Arc<Self> {
        Self::new(vec![])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageClassifier for ScriptedClassifier {
    async fn classify(&self, _image: &DataUri) -> Result<ImageCheckResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.verdicts.lock().unwrap().pop_front();
        match next {
            Some(Verdict::Reject(reason)) => Ok(ImageCheckResult::inappropriate(reason)),
            Some(Verdict::Fail) => Err(Error::Provider("scripted failure".to_string())),
            Some(Verdict::Approve) | None => Ok(ImageCheckResult::appropriate()),
        }
    }
}

/// Registration backend that records every call.
pub struct RecordingBackend {
    succeed: bool,
    calls: Mutex<Vec<RegistrationInput>>,
}

impl RecordingBackend {
    pub fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            succeed: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            succeed: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RegistrationInput> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RegistrationBackend for RecordingBackend {
    async fn register(&self, input: &RegistrationInput) -> RegistrationOutcome {
        self.calls.lock().unwrap().push(input.clone());
        if self.succeed {
            RegistrationOutcome {
                success: true,
                message: "Registration successful!".to_string(),
            }
        } else {
            RegistrationOutcome {
                success: false,
                message: "duplicate email".to_string(),
            }
        }
    }
}

/// Notifier that collects everything for assertions.
#[derive(Default)]
pub struct CollectingNotifier {
    notes: Mutex<Vec<Notification>>,
}

impl CollectingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn last(&self) -> Option<Notification> {
        self.notes.lock().unwrap().last().cloned()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, notification: Notification) {
        self.notes.lock().unwrap().push(notification);
    }
}

/// Builds a controller around the given doubles.
pub fn controller(
    classifier: Arc<ScriptedClassifier>,
    backend: Arc<RecordingBackend>,
    notifier: Arc<CollectingNotifier>,
) -> FormController {
    FormController::new(ModerationService::new(classifier), backend, notifier)
}

/// Fills every text field with valid values.
pub fn fill_valid_fields(form: &mut FormController) {
    form.set_full_name("Jane Doe");
    form.set_email("jane@example.com");
    form.set_password("Abcdefg1!");
    form.set_confirm_password("Abcdefg1!");
    form.set_birth_date(NaiveDate::from_ymd_opt(1990, 6, 15));
    form.set_gender(Gender::Female);
    form.set_terms(true);
}

/// A small valid PNG upload.
pub fn png_upload() -> ImageUpload {
    ImageUpload::new("avatar.png", "image/png", vec![0u8; 1024])
}
