//! Orchestration over the form state machine.
//!
//! `FormController` owns the field values, runs validate-on-change and
//! validate-on-submit, drives the picture moderation flow, and gates the
//! registration call. Collaborators (classifier, registration backend,
//! notification sink) are injected as trait objects.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;

use super::machine::FormMachine;
use super::state::{FormPhase, PictureState};
use crate::error::{Error, ValidationErrors};
use crate::models::image::ImageUpload;
use crate::models::registration::{Gender, RegistrationInput, RegistrationOutcome};
use crate::models::strength::StrengthResult;
use crate::notify::{Notification, Notifier};
use crate::services::moderation::ModerationService;
use crate::services::registration::RegistrationBackend;
use crate::strength::score_password;
use crate::utils::data_uri::DataUri;
use crate::validation;

const PICTURE_FIELD: &str = "profile_picture";

/// What happened to a submit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A picture check or submission was already in flight; nothing ran.
    Blocked,
    /// Validation or the moderation gate refused the payload.
    Rejected,
    /// The registration backend was called and reported this outcome.
    Completed(RegistrationOutcome),
}

pub struct FormController {
    machine: FormMachine,
    input: RegistrationInput,
    field_errors: HashMap<String, String>,
    strength: StrengthResult,
    preview: Option<DataUri>,
    moderation: ModerationService,
    backend: Arc<dyn RegistrationBackend>,
    notifier: Arc<dyn Notifier>,
}

impl FormController {
    pub fn new(
        moderation: ModerationService,
        backend: Arc<dyn RegistrationBackend>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            machine: FormMachine::new(),
            input: RegistrationInput::default(),
            field_errors: HashMap::new(),
            strength: StrengthResult::default(),
            preview: None,
            moderation,
            backend,
            notifier,
        }
    }

    // Field setters, each validating on change.

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.input.full_name = value.into();
        let check = validation::validate_full_name(&self.input.full_name);
        self.apply_validation("full_name", check);
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.input.email = value.into();
        let check = validation::validate_email(&self.input.email);
        self.apply_validation("email", check);
    }

    /// Updates the password and recomputes its strength.
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.input.password = value.into();
        self.strength = score_password(&self.input.password);
        let check = validation::validate_password(&self.input.password);
        self.apply_validation("password", check);
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.input.confirm_password = value.into();
        let check = validation::validate_password_match(
            &self.input.password,
            &self.input.confirm_password,
        );
        self.apply_validation("confirm_password", check);
    }

    pub fn set_birth_date(&mut self, value: Option<NaiveDate>) {
        self.input.birth_date = value;
        let check = validation::validate_birth_date(self.input.birth_date);
        self.apply_validation("birth_date", check);
    }

    pub fn set_gender(&mut self, value: Gender) {
        self.input.gender = Some(value);
        self.field_errors.remove("gender");
    }

    pub fn set_terms(&mut self, accepted: bool) {
        self.input.accepted_terms = accepted;
        self.apply_validation("terms", validation::validate_terms(accepted));
    }

    /// Handles a new profile picture selection.
    ///
    /// Local constraints (size, MIME type) are enforced before any remote
    /// call. A valid file is encoded as a data URI and sent for
    /// moderation; the verdict is applied only if the selection has not
    /// been superseded in the meantime.
    pub async fn select_picture(&mut self, upload: ImageUpload) {
        // No selection, valid or not, may touch picture state mid-submit.
        if self.machine.phase() == FormPhase::Submitting {
            tracing::warn!("Ignoring picture selection while submitting");
            return;
        }

        self.field_errors.remove(PICTURE_FIELD);

        if let Err(err) = validation::validate_picture(Some(&upload)) {
            self.machine.clear_picture();
            self.input.picture = None;
            self.preview = None;
            self.record_errors(err);
            return;
        }

        let seq = match self.machine.begin_picture_check() {
            Ok(seq) => seq,
            Err(error) => {
                tracing::warn!(%error, "Ignoring picture selection");
                return;
            }
        };

        let data_uri = DataUri::encode(&upload);
        self.input.picture = Some(upload);
        self.preview = Some(data_uri.clone());

        let result = self.moderation.check_image(&data_uri).await;
        if self.machine.resolve_moderation(seq, &result) {
            if result.is_work_appropriate {
                self.field_errors.remove(PICTURE_FIELD);
            } else {
                let reason = result
                    .reason
                    .unwrap_or_else(|| "Image is not work-appropriate.".to_string());
                self.field_errors
                    .insert(PICTURE_FIELD.to_string(), reason.clone());
                self.notifier
                    .notify(Notification::destructive("Inappropriate Image", reason));
            }
        }
    }

    /// Attempts to submit the form.
    ///
    /// The registration backend is called exactly once, and only when the
    /// moderation gate and the full payload validation both pass.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.machine.can_submit() {
            return SubmitOutcome::Blocked;
        }

        if self.machine.picture().is_rejected() {
            self.notifier.notify(Notification::destructive(
                "Cannot Submit",
                "Please upload a work-appropriate profile picture.",
            ));
            return SubmitOutcome::Rejected;
        }

        if self.preview.is_none() {
            self.field_errors.insert(
                PICTURE_FIELD.to_string(),
                "Profile picture is required.".to_string(),
            );
            return SubmitOutcome::Rejected;
        }

        if let Err(err) = validation::validate_registration(&self.input) {
            self.record_errors(err);
            return SubmitOutcome::Rejected;
        }

        if let Err(error) = self.machine.begin_submit() {
            tracing::warn!(%error, "Submit refused");
            return SubmitOutcome::Blocked;
        }

        let outcome = self.backend.register(&self.input).await;
        self.machine.finish_submit(outcome.success);

        if outcome.success {
            self.reset_fields();
            self.notifier.notify(Notification::success(
                "Registration successful!",
                "Welcome to FormFlow.",
            ));
        } else {
            self.notifier.notify(Notification::destructive(
                "Registration failed",
                "An error occurred. Please try again.",
            ));
        }

        SubmitOutcome::Completed(outcome)
    }

    // Read accessors.

    pub fn input(&self) -> &RegistrationInput {
        &self.input
    }

    pub fn phase(&self) -> FormPhase {
        self.machine.phase()
    }

    pub fn picture(&self) -> &PictureState {
        self.machine.picture()
    }

    pub fn preview(&self) -> Option<&DataUri> {
        self.preview.as_ref()
    }

    pub fn strength(&self) -> &StrengthResult {
        &self.strength
    }

    pub fn field_errors(&self) -> &HashMap<String, String> {
        &self.field_errors
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    pub fn can_submit(&self) -> bool {
        self.machine.can_submit()
    }

    fn apply_validation(&mut self, field: &str, check: crate::error::Result<()>) {
        match check {
            Ok(()) => {
                self.field_errors.remove(field);
            }
            Err(err) => self.record_errors(err),
        }
    }

    fn record_errors(&mut self, err: Error) {
        if let Error::Validation(errors) = err {
            match errors {
                ValidationErrors::Single { field, message } => {
                    self.field_errors.insert(field, message);
                }
                ValidationErrors::Multiple { fields } => {
                    self.field_errors.extend(fields);
                }
            }
        }
    }

    fn reset_fields(&mut self) {
        self.input = RegistrationInput::default();
        self.field_errors.clear();
        self.strength = StrengthResult::default();
        self.preview = None;
    }
}
