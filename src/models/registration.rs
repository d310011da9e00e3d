use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::models::image::ImageUpload;

/// Gender selection offered by the registration form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// The full registration payload as collected by the form.
///
/// Validity is all-or-nothing: the payload is acceptable only when every
/// field constraint in [`crate::validation::validate_registration`] holds
/// at the same time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    #[serde(skip)]
    pub picture: Option<ImageUpload>,
    pub accepted_terms: bool,
}

impl Default for RegistrationInput {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            birth_date: None,
            gender: None,
            picture: None,
            accepted_terms: false,
        }
    }
}

/// Result reported by a registration backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
    pub success: bool,
    pub message: String,
}
