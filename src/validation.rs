//! Field validation for the registration payload.
//!
//! Each validator checks one form field and reports a field-keyed
//! validation error. [`validate_registration`] runs the whole set and is
//! all-or-nothing: the payload passes only when every field does.

use chrono::{NaiveDate, Utc};
use std::collections::HashMap;

use crate::error::{Error, Result, ValidationErrors};
use crate::models::image::{ImageUpload, ALLOWED_PICTURE_TYPES, MAX_PICTURE_BYTES};
use crate::models::registration::{Gender, RegistrationInput};

/// Earliest accepted date of birth.
pub fn earliest_birth_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
}

/// Validates the full name field.
pub fn validate_full_name(full_name: &str) -> Result<()> {
    let name = full_name.trim();

    if name.chars().count() < 2 {
        return Err(Error::field(
            "full_name",
            "Full name must be at least 2 characters.",
        ));
    }

    if name.len() > 100 {
        return Err(Error::field(
            "full_name",
            "Full name must be less than 100 characters.",
        ));
    }

    if name.chars().any(|c| c.is_control()) {
        return Err(Error::field(
            "full_name",
            "Full name cannot contain control characters.",
        ));
    }

    Ok(())
}

/// Validates email address syntax using structural checks.
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    let invalid = || Error::field("email", "Please enter a valid email address.");

    if email.is_empty() || email.len() > 254 {
        return Err(invalid());
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(invalid());
    }

    let (local_part, domain) = (parts[0], parts[1]);

    if local_part.is_empty() || local_part.len() > 64 {
        return Err(invalid());
    }

    if domain.is_empty() || domain.len() > 253 || !domain.contains('.') {
        return Err(invalid());
    }

    if email.contains("..") {
        return Err(invalid());
    }

    let invalid_chars = ['<', '>', '(', ')', '[', ']', '\\', ',', ';', ':', '"', ' '];
    if email.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(invalid());
    }

    Ok(())
}

/// Validates the password field length.
pub fn validate_password(password: &str) -> Result<()> {
    // minimum length is in characters; the upper cap stays byte-based
    if password.chars().count() < 8 {
        return Err(Error::field(
            "password",
            "Password must be at least 8 characters.",
        ));
    }

    if password.len() > 128 {
        return Err(Error::field(
            "password",
            "Password is too long (max 128 characters).",
        ));
    }

    Ok(())
}

/// Validates that the confirmation matches the password.
pub fn validate_password_match(password: &str, confirm_password: &str) -> Result<()> {
    if password != confirm_password {
        return Err(Error::field("confirm_password", "Passwords do not match."));
    }

    Ok(())
}

/// Validates the date of birth: required, not in the future, not before 1900.
pub fn validate_birth_date(birth_date: Option<NaiveDate>) -> Result<()> {
    let date = birth_date
        .ok_or_else(|| Error::field("birth_date", "A date of birth is required."))?;

    let today = Utc::now().date_naive();
    if date > today || date < earliest_birth_date() {
        return Err(Error::field(
            "birth_date",
            "Date of birth must be between 1900-01-01 and today.",
        ));
    }

    Ok(())
}

/// Validates that a gender was selected.
pub fn validate_gender(gender: Option<Gender>) -> Result<()> {
    if gender.is_none() {
        return Err(Error::field("gender", "You need to select a gender."));
    }

    Ok(())
}

/// Validates the profile picture constraints before any remote call.
pub fn validate_picture(picture: Option<&ImageUpload>) -> Result<()> {
    let picture = picture
        .ok_or_else(|| Error::field("profile_picture", "Profile picture is required."))?;

    if picture.bytes.len() > MAX_PICTURE_BYTES {
        return Err(Error::field(
            "profile_picture",
            "File size must be less than 2MB.",
        ));
    }

    if !ALLOWED_PICTURE_TYPES.contains(&picture.content_type.as_str()) {
        return Err(Error::field(
            "profile_picture",
            "Only JPG, PNG, and WEBP formats are allowed.",
        ));
    }

    Ok(())
}

/// Validates that the terms and conditions were accepted.
pub fn validate_terms(accepted: bool) -> Result<()> {
    if !accepted {
        return Err(Error::field(
            "terms",
            "You must accept the terms and conditions.",
        ));
    }

    Ok(())
}

/// Validates the whole registration payload.
///
/// Runs every field validator and collects the failures into a field map,
/// so callers see all problems at once rather than the first one.
pub fn validate_registration(input: &RegistrationInput) -> Result<()> {
    let checks = [
        validate_full_name(&input.full_name),
        validate_email(&input.email),
        validate_password(&input.password),
        validate_password_match(&input.password, &input.confirm_password),
        validate_birth_date(input.birth_date),
        validate_gender(input.gender),
        validate_picture(input.picture.as_ref()),
        validate_terms(input.accepted_terms),
    ];

    let mut fields: HashMap<String, String> = HashMap::new();
    for check in checks {
        if let Err(Error::Validation(ValidationErrors::Single { field, message })) = check {
            fields.insert(field, message);
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(ValidationErrors::Multiple { fields }))
    }
}
