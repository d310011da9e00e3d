//! Password-strength heuristic.
//!
//! Five independent checks are counted and the total mapped to a discrete
//! strength level. The scorer is pure and cheap enough to rerun on every
//! keystroke.

use crate::models::strength::{StrengthLevel, StrengthResult};

/// Scores a password against the five strength rules.
///
/// Rules: length >= 8, contains a lowercase letter, an uppercase letter,
/// a digit, and a non-alphanumeric symbol. Classification:
/// - empty password: [`StrengthLevel::None`] with an empty label
/// - up to 2 rules met: "Weak"
/// - 3 or 4 rules met: "Medium"
/// - all 5 rules met: "Strong"
pub fn score_password(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult::new(StrengthLevel::None);
    }

    let checks = [
        // characters, not bytes, so multi-byte passwords count correctly
        password.chars().count() >= 8,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|&&passed| passed).count();

    let level = if score <= 2 {
        StrengthLevel::Weak
    } else if score < 5 {
        StrengthLevel::Medium
    } else {
        StrengthLevel::Strong
    };

    StrengthResult::new(level)
}
