use serde::{Deserialize, Serialize};

/// Ordinal password-strength classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    None = 0,
    Weak = 1,
    Medium = 2,
    Strong = 3,
}

impl StrengthLevel {
    /// Human-readable label shown next to the strength meter.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        }
    }
}

/// Strength classification for the current password value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    pub level: StrengthLevel,
    pub label: String,
}

impl StrengthResult {
    pub fn new(level: StrengthLevel) -> Self {
        Self {
            level,
            label: level.label().to_string(),
        }
    }
}

impl Default for StrengthResult {
    fn default() -> Self {
        Self::new(StrengthLevel::None)
    }
}
