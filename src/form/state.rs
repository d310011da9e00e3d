//! State definitions for the form state machine.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Moderation status of the profile picture field.
///
/// A single tagged variant so that invalid combinations (for example
/// "checking" and "rejected" at once) are unrepresentable. Every check is
/// stamped with the selection sequence number that started it; a result
/// carrying a stale sequence number is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PictureState {
    /// No picture selected, or the last selection failed local checks.
    Idle,
    /// A classification call is in flight for selection `seq`.
    Checking { seq: u64 },
    /// The model judged selection `seq` work-appropriate.
    Approved { seq: u64 },
    /// The model rejected selection `seq`.
    Rejected { seq: u64, reason: String },
}

impl PictureState {
    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking { .. })
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }

    /// The selection sequence number this state refers to, if any.
    pub fn seq(&self) -> Option<u64> {
        match self {
            Self::Idle => None,
            Self::Checking { seq } | Self::Approved { seq } | Self::Rejected { seq, .. } => {
                Some(*seq)
            }
        }
    }
}

/// Overall phase of the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum FormPhase {
    /// The user is filling in fields.
    Editing,
    /// A registration call is in flight.
    Submitting,
}
