//! Events recorded by the form state machine.

use serde::{Deserialize, Serialize};

/// Everything that can move the form state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// A new picture was selected and a check started.
    PictureSelected { seq: u64 },
    /// The picture slot was cleared without a new check.
    PictureCleared,
    /// A moderation verdict arrived and was applied.
    ModerationResolved { seq: u64, appropriate: bool },
    /// A moderation verdict arrived for a superseded selection.
    ModerationDiscarded { seq: u64 },
    /// Submission started.
    SubmitStarted,
    /// The registration backend reported back.
    RegistrationFinished { success: bool },
    /// All transient form state was reset.
    FormReset,
}
