//! The synchronous core of the form controller.
//!
//! `FormMachine` tracks the form phase and the picture moderation status,
//! validates every transition, and keeps a bounded log of what happened.
//! All asynchrony (file encoding, the moderation call, the registration
//! call) lives in the controller; the machine only sees their outcomes.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use thiserror::Error;

use super::event::FormEvent;
use super::state::{FormPhase, PictureState};
use crate::models::image::ImageCheckResult;

const MAX_LOG_SIZE: usize = 100;

/// A log entry recording a state transition.
#[derive(Debug, Clone)]
pub struct TransitionLog {
    pub event: FormEvent,
    pub phase: FormPhase,
    pub picture: PictureState,
    pub timestamp: DateTime<Utc>,
}

/// Rejected transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot start a picture check while submitting")]
    CheckDuringSubmit,

    #[error("cannot submit while the picture check is in progress")]
    ModerationPending,

    #[error("a submission is already in progress")]
    AlreadySubmitting,
}

pub struct FormMachine {
    phase: FormPhase,
    picture: PictureState,
    next_seq: u64,
    event_log: VecDeque<TransitionLog>,
}

impl Default for FormMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl FormMachine {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Editing,
            picture: PictureState::Idle,
            next_seq: 1,
            event_log: VecDeque::with_capacity(MAX_LOG_SIZE),
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn picture(&self) -> &PictureState {
        &self.picture
    }

    pub fn event_log(&self) -> &VecDeque<TransitionLog> {
        &self.event_log
    }

    /// True when neither a picture check nor a submission is in flight.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing && !self.picture.is_checking()
    }

    /// Starts a picture check, superseding any earlier selection.
    ///
    /// Clears the previous moderation result and returns the sequence
    /// number the eventual verdict must present to be applied.
    pub fn begin_picture_check(&mut self) -> Result<u64, TransitionError> {
        if self.phase == FormPhase::Submitting {
            return Err(TransitionError::CheckDuringSubmit);
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.picture = PictureState::Checking { seq };
        self.log(FormEvent::PictureSelected { seq });
        Ok(seq)
    }

    /// Applies a moderation verdict for selection `seq`.
    ///
    /// Returns `false` when the verdict is stale: only a verdict matching
    /// the currently checking selection is applied, so a slow response for
    /// a superseded selection can never overwrite a newer result.
    pub fn resolve_moderation(&mut self, seq: u64, result: &ImageCheckResult) -> bool {
        match &self.picture {
            PictureState::Checking { seq: current } if *current == seq => {
                self.picture = if result.is_work_appropriate {
                    PictureState::Approved { seq }
                } else {
                    PictureState::Rejected {
                        seq,
                        reason: result
                            .reason
                            .clone()
                            .unwrap_or_else(|| "Image is not work-appropriate.".to_string()),
                    }
                };
                self.log(FormEvent::ModerationResolved {
                    seq,
                    appropriate: result.is_work_appropriate,
                });
                true
            }
            _ => {
                tracing::warn!(seq, current = ?self.picture.seq(), "Discarding stale moderation result");
                self.log(FormEvent::ModerationDiscarded { seq });
                false
            }
        }
    }

    /// Clears the picture slot without starting a new check.
    ///
    /// Used when a selection fails local constraints: the previous
    /// moderation result is superseded but no remote call is made.
    pub fn clear_picture(&mut self) {
        self.picture = PictureState::Idle;
        self.log(FormEvent::PictureCleared);
    }

    /// Moves the form into the submitting phase.
    pub fn begin_submit(&mut self) -> Result<(), TransitionError> {
        if self.phase == FormPhase::Submitting {
            return Err(TransitionError::AlreadySubmitting);
        }
        if self.picture.is_checking() {
            return Err(TransitionError::ModerationPending);
        }

        self.phase = FormPhase::Submitting;
        self.log(FormEvent::SubmitStarted);
        Ok(())
    }

    /// Records the registration outcome and leaves the submitting phase.
    ///
    /// On success all picture state is cleared; on failure it is retained
    /// so the user can correct and resubmit.
    pub fn finish_submit(&mut self, success: bool) {
        self.phase = FormPhase::Editing;
        self.log(FormEvent::RegistrationFinished { success });

        if success {
            self.reset();
        }
    }

    /// Clears the picture state. The sequence counter keeps increasing so
    /// verdicts from before the reset stay stale.
    pub fn reset(&mut self) {
        self.phase = FormPhase::Editing;
        self.picture = PictureState::Idle;
        self.log(FormEvent::FormReset);
    }

    fn log(&mut self, event: FormEvent) {
        self.event_log.push_back(TransitionLog {
            event,
            phase: self.phase,
            picture: self.picture.clone(),
            timestamp: Utc::now(),
        });

        while self.event_log.len() > MAX_LOG_SIZE {
            self.event_log.pop_front();
        }
    }
}
