//! The form controller: field state, submission gating, and the picture
//! moderation state machine.

pub mod controller;
pub mod event;
pub mod machine;
pub mod state;

pub use controller::{FormController, SubmitOutcome};
pub use event::FormEvent;
pub use machine::{FormMachine, TransitionError, TransitionLog};
pub use state::{FormPhase, PictureState};
