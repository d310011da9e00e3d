pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod notify;
pub mod providers;
pub mod services;
pub mod strength;
pub mod utils;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use form::{FormController, SubmitOutcome};
