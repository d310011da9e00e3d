pub mod image;
pub mod registration;
pub mod strength;
