pub mod moderation;
pub mod registration;
