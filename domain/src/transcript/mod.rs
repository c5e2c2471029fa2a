//! Conversation transcript domain

pub mod entities;

pub use entities::{ERROR_MARKER, Transcript, Turn, USER_SPEAKER};
