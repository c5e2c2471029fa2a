//! OpenAI-compatible chat-completions adapter

pub mod client;
pub mod types;

pub use client::{ChatClient, ChatClientError};
pub use types::{ChatMessage, Role};
