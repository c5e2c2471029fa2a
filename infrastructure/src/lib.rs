//! Infrastructure layer for colloquy
//!
//! External adapters: the chat-completions HTTP client, the agent and
//! speaker-decider implementations backed by it, and configuration loading.

pub mod agents;
pub mod config;
pub mod openai;

// Re-export commonly used types
pub use agents::{ChatCompletionAgent, LlmSpeakerDecider};
pub use config::{ConfigError, ConfigLoader, FileConfig, StrategyChoice};
pub use openai::{ChatClient, ChatClientError};
