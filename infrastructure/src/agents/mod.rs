//! Agent and decider adapters

pub mod chat_agent;
pub mod decider;

pub use chat_agent::ChatCompletionAgent;
pub use decider::LlmSpeakerDecider;
