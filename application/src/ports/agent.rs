//! Agent port
//!
//! Defines how the orchestrator invokes a conversation participant.

use async_trait::async_trait;
use colloquy_domain::Transcript;
use thiserror::Error;

/// Errors an agent invocation can produce
///
/// These are recovered locally by the run loop: a failed invocation becomes
/// a visible error turn, never an aborted run.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("request failed: {0}")]
    RequestFailed(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("invocation timed out")]
    Timeout,
}

/// A conversation participant
///
/// Given the transcript so far, produces one reply. The orchestrator depends
/// only on this capability, never on a concrete implementation. Retry policy,
/// if any, belongs to the implementation.
#[async_trait]
pub trait Agent: Send + Sync {
    /// Unique participant name used for attribution and selection
    fn name(&self) -> &str;

    /// Produce one reply to the conversation so far
    async fn invoke(&self, transcript: &Transcript) -> Result<String, AgentError>;
}
