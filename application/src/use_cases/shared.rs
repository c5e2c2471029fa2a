//! Helpers shared between use cases

use crate::ports::agent::{Agent, AgentError};
use colloquy_domain::Transcript;
use std::time::Duration;
use tokio::time::timeout;

/// Invoke an agent, converting an elapsed timeout into an [`AgentError`].
pub(crate) async fn invoke_with_timeout(
    agent: &dyn Agent,
    transcript: &Transcript,
    turn_timeout: Option<Duration>,
) -> Result<String, AgentError> {
    match turn_timeout {
        Some(limit) => match timeout(limit, agent.invoke(transcript)).await {
            Ok(result) => result,
            Err(_) => Err(AgentError::Timeout),
        },
        None => agent.invoke(transcript).await,
    }
}
