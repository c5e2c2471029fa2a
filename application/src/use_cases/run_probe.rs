//! Run Probe use case
//!
//! Invokes a single named agent once against an opening message. Useful for
//! checking one participant's behavior before running a full group chat.

use crate::config::ChatParams;
use crate::registry::AgentRegistry;
use crate::use_cases::shared::invoke_with_timeout;
use colloquy_domain::{Transcript, USER_SPEAKER};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while probing an agent
#[derive(Error, Debug)]
pub enum RunProbeError {
    #[error("no such agent: {0}")]
    UnknownAgent(String),
}

/// Input for the RunProbe use case
pub struct RunProbeInput {
    /// Name of the agent to invoke
    pub agent: String,
    /// Message to probe with
    pub message: String,
    /// Loop-control parameters; only the timeout applies here
    pub params: ChatParams,
}

/// Use case for invoking one agent once
pub struct RunProbeUseCase {
    registry: AgentRegistry,
}

impl RunProbeUseCase {
    pub fn new(registry: AgentRegistry) -> Self {
        Self { registry }
    }

    /// Invoke the named agent once and return the two-turn transcript.
    ///
    /// An invocation failure is recorded as an error turn, matching the
    /// group chat failure semantics.
    pub async fn execute(&self, input: RunProbeInput) -> Result<Transcript, RunProbeError> {
        let agent = self
            .registry
            .get(&input.agent)
            .ok_or_else(|| RunProbeError::UnknownAgent(input.agent.clone()))?;

        info!(agent = %input.agent, "probing agent");

        let mut transcript = Transcript::new();
        transcript.append(USER_SPEAKER, input.message);

        match invoke_with_timeout(agent.as_ref(), &transcript, input.params.turn_timeout).await {
            Ok(content) => {
                transcript.append(&input.agent, content);
            }
            Err(error) => {
                warn!(agent = %input.agent, %error, "probe invocation failed");
                transcript.append_error(&input.agent, error);
            }
        }

        Ok(transcript)
    }
}
