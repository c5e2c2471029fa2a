//! Domain error types

use thiserror::Error;

/// Construction-time errors. Fatal: a run never starts with a broken setup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("no participants registered")]
    EmptyRoster,

    #[error("duplicate participant name: {0}")]
    DuplicateName(String),

    #[error("workflow references unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("workflow sequence is empty")]
    EmptyWorkflow,
}

/// Run-time selection failure. Fatal to the run.
///
/// Selection strategies fall back before failing, so this only fires when no
/// candidate speaker can be produced at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection produced no candidate speaker")]
    NoCandidates,
}

/// Failure of the external speaker decider.
///
/// Recoverable: lead-directed selection falls back to the full roster.
#[derive(Error, Debug, Clone)]
#[error("speaker decider failed: {0}")]
pub struct DeciderError(String);

impl DeciderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
