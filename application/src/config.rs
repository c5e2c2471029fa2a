//! Chat parameters for run loop control.
//!
//! [`ChatParams`] groups the static parameters that control the turn loop in
//! [`RunChatUseCase`](crate::use_cases::run_chat::RunChatUseCase). These are
//! application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Loop-control parameters for a group chat run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatParams {
    /// Maximum number of agent invocations before the run stops
    pub max_turns: usize,
    /// Timeout applied to each individual agent invocation
    pub turn_timeout: Option<Duration>,
}

impl Default for ChatParams {
    fn default() -> Self {
        Self {
            max_turns: 6,
            turn_timeout: Some(Duration::from_secs(120)),
        }
    }
}

impl ChatParams {
    pub fn with_max_turns(mut self, max: usize) -> Self {
        self.max_turns = max;
        self
    }

    pub fn with_turn_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.turn_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = ChatParams::default();
        assert_eq!(params.max_turns, 6);
        assert!(params.turn_timeout.is_some());
    }

    #[test]
    fn test_builder() {
        let params = ChatParams::default()
            .with_max_turns(10)
            .with_turn_timeout(None);

        assert_eq!(params.max_turns, 10);
        assert!(params.turn_timeout.is_none());
    }
}
