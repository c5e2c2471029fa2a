//! Termination policies

use crate::transcript::Transcript;

/// Policy deciding when a run stops
///
/// The orchestrator consults this after every individual invocation, so a
/// cap smaller than one selection batch still stops exactly at the cap.
pub trait TerminationStrategy: Send + Sync {
    fn is_done(&self, transcript: &Transcript, iteration_count: usize) -> bool;
}

/// Hard cap on the number of agent invocations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxTurns(pub usize);

impl TerminationStrategy for MaxTurns {
    fn is_done(&self, _transcript: &Transcript, iteration_count: usize) -> bool {
        iteration_count >= self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_turns_boundary() {
        let policy = MaxTurns(3);
        let transcript = Transcript::new();
        assert!(!policy.is_done(&transcript, 0));
        assert!(!policy.is_done(&transcript, 2));
        assert!(policy.is_done(&transcript, 3));
        assert!(policy.is_done(&transcript, 4));
    }

    #[test]
    fn test_zero_cap_stops_immediately() {
        let policy = MaxTurns(0);
        assert!(policy.is_done(&Transcript::new(), 0));
    }

    #[test]
    fn test_content_based_policy_substitutes() {
        // Alternative policies plug in through the same trait
        struct StopWord(&'static str);

        impl TerminationStrategy for StopWord {
            fn is_done(&self, transcript: &Transcript, _iteration_count: usize) -> bool {
                transcript
                    .last()
                    .is_some_and(|turn| turn.content.contains(self.0))
            }
        }

        let policy = StopWord("DONE");
        let mut transcript = Transcript::new();
        transcript.append("Analyst", "still working");
        assert!(!policy.is_done(&transcript, 10));

        transcript.append("Advisor", "all DONE here");
        assert!(policy.is_done(&transcript, 0));
    }
}
