//! Turn-selection strategies
//!
//! The set of policies is closed: three variants behind one `select`
//! interface. Cursor and cached plan live in [`SelectionState`], which the
//! orchestrator creates per run, so strategy values stay immutable and can
//! be reused across runs.

use crate::core::error::{ConfigurationError, DeciderError, SelectionError};
use crate::prompt::PromptTemplate;
use crate::roster::Roster;
use crate::selection::plan::parse_speaker_plan;
use crate::transcript::Transcript;
use async_trait::async_trait;
use std::sync::Arc;

/// External decision function consulted by [`SelectionStrategy::LeadDirected`]
///
/// Defined in the domain layer but implemented in infrastructure. The reply
/// is expected to contain a comma-separated list of participant names and is
/// parsed defensively.
#[async_trait]
pub trait SpeakerDecider: Send + Sync {
    async fn decide(&self, prompt: &str) -> Result<String, DeciderError>;
}

/// Run-scoped selection state
///
/// Created by the orchestrator at the start of each run. Holding the cursor
/// here rather than on the strategy removes cross-run interference when a
/// strategy value is reused.
#[derive(Debug, Default)]
pub struct SelectionState {
    cursor: usize,
    plan: Option<Vec<String>>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Policy choosing the next speaker(s)
#[derive(Clone)]
pub enum SelectionStrategy {
    /// Cycle through the roster in registration order, one speaker per call
    RoundRobin,
    /// Cycle through a caller-supplied workflow, one speaker per call
    FixedSequence(Vec<String>),
    /// Ask an external decider for a speaking plan once per run, then replay
    /// the plan with wraparound
    LeadDirected(Arc<dyn SpeakerDecider>),
}

impl std::fmt::Debug for SelectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionStrategy::RoundRobin => write!(f, "RoundRobin"),
            SelectionStrategy::FixedSequence(workflow) => {
                f.debug_tuple("FixedSequence").field(workflow).finish()
            }
            SelectionStrategy::LeadDirected(_) => write!(f, "LeadDirected"),
        }
    }
}

impl SelectionStrategy {
    /// Build a fixed-sequence strategy, validating every workflow name
    /// against the roster.
    pub fn fixed_sequence(
        workflow: Vec<String>,
        roster: &Roster,
    ) -> Result<Self, ConfigurationError> {
        if workflow.is_empty() {
            return Err(ConfigurationError::EmptyWorkflow);
        }
        for name in &workflow {
            if !roster.contains(name) {
                return Err(ConfigurationError::UnknownParticipant(name.clone()));
            }
        }
        Ok(Self::FixedSequence(workflow))
    }

    /// Choose the next speaker(s).
    ///
    /// Returns at least one name on success. The lead-directed variant calls
    /// its decider at most once per run: the first invocation returns the
    /// whole plan as one batch, later invocations advance through the plan
    /// one name at a time.
    pub async fn select(
        &self,
        roster: &Roster,
        transcript: &Transcript,
        state: &mut SelectionState,
    ) -> Result<Vec<String>, SelectionError> {
        match self {
            SelectionStrategy::RoundRobin => {
                Ok(vec![Self::advance(roster.names(), &mut state.cursor)?])
            }
            SelectionStrategy::FixedSequence(workflow) => {
                Ok(vec![Self::advance(workflow, &mut state.cursor)?])
            }
            SelectionStrategy::LeadDirected(decider) => {
                if state.plan.is_none() {
                    let plan = Self::build_plan(decider.as_ref(), roster, transcript).await;
                    if plan.is_empty() {
                        return Err(SelectionError::NoCandidates);
                    }
                    state.plan = Some(plan.clone());
                    return Ok(plan);
                }
                let SelectionState { cursor, plan } = state;
                match plan {
                    Some(plan) => Ok(vec![Self::advance(plan, cursor)?]),
                    None => Err(SelectionError::NoCandidates),
                }
            }
        }
    }

    fn advance(names: &[String], cursor: &mut usize) -> Result<String, SelectionError> {
        if names.is_empty() {
            return Err(SelectionError::NoCandidates);
        }
        let name = names[*cursor % names.len()].clone();
        *cursor += 1;
        Ok(name)
    }

    /// Ask the decider for a plan; fall back to the full roster when the
    /// reply is unusable or the decider itself fails.
    async fn build_plan(
        decider: &dyn SpeakerDecider,
        roster: &Roster,
        transcript: &Transcript,
    ) -> Vec<String> {
        let prompt = PromptTemplate::lead_selection_prompt(roster.names(), &transcript.render());
        match decider.decide(&prompt).await {
            Ok(reply) => {
                let plan = parse_speaker_plan(&reply, roster);
                if plan.is_empty() {
                    roster.names().to_vec()
                } else {
                    plan
                }
            }
            Err(_) => roster.names().to_vec(),
        }
    }
}
