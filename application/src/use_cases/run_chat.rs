//! Run Chat use case
//!
//! Drives the multi-agent turn loop to completion and returns the full
//! transcript.

use crate::config::ChatParams;
use crate::ports::observer::{NoObserver, TurnObserver};
use crate::registry::AgentRegistry;
use crate::use_cases::shared::invoke_with_timeout;
use colloquy_domain::{
    MaxTurns, SelectionError, SelectionState, SelectionStrategy, TerminationStrategy, Transcript,
    USER_SPEAKER,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur while running a chat
///
/// Individual agent failures are not here: they are recorded as error turns
/// and the run continues.
#[derive(Error, Debug)]
pub enum RunChatError {
    #[error("selection failed: {0}")]
    Selection(#[from] SelectionError),

    #[error("selected speaker is not registered: {0}")]
    UnknownSpeaker(String),

    #[error("run cancelled")]
    Cancelled,
}

/// Input for the RunChat use case
pub struct RunChatInput {
    /// Opening user message
    pub message: String,
    /// Turn-selection policy
    pub selection: SelectionStrategy,
    /// Loop-control parameters
    pub params: ChatParams,
    /// Termination policy override; defaults to a hard cap of
    /// `params.max_turns` invocations
    pub termination: Option<Box<dyn TerminationStrategy>>,
}

impl RunChatInput {
    pub fn new(message: impl Into<String>, selection: SelectionStrategy) -> Self {
        Self {
            message: message.into(),
            selection,
            params: ChatParams::default(),
            termination: None,
        }
    }

    pub fn with_params(mut self, params: ChatParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_termination(mut self, termination: Box<dyn TerminationStrategy>) -> Self {
        self.termination = Some(termination);
        self
    }
}

/// Use case for running a multi-agent group chat
///
/// One `execute` call is one run: it owns its transcript and selection state,
/// so concurrent runs never interfere.
pub struct RunChatUseCase {
    registry: AgentRegistry,
}

impl RunChatUseCase {
    pub fn new(registry: AgentRegistry) -> Self {
        Self { registry }
    }

    /// Run to completion with no live output.
    pub async fn execute(&self, input: RunChatInput) -> Result<Transcript, RunChatError> {
        self.run(input, &NoObserver, &CancellationToken::new())
            .await
    }

    /// Run to completion, notifying the observer after every appended turn.
    pub async fn execute_with_observer(
        &self,
        input: RunChatInput,
        observer: &dyn TurnObserver,
    ) -> Result<Transcript, RunChatError> {
        self.run(input, observer, &CancellationToken::new()).await
    }

    /// Run to completion with cooperative cancellation.
    pub async fn execute_with_cancellation(
        &self,
        input: RunChatInput,
        cancel: CancellationToken,
    ) -> Result<Transcript, RunChatError> {
        self.run(input, &NoObserver, &cancel).await
    }

    async fn run(
        &self,
        input: RunChatInput,
        observer: &dyn TurnObserver,
        cancel: &CancellationToken,
    ) -> Result<Transcript, RunChatError> {
        let RunChatInput {
            message,
            selection,
            params,
            termination,
        } = input;

        let cap = MaxTurns(params.max_turns);
        let termination: &dyn TerminationStrategy = termination.as_deref().unwrap_or(&cap);

        info!(
            participants = self.registry.len(),
            max_turns = params.max_turns,
            "starting group chat"
        );

        let mut transcript = Transcript::new();
        let mut state = SelectionState::new();
        let mut iterations = 0usize;

        let opening = transcript.append(USER_SPEAKER, message).clone();
        observer.on_turn(&opening);

        'rounds: loop {
            if termination.is_done(&transcript, iterations) {
                break;
            }

            let names = selection
                .select(self.registry.roster(), &transcript, &mut state)
                .await?;
            debug!(?names, "selected speakers");

            // Invoke each selected speaker in order; replies are appended
            // strictly in selection order, one at a time.
            for name in names {
                let agent = self
                    .registry
                    .get(&name)
                    .ok_or_else(|| RunChatError::UnknownSpeaker(name.clone()))?;

                let outcome = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => None,
                    result = invoke_with_timeout(
                        agent.as_ref(),
                        &transcript,
                        params.turn_timeout,
                    ) => Some(result),
                };
                let Some(result) = outcome else {
                    info!("run cancelled");
                    return Err(RunChatError::Cancelled);
                };

                let turn = match result {
                    Ok(content) => transcript.append(&name, content).clone(),
                    Err(error) => {
                        warn!(speaker = %name, %error, "agent invocation failed");
                        transcript.append_error(&name, error).clone()
                    }
                };
                observer.on_turn(&turn);

                iterations += 1;
                // Re-check after every invocation so a cap smaller than the
                // selected batch stops exactly at the cap.
                if termination.is_done(&transcript, iterations) {
                    break 'rounds;
                }
            }
        }

        info!(turns = transcript.len(), "group chat complete");
        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::agent::{Agent, AgentError};
    use async_trait::async_trait;
    use colloquy_domain::{DeciderError, SpeakerDecider};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct EchoAgent {
        name: String,
    }

    impl EchoAgent {
        fn arc(name: &str) -> Arc<dyn Agent> {
            Arc::new(Self {
                name: name.to_string(),
            })
        }
    }

    #[async_trait]
    impl Agent for EchoAgent {
        fn name(&self) -> &str {
            &self.name
        }

        async fn invoke(&self, transcript: &Transcript) -> Result<String, AgentError> {
            Ok(format!("reply {} from {}", transcript.len(), self.name))
        }
    }

    struct FailingAgent {
        name: String,
    }

    #[async_trait]
    impl Agent for FailingAgent {
        fn name(&self) -> &str {
            &self.name
        }

        async fn invoke(&self, _transcript: &Transcript) -> Result<String, AgentError> {
            Err(AgentError::Unavailable("stub backend down".to_string()))
        }
    }

    struct SlowAgent {
        name: String,
        delay: Duration,
    }

    #[async_trait]
    impl Agent for SlowAgent {
        fn name(&self) -> &str {
            &self.name
        }

        async fn invoke(&self, _transcript: &Transcript) -> Result<String, AgentError> {
            tokio::time::sleep(self.delay).await;
            Ok("late reply".to_string())
        }
    }

    struct ScriptedDecider {
        reply: String,
        calls: AtomicUsize,
    }

    impl ScriptedDecider {
        fn arc(reply: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: reply.to_string(),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl SpeakerDecider for ScriptedDecider {
        async fn decide(&self, _prompt: &str) -> Result<String, DeciderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    fn registry(names: &[&str]) -> AgentRegistry {
        AgentRegistry::new(names.iter().map(|n| EchoAgent::arc(n)).collect()).unwrap()
    }

    fn speakers(transcript: &Transcript) -> Vec<&str> {
        transcript
            .all()
            .skip(1) // opening user turn
            .map(|t| t.speaker.as_str())
            .collect()
    }

    #[tokio::test]
    async fn test_fixed_sequence_fidelity() {
        let registry = registry(&["A", "B", "C"]);
        let selection = SelectionStrategy::fixed_sequence(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            registry.roster(),
        )
        .unwrap();
        let use_case = RunChatUseCase::new(registry);

        let input = RunChatInput::new("go", selection)
            .with_params(ChatParams::default().with_max_turns(5));
        let transcript = use_case.execute(input).await.unwrap();

        assert_eq!(speakers(&transcript), vec!["A", "B", "C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_round_robin_covers_all_participants() {
        let registry = registry(&["A", "B", "C"]);
        let use_case = RunChatUseCase::new(registry);

        let input = RunChatInput::new("go", SelectionStrategy::RoundRobin)
            .with_params(ChatParams::default().with_max_turns(6));
        let transcript = use_case.execute(input).await.unwrap();

        assert_eq!(speakers(&transcript), vec!["A", "B", "C", "A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_opening_message_is_first_user_turn() {
        let registry = registry(&["A"]);
        let use_case = RunChatUseCase::new(registry);

        let input = RunChatInput::new("hello agents", SelectionStrategy::RoundRobin)
            .with_params(ChatParams::default().with_max_turns(1));
        let transcript = use_case.execute(input).await.unwrap();

        let first = transcript.all().next().unwrap();
        assert_eq!(first.speaker, USER_SPEAKER);
        assert_eq!(first.content, "hello agents");
    }

    #[tokio::test]
    async fn test_sequences_strictly_increase() {
        let registry = registry(&["A", "B"]);
        let use_case = RunChatUseCase::new(registry);

        let input = RunChatInput::new("go", SelectionStrategy::RoundRobin)
            .with_params(ChatParams::default().with_max_turns(4));
        let transcript = use_case.execute(input).await.unwrap();

        let sequences: Vec<u64> = transcript.all().map(|t| t.sequence).collect();
        for pair in sequences.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(sequences.len(), 5);
    }

    #[tokio::test]
    async fn test_lead_directed_single_decider_call() {
        let registry = registry(&["X", "Y", "Z"]);
        let decider = ScriptedDecider::arc("X, Y");
        let selection = SelectionStrategy::LeadDirected(decider.clone());
        let use_case = RunChatUseCase::new(registry);

        let input = RunChatInput::new("go", selection)
            .with_params(ChatParams::default().with_max_turns(4));
        let transcript = use_case.execute(input).await.unwrap();

        assert_eq!(speakers(&transcript), vec!["X", "Y", "X", "Y"]);
        assert_eq!(decider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_mid_batch_cap_is_honored() {
        let registry = registry(&["X", "Y"]);
        let decider = ScriptedDecider::arc("X, Y");
        let selection = SelectionStrategy::LeadDirected(decider);
        let use_case = RunChatUseCase::new(registry);

        let input =
            RunChatInput::new("go", selection).with_params(ChatParams::default().with_max_turns(1));
        let transcript = use_case.execute(input).await.unwrap();

        // Cap of one stops inside the two-name batch
        assert_eq!(speakers(&transcript), vec!["X"]);
    }

    #[tokio::test]
    async fn test_malformed_decision_falls_back_to_roster() {
        let registry = registry(&["A", "B"]);
        let decider = ScriptedDecider::arc("");
        let selection = SelectionStrategy::LeadDirected(decider);
        let use_case = RunChatUseCase::new(registry);

        let input =
            RunChatInput::new("go", selection).with_params(ChatParams::default().with_max_turns(2));
        let transcript = use_case.execute(input).await.unwrap();

        assert_eq!(speakers(&transcript), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_invocation_failure_is_isolated() {
        let registry = AgentRegistry::new(vec![
            EchoAgent::arc("A"),
            Arc::new(FailingAgent {
                name: "B".to_string(),
            }),
            EchoAgent::arc("C"),
        ])
        .unwrap();
        let use_case = RunChatUseCase::new(registry);

        let input = RunChatInput::new("go", SelectionStrategy::RoundRobin)
            .with_params(ChatParams::default().with_max_turns(3));
        let transcript = use_case.execute(input).await.unwrap();

        assert_eq!(speakers(&transcript), vec!["A", "B", "C"]);

        let failed: Vec<&str> = transcript
            .all()
            .filter(|t| t.is_error())
            .map(|t| t.speaker.as_str())
            .collect();
        assert_eq!(failed, vec!["B"]);
        let error_turn = transcript.all().find(|t| t.is_error()).unwrap();
        assert!(error_turn.content.contains("stub backend down"));
    }

    #[tokio::test]
    async fn test_timeout_becomes_error_turn() {
        let registry = AgentRegistry::new(vec![Arc::new(SlowAgent {
            name: "Slow".to_string(),
            delay: Duration::from_millis(200),
        })])
        .unwrap();
        let use_case = RunChatUseCase::new(registry);

        let params = ChatParams::default()
            .with_max_turns(1)
            .with_turn_timeout(Some(Duration::from_millis(5)));
        let input = RunChatInput::new("go", SelectionStrategy::RoundRobin).with_params(params);
        let transcript = use_case.execute(input).await.unwrap();

        let turn = transcript.last().unwrap();
        assert!(turn.is_error());
        assert!(turn.content.contains("timed out"));
    }

    #[tokio::test]
    async fn test_cancellation_aborts_run() {
        let registry = registry(&["A"]);
        let use_case = RunChatUseCase::new(registry);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let input = RunChatInput::new("go", SelectionStrategy::RoundRobin);
        let result = use_case.execute_with_cancellation(input, cancel).await;

        assert!(matches!(result, Err(RunChatError::Cancelled)));
    }

    #[tokio::test]
    async fn test_custom_termination_substitutes() {
        struct AfterFirstReply;

        impl TerminationStrategy for AfterFirstReply {
            fn is_done(&self, transcript: &Transcript, _iteration_count: usize) -> bool {
                transcript.len() > 1
            }
        }

        let registry = registry(&["A", "B"]);
        let use_case = RunChatUseCase::new(registry);

        let input = RunChatInput::new("go", SelectionStrategy::RoundRobin)
            .with_params(ChatParams::default().with_max_turns(100))
            .with_termination(Box::new(AfterFirstReply));
        let transcript = use_case.execute(input).await.unwrap();

        assert_eq!(speakers(&transcript), vec!["A"]);
    }
}
