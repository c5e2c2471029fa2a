//! Chat-completion-backed agent

use crate::openai::client::ChatClient;
use crate::openai::types::ChatMessage;
use async_trait::async_trait;
use colloquy_application::{Agent, AgentError};
use colloquy_domain::Transcript;

/// A participant backed by a chat-completions model
///
/// Carries its own instruction string. On each invocation the transcript is
/// replayed as a message list: this agent's past turns become `assistant`
/// messages, every other turn becomes attributed user content, and error
/// turns are skipped.
pub struct ChatCompletionAgent {
    name: String,
    instructions: String,
    client: ChatClient,
}

impl ChatCompletionAgent {
    pub fn new(
        name: impl Into<String>,
        instructions: impl Into<String>,
        client: ChatClient,
    ) -> Self {
        Self {
            name: name.into(),
            instructions: instructions.into(),
            client,
        }
    }

    fn messages_for(&self, transcript: &Transcript) -> Vec<ChatMessage> {
        let mut messages = vec![ChatMessage::system(&self.instructions)];
        for turn in transcript.all() {
            if turn.is_error() {
                continue;
            }
            if turn.speaker == self.name {
                messages.push(ChatMessage::assistant(&turn.content));
            } else {
                messages.push(ChatMessage::user(format!(
                    "{}: {}",
                    turn.speaker, turn.content
                )));
            }
        }
        messages
    }
}

#[async_trait]
impl Agent for ChatCompletionAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn invoke(&self, transcript: &Transcript) -> Result<String, AgentError> {
        let messages = self.messages_for(transcript);
        self.client
            .complete(messages)
            .await
            .map_err(|e| AgentError::RequestFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::types::Role;

    fn agent() -> ChatCompletionAgent {
        let client = ChatClient::new("https://api.example.com/v1", "key", "gpt-4o-mini");
        ChatCompletionAgent::new("Analyst", "You analyze things.", client)
    }

    #[test]
    fn test_transcript_maps_to_message_list() {
        let mut transcript = Transcript::new();
        transcript.append("user", "what happened?");
        transcript.append("Analyst", "numbers are up");
        transcript.append("Advisor", "ship it");

        let messages = agent().messages_for(&transcript);

        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[0].content, "You analyze things.");
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(messages[1].content, "user: what happened?");
        // Own turns replay as assistant messages
        assert_eq!(messages[2].role, Role::Assistant);
        assert_eq!(messages[2].content, "numbers are up");
        // Other participants stay attributed user content
        assert_eq!(messages[3].role, Role::User);
        assert_eq!(messages[3].content, "Advisor: ship it");
    }

    #[test]
    fn test_error_turns_are_skipped() {
        let mut transcript = Transcript::new();
        transcript.append("user", "hello");
        transcript.append_error("Advisor", "backend unavailable");

        let messages = agent().messages_for(&transcript);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].content, "user: hello");
    }
}
