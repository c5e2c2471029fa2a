//! LLM-backed speaker decider

use crate::openai::client::ChatClient;
use crate::openai::types::ChatMessage;
use async_trait::async_trait;
use colloquy_domain::{DeciderError, PromptTemplate, SpeakerDecider};
use tracing::warn;

/// Speaker decider backed by a chat-completions model
///
/// Used by lead-directed selection to obtain a speaking plan. A failed call
/// is logged here; selection falls back to the full roster.
pub struct LlmSpeakerDecider {
    client: ChatClient,
}

impl LlmSpeakerDecider {
    pub fn new(client: ChatClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpeakerDecider for LlmSpeakerDecider {
    async fn decide(&self, prompt: &str) -> Result<String, DeciderError> {
        let messages = vec![
            ChatMessage::system(PromptTemplate::lead_selection_system()),
            ChatMessage::user(prompt),
        ];
        self.client.complete(messages).await.map_err(|e| {
            warn!(error = %e, "speaker decider call failed, falling back to full roster");
            DeciderError::new(e.to_string())
        })
    }
}
