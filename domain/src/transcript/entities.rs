//! Transcript domain entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Speaker name used for the caller-supplied opening message
pub const USER_SPEAKER: &str = "user";

/// Content prefix marking a turn that records a failed invocation
pub const ERROR_MARKER: &str = "[error]";

/// One attributed contribution to a conversation (Entity)
///
/// Created once at append time and immutable thereafter. The sequence number
/// is assigned by the owning [`Transcript`], never by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: String,
    pub content: String,
    pub sequence: u64,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Whether this turn records a failed invocation rather than a reply
    pub fn is_error(&self) -> bool {
        self.content.starts_with(ERROR_MARKER)
    }
}

/// Ordered, append-only history of turns for one run (Entity)
///
/// Insertion order is conversation order. Owned by a single run; never
/// shared across concurrent runs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Append a turn, assigning the next sequence number, and return the
    /// stored record.
    pub fn append(&mut self, speaker: impl Into<String>, content: impl Into<String>) -> &Turn {
        let turn = Turn {
            speaker: speaker.into(),
            content: content.into(),
            sequence: self.turns.len() as u64,
            timestamp: Utc::now(),
        };
        self.turns.push(turn);
        &self.turns[self.turns.len() - 1]
    }

    /// Record a failed invocation as a visible, attributed turn.
    pub fn append_error(
        &mut self,
        speaker: impl Into<String>,
        message: impl std::fmt::Display,
    ) -> &Turn {
        self.append(speaker, format!("{ERROR_MARKER} {message}"))
    }

    /// All turns in append order. The view restarts on every call; reading
    /// it consumes nothing.
    pub fn all(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Plain-text rendering used for the lead-selection decision prompt.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for turn in &self.turns {
            out.push_str(&turn.speaker);
            out.push_str(": ");
            out.push_str(&turn.content);
            out.push('\n');
        }
        out
    }
}
