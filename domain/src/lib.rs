//! Domain layer for colloquy
//!
//! This crate contains the core entities, value objects, and turn-scheduling
//! policies for multi-agent group conversations. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript
//!
//! The append-only history of one conversation run. Every contribution is a
//! [`Turn`](transcript::Turn) with a sequence number assigned at append time.
//!
//! ## Selection
//!
//! A [`SelectionStrategy`](selection::strategy::SelectionStrategy) decides who
//! speaks next. The set of policies is closed: round-robin, a fixed workflow
//! sequence, or a lead-directed plan obtained from an external decider.
//!
//! ## Termination
//!
//! A [`TerminationStrategy`](termination::TerminationStrategy) decides when a
//! run stops; the built-in policy is a hard cap on agent invocations.

pub mod core;
pub mod prompt;
pub mod roster;
pub mod selection;
pub mod termination;
pub mod transcript;

// Re-export commonly used types
pub use core::error::{ConfigurationError, DeciderError, SelectionError};
pub use prompt::PromptTemplate;
pub use roster::Roster;
pub use selection::plan::parse_speaker_plan;
pub use selection::strategy::{SelectionState, SelectionStrategy, SpeakerDecider};
pub use termination::{MaxTurns, TerminationStrategy};
pub use transcript::{ERROR_MARKER, Transcript, Turn, USER_SPEAKER};
