//! Participant roster value object

use crate::core::error::ConfigurationError;
use serde::{Deserialize, Serialize};

/// Ordered list of unique participant names (Value Object)
///
/// Registration order is semantically meaningful: round-robin cycles in this
/// order and the lead-selection fallback replays it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster, rejecting empty lists and duplicate names.
    pub fn new(names: Vec<String>) -> Result<Self, ConfigurationError> {
        if names.is_empty() {
            return Err(ConfigurationError::EmptyRoster);
        }
        for (i, name) in names.iter().enumerate() {
            if names[..i].contains(name) {
                return Err(ConfigurationError::DuplicateName(name.clone()));
            }
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}
