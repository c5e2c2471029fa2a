//! Agent registry

use crate::ports::agent::Agent;
use colloquy_domain::{ConfigurationError, Roster};
use std::collections::HashMap;
use std::sync::Arc;

/// Mapping from participant name to agent capability
///
/// Built once per run from a caller-supplied list. Names must be unique and
/// the list non-empty; registration order is preserved in the roster.
#[derive(Clone)]
pub struct AgentRegistry {
    roster: Roster,
    agents: HashMap<String, Arc<dyn Agent>>,
}

impl AgentRegistry {
    pub fn new(agents: Vec<Arc<dyn Agent>>) -> Result<Self, ConfigurationError> {
        let names: Vec<String> = agents.iter().map(|a| a.name().to_string()).collect();
        let roster = Roster::new(names)?;
        let agents = agents
            .into_iter()
            .map(|agent| (agent.name().to_string(), agent))
            .collect();
        Ok(Self { roster, agents })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Agent>> {
        self.agents.get(name)
    }

    pub fn len(&self) -> usize {
        self.roster.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::agent::AgentError;
    use async_trait::async_trait;
    use colloquy_domain::Transcript;

    struct StubAgent {
        name: String,
    }

    impl StubAgent {
        fn arc(name: &str) -> Arc<dyn Agent> {
            Arc::new(Self {
                name: name.to_string(),
            })
        }
    }

    #[async_trait]
    impl Agent for StubAgent {
        fn name(&self) -> &str {
            &self.name
        }

        async fn invoke(&self, _transcript: &Transcript) -> Result<String, AgentError> {
            Ok("ok".to_string())
        }
    }

    #[test]
    fn test_registry_preserves_registration_order() {
        let registry =
            AgentRegistry::new(vec![StubAgent::arc("B"), StubAgent::arc("A")]).unwrap();
        assert_eq!(registry.roster().names(), &["B", "A"]);
        assert!(registry.get("A").is_some());
        assert!(registry.get("C").is_none());
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let err = AgentRegistry::new(vec![StubAgent::arc("A"), StubAgent::arc("A")])
            .err()
            .unwrap();
        assert_eq!(err, ConfigurationError::DuplicateName("A".to_string()));
    }

    #[test]
    fn test_registry_rejects_empty_list() {
        let err = AgentRegistry::new(vec![]).err().unwrap();
        assert_eq!(err, ConfigurationError::EmptyRoster);
    }
}
