//! Configuration schema loaded from TOML

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors resolving configuration values
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    MissingApiKey(String),
}

/// Raw configuration from TOML
///
/// # Example
///
/// ```toml
/// [provider]
/// base_url = "https://api.openai.com/v1"
/// api_key_env = "OPENAI_API_KEY"
/// model = "gpt-4o-mini"
///
/// [chat]
/// strategy = "round-robin"            # "round-robin", "sequence", "lead-directed"
/// max_turns = 6
/// turn_timeout_secs = 120
///
/// [[participants]]
/// name = "DataAnalyst"
/// instructions = "You analyze sales data..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub provider: ProviderConfig,
    pub chat: ChatConfig,
    pub participants: Vec<ParticipantConfig>,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            chat: ChatConfig::default(),
            participants: default_participants(),
        }
    }
}

/// `[provider]` section: chat-completions endpoint settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Model identifier sent with every request
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
        }
    }
}

impl ProviderConfig {
    /// Read the API key from the configured environment variable.
    pub fn api_key(&self) -> Result<String, ConfigError> {
        std::env::var(&self.api_key_env)
            .map_err(|_| ConfigError::MissingApiKey(self.api_key_env.clone()))
    }
}

/// Turn-selection strategy choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyChoice {
    RoundRobin,
    Sequence,
    LeadDirected,
}

/// `[chat]` section: run loop settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Turn-selection strategy: "round-robin", "sequence", "lead-directed"
    pub strategy: String,
    /// Workflow order for the "sequence" strategy
    pub sequence: Vec<String>,
    /// Maximum number of agent turns per run
    pub max_turns: usize,
    /// Per-invocation timeout in seconds (0 disables)
    pub turn_timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            strategy: "round-robin".to_string(),
            sequence: Vec::new(),
            max_turns: 6,
            turn_timeout_secs: 120,
        }
    }
}

impl ChatConfig {
    /// Parse the strategy string, returning a warning on unknown values.
    ///
    /// Accepts: "round-robin"/"rr", "sequence"/"fixed", "lead-directed"/"lead"
    pub fn parse_strategy(&self) -> (StrategyChoice, Option<String>) {
        match self.strategy.to_lowercase().as_str() {
            "round-robin" | "rr" => (StrategyChoice::RoundRobin, None),
            "sequence" | "fixed" => (StrategyChoice::Sequence, None),
            "lead-directed" | "lead" => (StrategyChoice::LeadDirected, None),
            other => (
                StrategyChoice::RoundRobin,
                Some(format!(
                    "chat.strategy: unknown value '{other}', falling back to 'round-robin'"
                )),
            ),
        }
    }
}

/// `[[participants]]` entries
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantConfig {
    pub name: String,
    pub instructions: String,
}

/// Built-in demo roster used when no participants are configured
fn default_participants() -> Vec<ParticipantConfig> {
    vec![
        ParticipantConfig {
            name: "DataAnalyst".to_string(),
            instructions: "You are a data analyst. Examine the figures under discussion, \
                           point out patterns and trends, and explain your reasoning. \
                           Stay concise and lead with the most important finding."
                .to_string(),
        },
        ParticipantConfig {
            name: "EnvironmentalExpert".to_string(),
            instructions: "You are an environmental expert. Interpret weather and \
                           environmental conditions relevant to the discussion and spell \
                           out their practical implications. Stay concise."
                .to_string(),
        },
        ParticipantConfig {
            name: "BusinessAdvisor".to_string(),
            instructions: "You are a business advisor. Weigh the analysis the other \
                           participants have contributed, balance opportunities against \
                           risks, and close with clear, actionable recommendations."
                .to_string(),
        },
    ]
}
