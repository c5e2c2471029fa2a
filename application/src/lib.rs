//! Application layer for colloquy
//!
//! This crate contains the use cases, port definitions, and loop-control
//! configuration for running multi-agent group chats. It depends only on the
//! domain layer.

pub mod config;
pub mod ports;
pub mod registry;
pub mod use_cases;

// Re-export commonly used types
pub use config::ChatParams;
pub use ports::{
    agent::{Agent, AgentError},
    observer::{NoObserver, TurnObserver},
};
pub use registry::AgentRegistry;
pub use use_cases::run_chat::{RunChatError, RunChatInput, RunChatUseCase};
pub use use_cases::run_probe::{RunProbeError, RunProbeInput, RunProbeUseCase};
