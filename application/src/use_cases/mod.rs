//! Use cases

pub mod run_chat;
pub mod run_probe;
mod shared;
