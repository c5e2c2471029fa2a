//! Presentation layer for colloquy
//!
//! CLI argument definitions, console transcript formatting, and the live
//! console observer.

pub mod cli;
pub mod observer;
pub mod output;

pub use cli::{Cli, OutputFormat};
pub use observer::ConsoleObserver;
pub use output::console::ConsoleFormatter;
