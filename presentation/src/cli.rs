//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final transcript
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// No final dump (the conversation streams live unless --quiet)
    None,
    /// Full formatted transcript
    Full,
    /// JSON transcript
    Json,
}

/// CLI arguments for colloquy
#[derive(Parser, Debug)]
#[command(name = "colloquy")]
#[command(author, version, about = "Multi-agent group chat - specialists take turns on one conversation")]
#[command(long_about = r#"
Colloquy runs a group chat between configured agents. A selection strategy
decides who speaks next, every reply lands in a shared transcript, and the
run stops at the configured turn cap.

Strategies:
  round-robin     Cycle through participants in registration order
  sequence        Follow the workflow given by --sequence (or config)
  lead-directed   Ask the model once for a speaking plan, then replay it

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./colloquy.toml     Project-level config
3. ~/.config/colloquy/config.toml   Global config

Example:
  colloquy "How should we plan next quarter's planting schedule?"
  colloquy --strategy sequence --sequence DataAnalyst,BusinessAdvisor "Review the numbers"
  colloquy --probe DataAnalyst "Show me total sales by region"
"#)]
pub struct Cli {
    /// Opening message for the conversation
    pub message: Option<String>,

    /// Turn-selection strategy (round-robin, sequence, lead-directed)
    #[arg(short, long, value_name = "STRATEGY")]
    pub strategy: Option<String>,

    /// Workflow order for the sequence strategy (comma-separated names)
    #[arg(long, value_name = "NAMES")]
    pub sequence: Option<String>,

    /// Invoke a single named agent once and exit
    #[arg(long, value_name = "AGENT")]
    pub probe: Option<String>,

    /// Maximum number of agent turns
    #[arg(long, value_name = "N")]
    pub max_turns: Option<usize>,

    /// Per-invocation timeout in seconds (0 disables)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format printed after the run
    #[arg(short, long, value_enum, default_value = "none")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress live conversation output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
