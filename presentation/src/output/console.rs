//! Console output formatter for transcripts

use colloquy_domain::{Transcript, Turn, USER_SPEAKER};
use colored::Colorize;

/// Formats transcripts for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete transcript, one block per turn.
    pub fn format(transcript: &Transcript) -> String {
        let mut output = String::new();
        for turn in transcript.all() {
            output.push_str(&Self::format_turn(turn));
            output.push('\n');
        }
        output
    }

    /// Format a single turn with a colored speaker header.
    pub fn format_turn(turn: &Turn) -> String {
        let header = if turn.speaker == USER_SPEAKER {
            format!("── {} ──", turn.speaker).cyan().bold()
        } else if turn.is_error() {
            format!("── {} ──", turn.speaker).red().bold()
        } else {
            format!("── {} ──", turn.speaker).yellow().bold()
        };
        format!("{}\n{}\n", header, turn.content)
    }

    /// Format as JSON
    pub fn format_json(transcript: &Transcript) -> String {
        serde_json::to_string_pretty(transcript).unwrap_or_else(|_| "{}".to_string())
    }
}
