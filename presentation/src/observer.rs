//! Live console output for running chats

use crate::output::console::ConsoleFormatter;
use colloquy_application::TurnObserver;
use colloquy_domain::Turn;

/// Prints each turn as soon as it is appended
pub struct ConsoleObserver;

impl TurnObserver for ConsoleObserver {
    fn on_turn(&self, turn: &Turn) {
        println!("{}", ConsoleFormatter::format_turn(turn));
    }
}
