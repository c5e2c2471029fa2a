//! Turn observer port

use colloquy_domain::Turn;

/// Callback for observing turns as they are appended during a run
pub trait TurnObserver: Send + Sync {
    fn on_turn(&self, turn: &Turn);
}

/// No-op observer
pub struct NoObserver;

impl TurnObserver for NoObserver {
    fn on_turn(&self, _turn: &Turn) {}
}
