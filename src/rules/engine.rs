//! Engine trait for the minigames.
//!
//! Each game implements `PuzzleEngine` so hosts can drive any of them:
//! - Taps arrive as grid positions
//! - Engines answer with the events they produced
//! - Deferred callbacks come back through `on_mismatch_timeout`

use crate::core::{EngineEvents, GameConfig, GameSession, MismatchToken};

/// Engine trait.
///
/// ## Implementation Notes
///
/// - `tap`: ordinary mis-taps are no-ops that return no events
/// - `reset`: must invalidate any outstanding deferred callback
/// - Engines never own a timer; hosts schedule callbacks from events
pub trait PuzzleEngine {
    /// Get the configuration this engine was built from.
    fn config(&self) -> &GameConfig;

    /// Get the current session (moves, timer flag, outcome).
    fn session(&self) -> &GameSession;

    /// Handle a tap on a grid position.
    fn tap(&mut self, position: usize) -> EngineEvents;

    /// Start a fresh round with the same configuration.
    fn reset(&mut self) -> EngineEvents;

    /// Deliver a deferred mismatch callback.
    ///
    /// Engines that never schedule one ignore it.
    fn on_mismatch_timeout(&mut self, _token: MismatchToken) -> EngineEvents {
        EngineEvents::new()
    }

    // === Convenience Methods ===

    /// Number of tappable positions.
    fn cell_count(&self) -> usize {
        self.config().cell_count()
    }

    /// Moves counted so far this round.
    fn move_count(&self) -> u32 {
        self.session().move_count()
    }

    /// Check if the round has been won.
    fn is_won(&self) -> bool {
        self.session().is_won()
    }
}
