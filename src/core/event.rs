//! Engine-to-host notifications.
//!
//! Every engine call returns the events it produced, in order. Hosts use
//! them to drive the clock, schedule deferred callbacks and refresh the
//! grid; renderers can treat the position lists as redraw hints.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Events produced by a single engine call.
///
/// A tap produces at most a handful of events, so they stay inline.
pub type EngineEvents = SmallVec<[GameEvent; 4]>;

/// Handle identifying one pending mismatch flip-back.
///
/// Every mismatch gets a fresh token. A token whose mismatch was already
/// resolved or cancelled by a reset is stale and ignored by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MismatchToken(pub u64);

impl MismatchToken {
    /// Raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MismatchToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Mismatch({})", self.0)
    }
}

/// Something the host should react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Cards at these positions changed state (flip, match, unflip).
    CardsChanged { positions: SmallVec<[usize; 2]> },

    /// The tile at `from` slid into the empty cell at `to`.
    TileMoved { from: usize, to: usize },

    /// Move counter changed.
    MoveCountChanged { moves: u32 },

    /// First counted move of the session; start the clock.
    TimerStartRequested,

    /// Two cards did not match. Deliver `token` back after `delay_ms`.
    MismatchPending { token: MismatchToken, delay_ms: u64 },

    /// A pending mismatch was resolved and input is accepted again.
    MismatchResolved { token: MismatchToken },

    /// The session was won. The host supplies elapsed time.
    Won { moves: u32 },

    /// A fresh deck or board was dealt.
    Reset,
}

impl GameEvent {
    /// Check if this is the terminal win event.
    #[must_use]
    pub fn is_won(&self) -> bool {
        matches!(self, GameEvent::Won { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_token_display() {
        assert_eq!(MismatchToken(3).to_string(), "Mismatch(3)");
        assert_eq!(MismatchToken(3).raw(), 3);
    }

    #[test]
    fn test_event_serde() {
        let event = GameEvent::CardsChanged {
            positions: smallvec![1, 7],
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
        assert!(!back.is_won());
        assert!(GameEvent::Won { moves: 3 }.is_won());
    }
}
