//! Per-round session state shared by both engines.

use serde::{Deserialize, Serialize};

use super::event::{EngineEvents, GameEvent};

/// Outcome of a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[default]
    InProgress,
    /// Terminal until the next reset.
    Won,
}

/// Move counter, timer flag and outcome for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    move_count: u32,
    timer_started: bool,
    result: GameOutcome,
}

impl GameSession {
    /// Fresh session with no moves.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counted moves so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// True once the first move asked the host to start its clock.
    #[must_use]
    pub fn timer_started(&self) -> bool {
        self.timer_started
    }

    /// Current outcome.
    #[must_use]
    pub fn result(&self) -> GameOutcome {
        self.result
    }

    /// Check if the round has been won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.result == GameOutcome::Won
    }

    /// Count one completed move and emit the matching notifications.
    ///
    /// `TimerStartRequested` is emitted only on the 0 -> 1 transition.
    pub fn record_move(&mut self, events: &mut EngineEvents) -> u32 {
        self.move_count += 1;
        events.push(GameEvent::MoveCountChanged {
            moves: self.move_count,
        });
        if self.move_count == 1 && !self.timer_started {
            self.timer_started = true;
            events.push(GameEvent::TimerStartRequested);
        }
        self.move_count
    }

    /// Transition to `Won` and emit the win event.
    ///
    /// Returns false (and emits nothing) if already won.
    pub fn mark_won(&mut self, events: &mut EngineEvents) -> bool {
        if self.is_won() {
            return false;
        }
        self.result = GameOutcome::Won;
        events.push(GameEvent::Won {
            moves: self.move_count,
        });
        true
    }
}
