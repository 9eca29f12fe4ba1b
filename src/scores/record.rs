//! Finished-game records.

use serde::{Deserialize, Serialize};

use crate::core::{Difficulty, GameKind, PuzzleError, Result};

/// Format whole seconds as `MM:SS`.
#[must_use]
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// One finished round, as stored in the score history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_type: GameKind,
    pub difficulty: Difficulty,
    pub moves: u32,
    pub time_seconds: u32,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl GameRecord {
    /// Record a finished round.
    #[must_use]
    pub fn new(
        game_type: GameKind,
        difficulty: Difficulty,
        moves: u32,
        time_seconds: u32,
        timestamp: i64,
    ) -> Self {
        Self {
            game_type,
            difficulty,
            moves,
            time_seconds,
            timestamp,
        }
    }

    /// Check that the difficulty belongs to the recorded game.
    pub fn validate(&self) -> Result<()> {
        if self.difficulty.kind() != self.game_type {
            return Err(PuzzleError::DifficultyMismatch {
                kind: self.game_type,
                difficulty: self.difficulty.label().to_string(),
            });
        }
        Ok(())
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_mm_ss(self.time_seconds)
    }

    /// Text offered when sharing a result.
    #[must_use]
    pub fn share_text(&self) -> String {
        format!(
            "I solved {} ({}) in {} with {} moves! 🎉",
            self.game_type.display_name(),
            self.difficulty,
            self.formatted_time(),
            self.moves
        )
    }
}
