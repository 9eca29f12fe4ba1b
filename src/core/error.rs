//! Crate error type.
//!
//! Ordinary mis-taps are never errors: engines treat them as no-ops. Errors
//! are reserved for caller contract violations (bad grid sizes, malformed
//! boards) and collaborator failures such as the score store.

use derive_more::{Display, Error};

use super::config::GameKind;

/// Errors produced by configuration, board construction and score storage.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum PuzzleError {
    /// Grid size not supported by the game kind.
    #[display("grid size {size} is not supported for {kind} (expected one of {expected:?})")]
    InvalidGridSize {
        kind: GameKind,
        size: usize,
        expected: &'static [usize],
    },

    /// Engine built from a config for another game.
    #[display("engine for {expected} cannot run a {actual} configuration")]
    WrongGameKind { expected: GameKind, actual: GameKind },

    /// Unrecognised game type label.
    #[display("unknown game type {value:?}")]
    UnknownGameKind { value: String },

    /// Unrecognised difficulty label.
    #[display("unknown difficulty {value:?}")]
    UnknownDifficulty { value: String },

    /// Difficulty label belongs to the other game.
    #[display("difficulty {difficulty} is not available for {kind}")]
    DifficultyMismatch { kind: GameKind, difficulty: String },

    /// Tile layout is not a permutation of `0..N²`.
    #[display("invalid board: {reason}")]
    InvalidBoard { reason: String },

    /// Grid that cannot be dealt as a deck of pairs.
    #[display("cannot deal a {grid_size}x{grid_size} memory deck: {reason}")]
    InvalidDeck { grid_size: usize, reason: String },

    /// Score store failure.
    #[display("score storage error: {message}")]
    Storage { message: String },
}

impl PuzzleError {
    /// Build an `InvalidBoard` error.
    pub fn invalid_board(reason: impl Into<String>) -> Self {
        Self::InvalidBoard {
            reason: reason.into(),
        }
    }

    /// Build a `Storage` error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl From<bincode::Error> for PuzzleError {
    fn from(err: bincode::Error) -> Self {
        Self::storage(err.to_string())
    }
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, PuzzleError>;
