//! Core types: configuration, RNG, session state, engine events, errors.
//!
//! Everything here is shared by both games and has no knowledge of cards
//! or tiles.

pub mod config;
pub mod error;
pub mod event;
pub mod rng;
pub mod session;

pub use config::{
    Difficulty, GameConfig, GameKind, GameSelection, DEFAULT_MISMATCH_DELAY_MS, MEMORY_GRID_SIZES,
    SLIDING_GRID_SIZES,
};
pub use error::{PuzzleError, Result};
pub use event::{EngineEvents, GameEvent, MismatchToken};
pub use rng::GameRng;
pub use session::{GameOutcome, GameSession};
