//! # puzzle-hub
//!
//! Engines for two puzzle minigames plus the host plumbing around them.
//!
//! ## Design Principles
//!
//! 1. **Pure Engines**: Engines are synchronous state machines. They never
//!    sleep, own timers, touch storage or render anything.
//!
//! 2. **Events Out, Taps In**: Hosts send grid positions; engines answer
//!    with the events the tap produced.
//!
//! 3. **Configuration Over Subclassing**: One engine type per game,
//!    parameterised by `GameConfig` (grid size and difficulty label).
//!
//! ## Architecture
//!
//! - **Solvable Shuffles**: Sliding boards are shuffled by random legal
//!   moves from the solved state, never by permuting tiles.
//!
//! - **Cancellable Callbacks**: The memory flip-back delay is a host task
//!   carrying a token; resets cancel it and engines reject stale tokens.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, session state, events, errors
//! - `rules`: `PuzzleEngine` trait
//! - `games`: Memory match and sliding puzzle engines
//! - `host`: Clock, deferred-task scheduler, `GameHost`
//! - `scores`: Finished-game records and score storage

pub mod core;
pub mod rules;
pub mod games;
pub mod host;
pub mod scores;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GameConfig, GameKind, GameSelection,
    GameRng,
    EngineEvents, GameEvent, MismatchToken,
    GameOutcome, GameSession,
    PuzzleError, Result,
};

pub use crate::rules::PuzzleEngine;

pub use crate::games::{AnyGame, MemoryMatchEngine, SlidingPuzzleEngine};
pub use crate::games::memory::{Card, CardState, Deck, SymbolId};
pub use crate::games::sliding::Board;

pub use crate::host::{GameClock, GameHost, Scheduler, TaskId};

pub use crate::scores::{GameRecord, InMemoryScoreStore, ScoreStore};
