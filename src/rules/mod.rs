//! Engine trait shared by the minigames.
//!
//! Games implement `PuzzleEngine` to define:
//! - How taps change the grid
//! - When a move counts
//! - When the round is won
//!
//! Hosts call into `PuzzleEngine` but never interpret game-specific state.

pub mod engine;

pub use engine::PuzzleEngine;
