//! Sliding number puzzle.
//!
//! - A 3×3 or 4×4 grid of numbered tiles with one empty cell
//! - Tap a tile next to the empty cell to slide it in; each slide is a move
//! - Boards are shuffled by random legal moves, so they are always solvable
//! - Solved when the tiles read `1, 2, ..., N²-1` with the empty cell last

mod board;
mod engine;

pub use board::{neighbors, undo_path, Board, EMPTY, MAX_CELLS};
pub use engine::SlidingPuzzleEngine;
