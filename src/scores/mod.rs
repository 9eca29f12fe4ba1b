//! Score history.
//!
//! Finished rounds become `GameRecord`s. Storage sits behind the
//! `ScoreStore` trait so hosts take any backend by injection.

mod record;
mod store;

pub use record::{format_mm_ss, GameRecord};
pub use store::{InMemoryScoreStore, ScoreStore};
