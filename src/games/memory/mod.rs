//! Memory match cards.
//!
//! - A 4×4 (easy) or 6×6 (hard) grid of face-down cards, each face twice
//! - Tap two cards: equal faces stay matched, otherwise both flip back
//!   after a delay during which input is locked
//! - One move per compared pair; the round is won when every pair matches

mod card;
mod engine;

pub use card::{Card, CardState, Deck, SymbolId, SYMBOL_PALETTE_SIZE};
pub use engine::MemoryMatchEngine;
