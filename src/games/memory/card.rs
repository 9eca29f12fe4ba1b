//! Cards and decks for memory match.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, PuzzleError, Result};

/// Number of distinct card faces available.
///
/// Enough for the largest (6×6) board.
pub const SYMBOL_PALETTE_SIZE: u8 = 18;

/// Identifier of a card face. Each symbol in a deck appears exactly twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u8);

/// Visible state of one card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardState {
    #[default]
    FaceDown,
    FaceUp,
    /// Terminal; matched cards never flip back.
    Matched,
}

/// A card at a fixed grid position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub position: usize,
    pub symbol: SymbolId,
    pub state: CardState,
}

impl Card {
    /// Check if the card can still be turned up.
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        self.state == CardState::FaceDown
    }
}

/// A shuffled deck of paired cards, laid out row-major on the grid.
///
/// Membership is fixed once dealt; only card states and order change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal `grid_size²` cards: `grid_size²/2` symbols, each twice, in a
    /// uniformly random order. All cards start face down.
    ///
    /// Fails unless the grid has an even, non-zero cell count and needs at
    /// most [`SYMBOL_PALETTE_SIZE`] symbols.
    pub fn deal(grid_size: usize, rng: &mut GameRng) -> Result<Self> {
        let invalid = |reason: &str| PuzzleError::InvalidDeck {
            grid_size,
            reason: reason.to_string(),
        };
        let cells = grid_size
            .checked_mul(grid_size)
            .ok_or_else(|| invalid("too many cells"))?;
        if cells == 0 || cells % 2 != 0 {
            return Err(invalid("cell count must be even and non-zero"));
        }
        let pairs = u8::try_from(cells / 2)
            .ok()
            .filter(|&pairs| pairs <= SYMBOL_PALETTE_SIZE)
            .ok_or_else(|| invalid("not enough symbols"))?;

        let cards = (0..pairs)
            .flat_map(|i| [SymbolId(i), SymbolId(i)])
            .enumerate()
            .map(|(position, symbol)| Card {
                position,
                symbol,
                state: CardState::FaceDown,
            })
            .collect();
        let mut deck = Self { cards };
        deck.reshuffle(rng);
        Ok(deck)
    }

    /// Shuffle the same symbols into a new layout, all face down.
    pub fn reshuffle(&mut self, rng: &mut GameRng) {
        let mut symbols: Vec<SymbolId> = self.cards.iter().map(|c| c.symbol).collect();
        rng.shuffle(&mut symbols);
        for (card, symbol) in self.cards.iter_mut().zip(symbols) {
            card.symbol = symbol;
            card.state = CardState::FaceDown;
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Card at a grid position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Cards in grid order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Count cards in a given state.
    #[must_use]
    pub fn count_in_state(&self, state: CardState) -> usize {
        self.cards.iter().filter(|c| c.state == state).count()
    }

    /// Positions holding `symbol`, in grid order.
    #[must_use]
    pub fn positions_of(&self, symbol: SymbolId) -> Vec<usize> {
        self.cards
            .iter()
            .filter(|c| c.symbol == symbol)
            .map(|c| c.position)
            .collect()
    }

    pub(crate) fn set_state(&mut self, position: usize, state: CardState) {
        if let Some(card) = self.cards.get_mut(position) {
            card.state = state;
        }
    }
}
