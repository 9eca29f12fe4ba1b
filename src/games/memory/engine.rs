//! Memory match engine.

use smallvec::smallvec;
use tracing::{debug, info, instrument, trace};

use super::card::{Card, CardState, Deck};
use crate::core::{
    EngineEvents, GameConfig, GameEvent, GameKind, GameRng, GameSession, MismatchToken,
    PuzzleError, Result,
};
use crate::rules::PuzzleEngine;

/// Two face-up cards waiting to flip back.
///
/// While one of these exists the engine is in the comparing lock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingMismatch {
    token: MismatchToken,
    first: usize,
    second: usize,
}

/// One round of memory match on a 4×4 or 6×6 grid.
///
/// The engine never sleeps. A mismatch emits
/// [`GameEvent::MismatchPending`]; the host delivers the token back through
/// [`PuzzleEngine::on_mismatch_timeout`] after the delay, and every tap in
/// between is ignored.
#[derive(Clone, Debug)]
pub struct MemoryMatchEngine {
    config: GameConfig,
    rng: GameRng,
    deck: Deck,
    session: GameSession,
    /// First face-up card of the pair in progress.
    selected: Option<usize>,
    pending: Option<PendingMismatch>,
    matched_pairs: usize,
    next_token: u64,
}

impl MemoryMatchEngine {
    /// Create an engine, seeding from the config or OS entropy.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = GameRng::from_seed_or_entropy(config.seed());
        Self::with_rng(config, rng)
    }

    /// Create an engine with an explicit RNG.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self> {
        config.validate()?;
        if config.kind() != GameKind::Memory {
            return Err(PuzzleError::WrongGameKind {
                expected: GameKind::Memory,
                actual: config.kind(),
            });
        }

        let deck = Deck::deal(config.grid_size(), &mut rng)?;
        debug!(grid_size = config.grid_size(), seed = rng.seed(), "dealt memory deck");
        Ok(Self {
            config,
            rng,
            deck,
            session: GameSession::new(),
            selected: None,
            pending: None,
            matched_pairs: 0,
            next_token: 0,
        })
    }

    /// Current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Card at a grid position.
    #[must_use]
    pub fn card(&self, position: usize) -> Option<&Card> {
        self.deck.get(position)
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs needed to win.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.deck.pair_count()
    }

    /// Position of the first card of the pair in progress.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Check if input is locked waiting for a mismatch to resolve.
    #[must_use]
    pub fn is_comparing(&self) -> bool {
        self.pending.is_some()
    }

    /// Token of the outstanding mismatch, if any.
    #[must_use]
    pub fn pending_mismatch(&self) -> Option<MismatchToken> {
        self.pending.map(|p| p.token)
    }

    fn next_token(&mut self) -> MismatchToken {
        self.next_token += 1;
        MismatchToken(self.next_token)
    }

    /// Compare the selected card with the one just turned up.
    fn compare(&mut self, first: usize, second: usize, events: &mut EngineEvents) {
        let moves = self.session.record_move(events);

        let (Some(a), Some(b)) = (self.deck.get(first), self.deck.get(second)) else {
            return;
        };

        if a.symbol == b.symbol {
            self.deck.set_state(first, CardState::Matched);
            self.deck.set_state(second, CardState::Matched);
            self.matched_pairs += 1;
            events.push(GameEvent::CardsChanged {
                positions: smallvec![first, second],
            });
            debug!(first, second, moves, matched = self.matched_pairs, "pair matched");

            // Win is only possible right after a match.
            if self.matched_pairs == self.total_pairs() && self.session.mark_won(events) {
                info!(moves, "memory match won");
            }
        } else {
            let token = self.next_token();
            self.pending = Some(PendingMismatch {
                token,
                first,
                second,
            });
            events.push(GameEvent::MismatchPending {
                token,
                delay_ms: self.config.mismatch_delay_ms(),
            });
            debug!(first, second, moves, %token, "pair mismatched");
        }
    }
}

impl PuzzleEngine for MemoryMatchEngine {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn session(&self) -> &GameSession {
        &self.session
    }

    #[instrument(level = "trace", skip(self))]
    fn tap(&mut self, position: usize) -> EngineEvents {
        let mut events = EngineEvents::new();

        if self.pending.is_some() {
            trace!("tap ignored while comparing");
            return events;
        }
        match self.deck.get(position) {
            Some(card) if card.is_face_down() => {}
            Some(_) => {
                trace!("tap ignored on face-up or matched card");
                return events;
            }
            None => {
                trace!("tap ignored out of range");
                return events;
            }
        }

        self.deck.set_state(position, CardState::FaceUp);
        events.push(GameEvent::CardsChanged {
            positions: smallvec![position],
        });

        match self.selected.take() {
            None => self.selected = Some(position),
            Some(first) => self.compare(first, position, &mut events),
        }
        events
    }

    #[instrument(level = "debug", skip(self))]
    fn on_mismatch_timeout(&mut self, token: MismatchToken) -> EngineEvents {
        let mut events = EngineEvents::new();

        let Some(pending) = self.pending.filter(|p| p.token == token) else {
            trace!("stale mismatch callback ignored");
            return events;
        };

        self.deck.set_state(pending.first, CardState::FaceDown);
        self.deck.set_state(pending.second, CardState::FaceDown);
        self.pending = None;
        events.push(GameEvent::CardsChanged {
            positions: smallvec![pending.first, pending.second],
        });
        events.push(GameEvent::MismatchResolved { token });
        events
    }

    #[instrument(level = "debug", skip(self))]
    fn reset(&mut self) -> EngineEvents {
        if let Some(pending) = self.pending.take() {
            debug!(token = %pending.token, "cancelled pending mismatch");
        }
        self.deck.reshuffle(&mut self.rng);
        self.session = GameSession::new();
        self.selected = None;
        self.matched_pairs = 0;
        info!(grid_size = self.config.grid_size(), "memory match reset");

        let mut events = EngineEvents::new();
        events.push(GameEvent::Reset);
        events
    }
}
