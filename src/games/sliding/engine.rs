//! Sliding puzzle engine.

use tracing::{debug, info, instrument, trace};

use super::board::Board;
use crate::core::{
    EngineEvents, GameConfig, GameEvent, GameKind, GameRng, GameSession, PuzzleError, Result,
};
use crate::rules::PuzzleEngine;

/// One round of the sliding number puzzle on a 3×3 or 4×4 grid.
#[derive(Clone, Debug)]
pub struct SlidingPuzzleEngine {
    config: GameConfig,
    rng: GameRng,
    board: Board,
    session: GameSession,
}

impl SlidingPuzzleEngine {
    /// Create an engine, seeding from the config or OS entropy.
    pub fn new(config: GameConfig) -> Result<Self> {
        let rng = GameRng::from_seed_or_entropy(config.seed());
        Self::with_rng(config, rng)
    }

    /// Create an engine with an explicit RNG and a freshly shuffled board.
    pub fn with_rng(config: GameConfig, mut rng: GameRng) -> Result<Self> {
        Self::check_config(&config)?;
        let mut board = Board::solved(config.grid_size())?;
        Self::scramble(&mut board, &config, &mut rng);
        Ok(Self {
            config,
            rng,
            board,
            session: GameSession::new(),
        })
    }

    /// Resume from a known board position.
    ///
    /// The board must match the configured grid size.
    pub fn with_board(config: GameConfig, board: Board, rng: GameRng) -> Result<Self> {
        Self::check_config(&config)?;
        if board.size() != config.grid_size() {
            return Err(PuzzleError::invalid_board(format!(
                "board is {0}x{0} but the game is {1}x{1}",
                board.size(),
                config.grid_size()
            )));
        }
        Ok(Self {
            config,
            rng,
            board,
            session: GameSession::new(),
        })
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the empty cell.
    #[must_use]
    pub fn empty_position(&self) -> usize {
        self.board.empty_position()
    }

    /// Check if the tiles are in solved order.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    fn check_config(config: &GameConfig) -> Result<()> {
        config.validate()?;
        if config.kind() != GameKind::Slide {
            return Err(PuzzleError::WrongGameKind {
                expected: GameKind::Slide,
                actual: config.kind(),
            });
        }
        Ok(())
    }

    /// Walk a solved board through `shuffle_moves` random legal slides.
    fn scramble(board: &mut Board, config: &GameConfig, rng: &mut GameRng) {
        board.shuffle(config.shuffle_moves(), rng);
        debug!(
            grid_size = config.grid_size(),
            moves = config.shuffle_moves(),
            empty = board.empty_position(),
            "shuffled sliding board"
        );
    }
}

impl PuzzleEngine for SlidingPuzzleEngine {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn session(&self) -> &GameSession {
        &self.session
    }

    #[instrument(level = "trace", skip(self))]
    fn tap(&mut self, position: usize) -> EngineEvents {
        let mut events = EngineEvents::new();

        if self.session.is_won() {
            trace!("tap ignored after win");
            return events;
        }
        let empty = self.board.empty_position();
        if !self.board.slide(position) {
            trace!(empty, "tap ignored on non-adjacent tile");
            return events;
        }

        events.push(GameEvent::TileMoved {
            from: position,
            to: empty,
        });
        let moves = self.session.record_move(&mut events);
        debug!(from = position, to = empty, moves, "tile moved");

        if self.board.is_solved() && self.session.mark_won(&mut events) {
            info!(moves, "sliding puzzle solved");
        }
        events
    }

    #[instrument(level = "debug", skip(self))]
    fn reset(&mut self) -> EngineEvents {
        self.board.restore_solved();
        Self::scramble(&mut self.board, &self.config, &mut self.rng);
        self.session = GameSession::new();
        info!(grid_size = self.config.grid_size(), "sliding puzzle reset");

        let mut events = EngineEvents::new();
        events.push(GameEvent::Reset);
        events
    }
}
