//! Game implementations.
//!
//! `AnyGame` lets the menu layer start whichever game a
//! [`GameSelection`](crate::core::GameSelection) names without knowing the
//! concrete engine type.

pub mod memory;
pub mod sliding;

pub use memory::MemoryMatchEngine;
pub use sliding::SlidingPuzzleEngine;

use crate::core::{EngineEvents, GameConfig, GameKind, GameSession, MismatchToken, Result};
use crate::rules::PuzzleEngine;

/// Either engine, chosen at runtime.
#[derive(Clone, Debug)]
pub enum AnyGame {
    Memory(MemoryMatchEngine),
    Sliding(SlidingPuzzleEngine),
}

impl AnyGame {
    /// Build the engine for `config.kind()`.
    pub fn launch(config: GameConfig) -> Result<Self> {
        match config.kind() {
            GameKind::Memory => MemoryMatchEngine::new(config).map(AnyGame::Memory),
            GameKind::Slide => SlidingPuzzleEngine::new(config).map(AnyGame::Sliding),
        }
    }

    /// The memory engine, if that is the running game.
    #[must_use]
    pub fn as_memory(&self) -> Option<&MemoryMatchEngine> {
        match self {
            AnyGame::Memory(engine) => Some(engine),
            AnyGame::Sliding(_) => None,
        }
    }

    /// The sliding engine, if that is the running game.
    #[must_use]
    pub fn as_sliding(&self) -> Option<&SlidingPuzzleEngine> {
        match self {
            AnyGame::Sliding(engine) => Some(engine),
            AnyGame::Memory(_) => None,
        }
    }

    fn engine(&self) -> &dyn PuzzleEngine {
        match self {
            AnyGame::Memory(engine) => engine,
            AnyGame::Sliding(engine) => engine,
        }
    }

    fn engine_mut(&mut self) -> &mut dyn PuzzleEngine {
        match self {
            AnyGame::Memory(engine) => engine,
            AnyGame::Sliding(engine) => engine,
        }
    }
}

impl From<MemoryMatchEngine> for AnyGame {
    fn from(engine: MemoryMatchEngine) -> Self {
        AnyGame::Memory(engine)
    }
}

impl From<SlidingPuzzleEngine> for AnyGame {
    fn from(engine: SlidingPuzzleEngine) -> Self {
        AnyGame::Sliding(engine)
    }
}

impl PuzzleEngine for AnyGame {
    fn config(&self) -> &GameConfig {
        self.engine().config()
    }

    fn session(&self) -> &GameSession {
        self.engine().session()
    }

    fn tap(&mut self, position: usize) -> EngineEvents {
        self.engine_mut().tap(position)
    }

    fn reset(&mut self) -> EngineEvents {
        self.engine_mut().reset()
    }

    fn on_mismatch_timeout(&mut self, token: MismatchToken) -> EngineEvents {
        self.engine_mut().on_mismatch_timeout(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, GameSelection};

    #[test]
    fn test_launch_matches_selection() {
        let memory = AnyGame::launch(GameSelection::parse("MEMORY", "EASY").unwrap().config())
            .unwrap();
        assert!(memory.as_memory().is_some());
        assert_eq!(memory.cell_count(), 16);

        let sliding = AnyGame::launch(GameConfig::for_difficulty(Difficulty::FourByFour)).unwrap();
        assert!(sliding.as_sliding().is_some());
        assert_eq!(sliding.config().grid_size(), 4);
        assert_eq!(sliding.move_count(), 0);
    }

    #[test]
    fn test_dispatch_tap() {
        let mut game = AnyGame::launch(GameConfig::memory(4).unwrap().with_seed(1)).unwrap();
        assert!(!game.tap(0).is_empty());
        assert_eq!(game.as_memory().unwrap().selected(), Some(0));
    }
}
