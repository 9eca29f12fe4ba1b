//! Game configuration types.
//!
//! Hosts start a game by choosing a `GameKind` and a `Difficulty`:
//! - `GameKind`: which engine runs (memory match or sliding puzzle)
//! - `Difficulty`: label shown to players, maps to a grid size
//! - `GameConfig`: validated combination plus tuning knobs
//!
//! Both engines take a `GameConfig`; there is one engine type per game,
//! parameterised by grid size, rather than one type per difficulty.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{PuzzleError, Result};

/// Grid sizes accepted by the memory match engine.
pub const MEMORY_GRID_SIZES: &[usize] = &[4, 6];

/// Grid sizes accepted by the sliding puzzle engine.
pub const SLIDING_GRID_SIZES: &[usize] = &[3, 4];

/// Delay before mismatched cards turn back face down.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Which minigame is being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    /// Memory match cards.
    #[serde(rename = "MEMORY")]
    Memory,
    /// Sliding number puzzle.
    #[serde(rename = "SLIDE")]
    Slide,
}

impl GameKind {
    /// Stable label used in score records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GameKind::Memory => "MEMORY",
            GameKind::Slide => "SLIDE",
        }
    }

    /// Human-readable game name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            GameKind::Memory => "Memory Match Cards",
            GameKind::Slide => "Sliding Number Puzzle",
        }
    }

    /// Grid sizes this game supports.
    #[must_use]
    pub const fn grid_sizes(self) -> &'static [usize] {
        match self {
            GameKind::Memory => MEMORY_GRID_SIZES,
            GameKind::Slide => SLIDING_GRID_SIZES,
        }
    }

    /// Difficulties offered for this game, easiest first.
    #[must_use]
    pub const fn difficulties(self) -> [Difficulty; 2] {
        match self {
            GameKind::Memory => [Difficulty::Easy, Difficulty::Hard],
            GameKind::Slide => [Difficulty::ThreeByThree, Difficulty::FourByFour],
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameKind {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MEMORY" => Ok(GameKind::Memory),
            "SLIDE" => Ok(GameKind::Slide),
            other => Err(PuzzleError::UnknownGameKind {
                value: other.to_string(),
            }),
        }
    }
}

/// Difficulty label. Each label belongs to exactly one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Memory match, 4×4 (8 pairs).
    #[serde(rename = "EASY")]
    Easy,
    /// Memory match, 6×6 (18 pairs).
    #[serde(rename = "HARD")]
    Hard,
    /// Sliding puzzle, 3×3 (8 tiles).
    #[serde(rename = "3x3")]
    ThreeByThree,
    /// Sliding puzzle, 4×4 (15 tiles).
    #[serde(rename = "4x4")]
    FourByFour,
}

impl Difficulty {
    /// Label stored with score records.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Hard => "HARD",
            Difficulty::ThreeByThree => "3x3",
            Difficulty::FourByFour => "4x4",
        }
    }

    /// The game this difficulty belongs to.
    #[must_use]
    pub const fn kind(self) -> GameKind {
        match self {
            Difficulty::Easy | Difficulty::Hard => GameKind::Memory,
            Difficulty::ThreeByThree | Difficulty::FourByFour => GameKind::Slide,
        }
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn grid_size(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Hard => 6,
            Difficulty::ThreeByThree => 3,
            Difficulty::FourByFour => 4,
        }
    }

    /// Reverse lookup from a game and grid size.
    #[must_use]
    pub fn for_grid(kind: GameKind, grid_size: usize) -> Option<Self> {
        kind.difficulties()
            .into_iter()
            .find(|d| d.grid_size() == grid_size)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "EASY" => Ok(Difficulty::Easy),
            "HARD" => Ok(Difficulty::Hard),
            "3x3" => Ok(Difficulty::ThreeByThree),
            "4x4" => Ok(Difficulty::FourByFour),
            other => Err(PuzzleError::UnknownDifficulty {
                value: other.to_string(),
            }),
        }
    }
}

/// "Start game with {type, difficulty}" request from the menu layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSelection {
    /// Game to start.
    pub kind: GameKind,
    /// Chosen difficulty.
    pub difficulty: Difficulty,
}

impl GameSelection {
    /// Create a selection, rejecting difficulties from the other game.
    pub fn new(kind: GameKind, difficulty: Difficulty) -> Result<Self> {
        if difficulty.kind() != kind {
            return Err(PuzzleError::DifficultyMismatch {
                kind,
                difficulty: difficulty.label().to_string(),
            });
        }
        Ok(Self { kind, difficulty })
    }

    /// Parse the string labels passed around by the menu layer.
    pub fn parse(kind: &str, difficulty: &str) -> Result<Self> {
        Self::new(kind.parse()?, difficulty.parse()?)
    }

    /// Build the engine configuration for this selection.
    #[must_use]
    pub fn config(self) -> GameConfig {
        GameConfig::for_difficulty(self.difficulty)
    }
}

/// Complete engine configuration.
///
/// Construct through [`GameConfig::new`] or [`GameConfig::for_difficulty`];
/// engines re-validate on construction so a hand-edited or deserialized
/// config with an unsupported grid size is still rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    kind: GameKind,
    grid_size: usize,
    difficulty: Difficulty,
    /// Random legal moves applied when shuffling a sliding board.
    shuffle_moves: usize,
    /// Mismatch flip-back delay in milliseconds.
    mismatch_delay_ms: u64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration for a game and grid size.
    ///
    /// Fails fast on grid sizes the game does not support.
    pub fn new(kind: GameKind, grid_size: usize) -> Result<Self> {
        let difficulty =
            Difficulty::for_grid(kind, grid_size).ok_or(PuzzleError::InvalidGridSize {
                kind,
                size: grid_size,
                expected: kind.grid_sizes(),
            })?;
        Ok(Self::for_difficulty(difficulty))
    }

    /// Memory match configuration (grid size 4 or 6).
    pub fn memory(grid_size: usize) -> Result<Self> {
        Self::new(GameKind::Memory, grid_size)
    }

    /// Sliding puzzle configuration (grid size 3 or 4).
    pub fn sliding(grid_size: usize) -> Result<Self> {
        Self::new(GameKind::Slide, grid_size)
    }

    /// Configuration for a difficulty label. Always valid.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let grid_size = difficulty.grid_size();
        Self {
            kind: difficulty.kind(),
            grid_size,
            difficulty,
            shuffle_moves: default_shuffle_moves(grid_size),
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            seed: None,
        }
    }

    /// Use a fixed seed for reproducible decks and shuffles.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Override the number of shuffle moves for sliding boards.
    #[must_use]
    pub fn with_shuffle_moves(mut self, moves: usize) -> Self {
        self.shuffle_moves = moves;
        self
    }

    /// Override the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Check that the grid size is supported and matches the difficulty.
    pub fn validate(&self) -> Result<()> {
        if !self.kind.grid_sizes().contains(&self.grid_size)
            || self.difficulty.kind() != self.kind
            || self.difficulty.grid_size() != self.grid_size
        {
            return Err(PuzzleError::InvalidGridSize {
                kind: self.kind,
                size: self.grid_size,
                expected: self.kind.grid_sizes(),
            });
        }
        Ok(())
    }

    /// Which game this config runs.
    #[must_use]
    pub fn kind(&self) -> GameKind {
        self.kind
    }

    /// Side length of the grid.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Difficulty label matching the grid size.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Random slides applied when a sliding board is dealt.
    #[must_use]
    pub fn shuffle_moves(&self) -> usize {
        self.shuffle_moves
    }

    /// Flip-back delay after a mismatch, in milliseconds.
    #[must_use]
    pub fn mismatch_delay_ms(&self) -> u64 {
        self.mismatch_delay_ms
    }

    /// Flip-back delay after a mismatch.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// Fixed seed, or `None` for OS entropy.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Number of cells on the grid (`grid_size²`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}

/// 100 shuffle moves for 3×3, 200 for anything larger.
fn default_shuffle_moves(grid_size: usize) -> usize {
    if grid_size <= 3 {
        100
    } else {
        200
    }
}
