//! Sliding puzzle board.
//!
//! ## Layout
//!
//! `N²` cells in row-major order. Cell values are a permutation of
//! `0..N²` where `0` is the empty cell. The solved board is
//! `[1, 2, ..., N²-1, 0]`.
//!
//! ## Shuffling
//!
//! Boards are shuffled by walking the empty cell through random legal
//! moves from the solved state, so every shuffled board is solvable by
//! construction. Permuting tiles directly would give an unsolvable board
//! about half the time.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GameRng, PuzzleError, Result};

/// Value of the empty cell.
pub const EMPTY: u8 = 0;

/// Largest cell count whose values all fit in a tile.
pub const MAX_CELLS: usize = u8::MAX as usize + 1;

/// Orthogonal neighbors of a cell: up, down, left, right (as available).
#[must_use]
pub fn neighbors(size: usize, position: usize) -> SmallVec<[usize; 4]> {
    let mut out = SmallVec::new();
    if size == 0 || position >= size * size {
        return out;
    }
    let row = position / size;
    let col = position % size;
    if row > 0 {
        out.push(position - size);
    }
    if row < size - 1 {
        out.push(position + size);
    }
    if col > 0 {
        out.push(position - 1);
    }
    if col < size - 1 {
        out.push(position + 1);
    }
    out
}

/// An `N×N` sliding puzzle board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
    /// Always the index holding `EMPTY`.
    empty: usize,
}

impl Board {
    /// The solved board `[1, 2, ..., N²-1, 0]`.
    ///
    /// Fails if the board is empty or has more than [`MAX_CELLS`] cells.
    pub fn solved(size: usize) -> Result<Self> {
        let total = Self::cell_count(size)?;
        let mut tiles: Vec<u8> = (1..=u8::MAX).take(total - 1).collect();
        tiles.push(EMPTY);
        Ok(Self {
            size,
            tiles,
            empty: total - 1,
        })
    }

    /// Build a board from explicit tiles.
    ///
    /// Fails unless `tiles` is a permutation of `0..size²`.
    pub fn from_tiles(size: usize, tiles: Vec<u8>) -> Result<Self> {
        let total = Self::cell_count(size)?;
        if tiles.len() != total {
            return Err(PuzzleError::invalid_board(format!(
                "expected {} tiles for a {size}x{size} board, got {}",
                total,
                tiles.len()
            )));
        }

        let mut seen = vec![false; total];
        for &tile in &tiles {
            let slot = seen
                .get_mut(usize::from(tile))
                .ok_or_else(|| PuzzleError::invalid_board(format!("tile {tile} out of range")))?;
            if *slot {
                return Err(PuzzleError::invalid_board(format!("tile {tile} appears twice")));
            }
            *slot = true;
        }

        let empty = tiles
            .iter()
            .position(|&t| t == EMPTY)
            .ok_or_else(|| PuzzleError::invalid_board("no empty cell"))?;
        Ok(Self { size, tiles, empty })
    }

    fn cell_count(size: usize) -> Result<usize> {
        size.checked_mul(size)
            .filter(|&total| total > 0 && total <= MAX_CELLS)
            .ok_or_else(|| {
                PuzzleError::invalid_board(format!(
                    "a {size}x{size} board must have between 1 and {MAX_CELLS} cells"
                ))
            })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (`size²`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the board has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Row-major cell values.
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Value at a position.
    #[must_use]
    pub fn tile(&self, position: usize) -> Option<u8> {
        self.tiles.get(position).copied()
    }

    /// Index of the empty cell.
    #[must_use]
    pub fn empty_position(&self) -> usize {
        self.empty
    }

    /// Orthogonal neighbors of `position` on this board.
    #[must_use]
    pub fn neighbors(&self, position: usize) -> SmallVec<[usize; 4]> {
        neighbors(self.size, position)
    }

    /// Check if the tile at `position` can slide into the empty cell.
    #[must_use]
    pub fn is_adjacent_to_empty(&self, position: usize) -> bool {
        self.neighbors(self.empty).contains(&position)
    }

    /// Slide the tile at `position` into the empty cell.
    ///
    /// Returns false and leaves the board untouched unless the tile is
    /// orthogonally adjacent to the empty cell.
    pub fn slide(&mut self, position: usize) -> bool {
        if !self.is_adjacent_to_empty(position) {
            return false;
        }
        self.tiles.swap(position, self.empty);
        self.empty = position;
        true
    }

    /// Check for `[1, 2, ..., N²-1, 0]`.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let Some((last, rest)) = self.tiles.split_last() else {
            return false;
        };
        *last == EMPTY
            && rest
                .iter()
                .enumerate()
                .all(|(i, &tile)| usize::from(tile) == i + 1)
    }

    /// Put every tile back in solved order, keeping the size.
    pub fn restore_solved(&mut self) {
        // Sorted is `[0, 1, ..., N²-1]`; rotating moves the empty cell last.
        self.tiles.sort_unstable();
        self.tiles.rotate_left(1);
        self.empty = self.tiles.len().saturating_sub(1);
    }

    /// Apply `moves` random legal slides.
    ///
    /// Each step picks uniformly among the empty cell's neighbors. Returns
    /// the positions slid, in order; sliding them back in reverse order
    /// (each into the cell it came from) restores the starting board.
    pub fn shuffle(&mut self, moves: usize, rng: &mut GameRng) -> Vec<usize> {
        let mut path = Vec::with_capacity(moves);
        for _ in 0..moves {
            let options = self.neighbors(self.empty);
            let Some(&next) = rng.choose(&options) else {
                break;
            };
            self.tiles.swap(self.empty, next);
            self.empty = next;
            path.push(next);
        }
        path
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.size.max(1)) {
            let line: Vec<String> = row
                .iter()
                .map(|&t| if t == EMPTY { " .".to_string() } else { format!("{t:2}") })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Positions to slide to undo a shuffle `path` that started with the empty
/// cell at `start_empty`.
///
/// After the shuffle the empty cell sits at the last path entry; undoing
/// step `i` slides the tile now at `path[i-1]` (or `start_empty`) back.
#[must_use]
pub fn undo_path(start_empty: usize, path: &[usize]) -> Vec<usize> {
    let mut origins = Vec::with_capacity(path.len());
    origins.push(start_empty);
    if let Some((_, init)) = path.split_last() {
        origins.extend_from_slice(init);
    } else {
        return Vec::new();
    }
    origins.reverse();
    origins
}
