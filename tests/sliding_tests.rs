//! Sliding puzzle tests.
//!
//! These tests verify the board generator and the move rules:
//! - Every shuffled board is reachable from the solved board
//! - Shuffles undo exactly
//! - Only tiles next to the empty cell move

use std::collections::{HashSet, VecDeque};

use proptest::prelude::*;
use puzzle_hub::games::sliding::{neighbors, undo_path};
use puzzle_hub::{Board, GameConfig, GameEvent, GameRng, PuzzleEngine, SlidingPuzzleEngine};

// =============================================================================
// Solvability Tests
// =============================================================================

/// Every 3×3 layout reachable from the solved board.
fn reachable_3x3() -> HashSet<Vec<u8>> {
    let start = Board::solved(3).unwrap();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.tiles().to_vec());
    queue.push_back(start);

    while let Some(board) = queue.pop_front() {
        for next in neighbors(3, board.empty_position()) {
            let mut moved = board.clone();
            moved.slide(next);
            if seen.insert(moved.tiles().to_vec()) {
                queue.push_back(moved);
            }
        }
    }
    seen
}

/// Generated 3×3 boards are always solvable.
#[test]
fn test_generated_boards_are_solvable() {
    let reachable = reachable_3x3();
    // Half of the 9! permutations.
    assert_eq!(reachable.len(), 181_440);

    let config = GameConfig::sliding(3).unwrap();
    for seed in 0..200 {
        let engine = SlidingPuzzleEngine::with_rng(config.clone(), GameRng::new(seed)).unwrap();
        assert!(
            reachable.contains(engine.board().tiles()),
            "seed {seed} produced an unsolvable board:\n{}",
            engine.board()
        );
    }
}

/// A board with two tiles swapped is not reachable.
#[test]
fn test_swapped_tiles_unsolvable() {
    let reachable = reachable_3x3();
    let swapped = Board::from_tiles(3, vec![2, 1, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    assert!(!reachable.contains(swapped.tiles()));
}

/// 100 random legal moves then the inverse sequence gives the solved board.
#[test]
fn test_shuffle_inverse_round_trip() {
    let mut rng = GameRng::new(31337);
    let mut board = Board::solved(3).unwrap();
    let path = board.shuffle(100, &mut rng);

    let undo = undo_path(8, &path);
    assert!(undo.iter().all(|&position| board.slide(position)));
    assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
}

// =============================================================================
// Move Rule Tests
// =============================================================================

/// Empty at 0: tapping position 3 moves tile 4 up.
#[test]
fn test_tap_below_empty_corner() {
    let board = Board::from_tiles(3, vec![0, 1, 2, 4, 5, 3, 7, 8, 6]).unwrap();
    let config = GameConfig::sliding(3).unwrap();
    let mut engine = SlidingPuzzleEngine::with_board(config, board, GameRng::new(0)).unwrap();

    assert_eq!(neighbors(3, 0).as_slice(), &[3, 1]);
    engine.tap(3);

    assert_eq!(engine.board().tile(0), Some(4));
    assert_eq!(engine.board().tile(3), Some(0));
    assert_eq!(engine.empty_position(), 3);
    assert_eq!(engine.move_count(), 1);
}

/// Solving a 4×4 board by replaying the undo path wins exactly once.
#[test]
fn test_replay_to_win_4x4() {
    let config = GameConfig::sliding(4).unwrap().with_shuffle_moves(0);
    let mut rng = GameRng::new(77);
    let mut board = Board::solved(4).unwrap();
    let path = board.shuffle(200, &mut rng);
    let undo = undo_path(15, &path);

    let mut engine = SlidingPuzzleEngine::with_board(config, board, GameRng::new(0)).unwrap();
    let mut wins = 0;
    for position in undo {
        let events = engine.tap(position);
        wins += events.iter().filter(|e| e.is_won()).count();
        if engine.is_won() {
            break;
        }
    }

    // The walk may pass through the solved board early; the first visit wins.
    assert_eq!(wins, 1);
    assert!(engine.is_solved());
    assert!(engine.move_count() <= 200);
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    /// Shuffled boards stay permutations with the empty index cached.
    #[test]
    fn prop_shuffle_keeps_permutation(seed in any::<u64>(), size in 3usize..=4, moves in 0usize..300) {
        let mut rng = GameRng::new(seed);
        let mut board = Board::solved(size).unwrap();
        board.shuffle(moves, &mut rng);

        let mut tiles = board.tiles().to_vec();
        tiles.sort_unstable();
        prop_assert_eq!(tiles, (0..(size * size) as u8).collect::<Vec<_>>());
        prop_assert_eq!(board.tile(board.empty_position()), Some(0));
    }

    /// Non-adjacent taps never change the board, move count or empty cell.
    #[test]
    fn prop_non_adjacent_tap_is_noop(seed in any::<u64>(), position in 0usize..20) {
        let config = GameConfig::sliding(4).unwrap();
        let mut engine = SlidingPuzzleEngine::with_rng(config, GameRng::new(seed)).unwrap();
        prop_assume!(!engine.board().is_adjacent_to_empty(position));

        let before = engine.board().clone();
        let events = engine.tap(position);

        prop_assert!(events.is_empty());
        prop_assert_eq!(engine.board(), &before);
        prop_assert_eq!(engine.move_count(), 0);
    }

    /// Adjacent taps count exactly one move each.
    #[test]
    fn prop_adjacent_taps_count(seed in any::<u64>(), picks in prop::collection::vec(0usize..4, 1..50)) {
        let config = GameConfig::sliding(3).unwrap();
        let mut engine = SlidingPuzzleEngine::with_rng(config, GameRng::new(seed)).unwrap();
        let mut expected = 0;

        for pick in picks {
            if engine.is_won() {
                break;
            }
            let options = engine.board().neighbors(engine.empty_position());
            let target = options[pick % options.len()];
            let events = engine.tap(target);
            expected += 1;
            let has_move_event = events.contains(&GameEvent::MoveCountChanged { moves: expected });
            prop_assert!(has_move_event);
        }
        prop_assert_eq!(engine.move_count(), expected);
    }
}
