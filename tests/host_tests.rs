//! Host and score history tests.
//!
//! These tests run rounds end to end the way an app would:
//! - Start a game from menu labels
//! - Feed taps and elapsed time through `GameHost`
//! - Save the result and read the history back

use std::time::Duration;

use puzzle_hub::games::sliding::undo_path;
use puzzle_hub::{
    AnyGame, Board, CardState, Difficulty, GameConfig, GameEvent, GameHost, GameKind, GameRecord,
    GameRng, GameSelection, InMemoryScoreStore, PuzzleEngine, ScoreStore, SlidingPuzzleEngine,
    SymbolId,
};

fn clock_at_noon() -> i64 {
    1_700_000_000_000
}

fn solve_memory(host: &mut GameHost<AnyGame, &mut InMemoryScoreStore>) {
    let pairs = host.engine().as_memory().unwrap().total_pairs() as u8;
    for symbol in 0..pairs {
        let positions = host
            .engine()
            .as_memory()
            .unwrap()
            .deck()
            .positions_of(SymbolId(symbol));
        host.tap(positions[0]);
        host.advance(Duration::from_millis(500));
        host.tap(positions[1]);
    }
}

// =============================================================================
// Session Tests
// =============================================================================

/// Menu labels start the right engine.
#[test]
fn test_start_from_menu_labels() {
    let mut store = InMemoryScoreStore::new();
    let selection = GameSelection::parse("MEMORY", "HARD").unwrap();
    let host = GameHost::launch(selection.config().with_seed(1), &mut store).unwrap();

    assert_eq!(host.engine().config().kind(), GameKind::Memory);
    assert_eq!(host.engine().cell_count(), 36);
    assert!(GameSelection::parse("SLIDE", "HARD").is_err());
    assert!(GameSelection::parse("TETRIS", "EASY").is_err());
}

/// A full memory round with a mismatch, saved to history.
#[test]
fn test_memory_round_saved() {
    let mut store = InMemoryScoreStore::new();
    {
        let config = GameConfig::for_difficulty(Difficulty::Easy).with_seed(8);
        let mut host = GameHost::launch(config, &mut store)
            .unwrap()
            .with_timestamp_source(clock_at_noon);

        // One mismatch first.
        let memory = host.engine().as_memory().unwrap();
        let first = memory.card(0).unwrap().symbol;
        let other = memory.deck().iter().find(|c| c.symbol != first).unwrap().position;
        host.tap(0);
        let events = host.tap(other);
        assert!(events.contains(&GameEvent::TimerStartRequested));

        let events = host.advance(Duration::from_secs(1));
        assert!(events.iter().any(|e| matches!(e, GameEvent::MismatchResolved { .. })));
        let memory = host.engine().as_memory().unwrap();
        assert_eq!(memory.deck().count_in_state(CardState::FaceUp), 0);

        solve_memory(&mut host);
        assert!(host.engine().is_won());

        let record = host.finished().unwrap().clone();
        assert_eq!(record.moves, 9);
        // 1s mismatch wait + 8 × 0.5s between taps.
        assert_eq!(record.time_seconds, 5);
        assert!(host.save_result().unwrap());
    }

    let history = store.history(Some(GameKind::Memory)).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(
        history[0],
        GameRecord::new(GameKind::Memory, Difficulty::Easy, 9, 5, clock_at_noon())
    );
    assert!(store.history(Some(GameKind::Slide)).unwrap().is_empty());
}

/// Restarting mid-mismatch leaves no callback behind.
#[test]
fn test_restart_mid_mismatch() {
    let mut store = InMemoryScoreStore::new();
    let config = GameConfig::memory(4).unwrap().with_seed(3);
    let mut host = GameHost::launch(config, &mut store).unwrap();

    let memory = host.engine().as_memory().unwrap();
    let first = memory.card(0).unwrap().symbol;
    let other = memory.deck().iter().find(|c| c.symbol != first).unwrap().position;
    host.tap(0);
    host.tap(other);
    assert_eq!(host.pending_callbacks(), 1);

    let events = host.restart();
    assert_eq!(events.as_slice(), &[GameEvent::Reset]);
    assert_eq!(host.pending_callbacks(), 0);

    host.tap(5);
    host.advance(Duration::from_secs(2));
    let memory = host.engine().as_memory().unwrap();
    assert_eq!(memory.card(5).unwrap().state, CardState::FaceUp);
    assert_eq!(memory.selected(), Some(5));
    assert!(!host.clock().is_running());
}

/// The first move after a restart starts the clock again from zero.
#[test]
fn test_clock_runs_again_after_restart() {
    let mut store = InMemoryScoreStore::new();
    let config = GameConfig::memory(4).unwrap().with_seed(21);
    let mut host = GameHost::launch(config, &mut store).unwrap();

    let positions = host.engine().as_memory().unwrap().deck().positions_of(SymbolId(0));
    host.tap(positions[0]);
    let events = host.tap(positions[1]);
    assert!(events.contains(&GameEvent::TimerStartRequested));
    host.advance(Duration::from_secs(4));
    assert_eq!(host.clock().elapsed_seconds(), 4);

    host.restart();
    assert!(!host.clock().is_running());
    host.advance(Duration::from_secs(2));
    assert_eq!(host.clock().elapsed_seconds(), 0);

    let positions = host.engine().as_memory().unwrap().deck().positions_of(SymbolId(1));
    host.tap(positions[0]);
    let events = host.tap(positions[1]);
    assert!(events.contains(&GameEvent::TimerStartRequested));
    assert!(host.clock().is_running());
    host.advance(Duration::from_secs(3));
    assert_eq!(host.clock().elapsed_seconds(), 3);
}

/// A sliding round solved through the host.
#[test]
fn test_sliding_round_saved() {
    let mut store = InMemoryScoreStore::new();
    let config = GameConfig::sliding(3).unwrap();
    let mut board = Board::solved(3).unwrap();
    let path = board.shuffle(30, &mut GameRng::new(12));
    let engine = SlidingPuzzleEngine::with_board(config, board, GameRng::new(0)).unwrap();

    {
        let mut host = GameHost::new(AnyGame::from(engine), &mut store)
            .with_timestamp_source(clock_at_noon);
        for position in undo_path(8, &path) {
            host.tap(position);
            host.advance(Duration::from_millis(250));
            if host.engine().is_won() {
                break;
            }
        }
        assert!(host.finished().is_some());
        assert!(host.save_result().unwrap());
    }

    let history = store.history(None).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].game_type, GameKind::Slide);
    assert_eq!(history[0].difficulty, Difficulty::ThreeByThree);
    assert!(history[0].share_text().starts_with("I solved Sliding Number Puzzle (3x3) in"));
}

// =============================================================================
// Score History Tests
// =============================================================================

/// History is newest first and clears completely.
#[test]
fn test_history_order_and_clear() {
    let mut store = InMemoryScoreStore::new();
    store
        .insert(GameRecord::new(GameKind::Memory, Difficulty::Easy, 10, 30, 3))
        .unwrap();
    store
        .insert(GameRecord::new(GameKind::Slide, Difficulty::FourByFour, 90, 200, 9))
        .unwrap();
    store
        .insert(GameRecord::new(GameKind::Memory, Difficulty::Hard, 40, 120, 6))
        .unwrap();

    let timestamps: Vec<i64> = store
        .history(None)
        .unwrap()
        .iter()
        .map(|r| r.timestamp)
        .collect();
    assert_eq!(timestamps, vec![9, 6, 3]);

    let bytes = store.snapshot().unwrap();
    store.clear_all().unwrap();
    assert!(store.history(None).unwrap().is_empty());

    let restored = InMemoryScoreStore::restore(&bytes).unwrap();
    assert_eq!(restored.history(Some(GameKind::Memory)).unwrap().len(), 2);
}
