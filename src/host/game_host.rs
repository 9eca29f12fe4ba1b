//! Host that drives one engine between the UI and the score store.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{debug, info, instrument, trace};

use super::clock::GameClock;
use super::scheduler::Scheduler;
use crate::core::{EngineEvents, GameConfig, GameEvent, MismatchToken, Result};
use crate::games::AnyGame;
use crate::rules::PuzzleEngine;
use crate::scores::{GameRecord, ScoreStore};

/// Deferred work the host owes its engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HostTask {
    MismatchTimeout(MismatchToken),
}

/// Milliseconds since the Unix epoch from the system clock.
fn system_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

/// Drives a single game session.
///
/// Owns the engine, the round clock and the deferred-callback queue, and
/// holds an injected score store. The UI forwards taps and elapsed time;
/// the host turns engine events into clock starts, scheduled flip-backs and
/// a finished [`GameRecord`].
pub struct GameHost<E, S> {
    engine: E,
    store: S,
    clock: GameClock,
    scheduler: Scheduler<HostTask>,
    finished: Option<GameRecord>,
    saved: bool,
    timestamp_source: fn() -> i64,
}

impl<S: ScoreStore> GameHost<AnyGame, S> {
    /// Start whichever game `config` describes.
    pub fn launch(config: GameConfig, store: S) -> Result<Self> {
        Ok(Self::new(AnyGame::launch(config)?, store))
    }
}

impl<E: PuzzleEngine, S: ScoreStore> GameHost<E, S> {
    /// Wrap an engine and a store.
    pub fn new(engine: E, store: S) -> Self {
        Self {
            engine,
            store,
            clock: GameClock::new(),
            scheduler: Scheduler::new(),
            finished: None,
            saved: false,
            timestamp_source: system_millis,
        }
    }

    /// Replace the timestamp source used for finished records.
    #[must_use]
    pub fn with_timestamp_source(mut self, source: fn() -> i64) -> Self {
        self.timestamp_source = source;
        self
    }

    /// The engine being driven.
    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Round clock.
    #[must_use]
    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Injected score store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record of the finished round, once won.
    #[must_use]
    pub fn finished(&self) -> Option<&GameRecord> {
        self.finished.as_ref()
    }

    /// Number of callbacks waiting to fire.
    #[must_use]
    pub fn pending_callbacks(&self) -> usize {
        self.scheduler.pending()
    }

    /// Forward a tap to the engine.
    ///
    /// Returns the engine's events so the caller can redraw.
    #[instrument(level = "trace", skip(self))]
    pub fn tap(&mut self, position: usize) -> EngineEvents {
        let events = self.engine.tap(position);
        self.handle_events(&events);
        events
    }

    /// Let `elapsed` pass: tick the clock and deliver due callbacks.
    pub fn advance(&mut self, elapsed: Duration) -> EngineEvents {
        self.clock.tick(elapsed);

        let mut events = EngineEvents::new();
        for task in self.scheduler.advance(elapsed) {
            let HostTask::MismatchTimeout(token) = task;
            let produced = self.engine.on_mismatch_timeout(token);
            self.handle_events(&produced);
            events.extend(produced);
        }
        events
    }

    /// Start a new round.
    ///
    /// Outstanding callbacks are cancelled before the engine resets.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) -> EngineEvents {
        let dropped = self.scheduler.cancel_all();
        if dropped > 0 {
            debug!(dropped, "cancelled pending callbacks");
        }
        self.clock.reset();
        self.finished = None;
        self.saved = false;
        self.engine.reset()
    }

    /// Save the finished round to the store.
    ///
    /// Returns `Ok(false)` if there is nothing to save or it was already
    /// saved. A store failure leaves the session untouched.
    pub fn save_result(&mut self) -> Result<bool> {
        let Some(record) = self.finished.as_ref().filter(|_| !self.saved) else {
            return Ok(false);
        };
        self.store.insert(record.clone())?;
        self.saved = true;
        info!(game = %record.game_type, moves = record.moves, "score saved");
        Ok(true)
    }

    fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::TimerStartRequested => self.clock.start(),
                GameEvent::MismatchPending { token, delay_ms } => {
                    let id = self
                        .scheduler
                        .schedule(Duration::from_millis(*delay_ms), HostTask::MismatchTimeout(*token));
                    trace!(%token, %id, "scheduled flip-back");
                }
                GameEvent::Won { moves } => self.finish(*moves),
                _ => {}
            }
        }
    }

    fn finish(&mut self, moves: u32) {
        let time_seconds = self.clock.stop();
        let config = self.engine.config();
        let record = GameRecord::new(
            config.kind(),
            config.difficulty(),
            moves,
            time_seconds,
            (self.timestamp_source)(),
        );
        info!(
            game = %record.game_type,
            difficulty = %record.difficulty,
            moves,
            time_seconds,
            "round finished"
        );
        self.finished = Some(record);
        self.saved = false;
    }
}
