//! Host-owned game clock.

use std::time::Duration;

use crate::scores::format_mm_ss;

/// Elapsed-time counter for a round.
///
/// Starts on the first counted move and stops at the win. Time only
/// accumulates through `tick`, so the clock follows whatever drives the
/// host loop (wall time in an app, fixed steps in tests).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameClock {
    running: bool,
    elapsed_ms: u64,
}

impl GameClock {
    /// Stopped clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting. Starting a running clock does nothing.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop counting and return whole elapsed seconds.
    pub fn stop(&mut self) -> u32 {
        self.running = false;
        self.elapsed_seconds()
    }

    /// Add elapsed time if running.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.running {
            let ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
            self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
        }
    }

    /// Stop and zero the clock.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if the clock is counting.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whole seconds counted so far.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u32 {
        u32::try_from(self.elapsed_ms / 1000).unwrap_or(u32::MAX)
    }

    /// Display form, `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_mm_ss(self.elapsed_seconds())
    }
}
