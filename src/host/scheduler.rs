//! One-shot deferred tasks on a virtual clock.
//!
//! The host's event loop calls `advance` with the time that passed; due
//! tasks come back in due order (ties in scheduling order). Nothing here
//! sleeps or spawns threads.

use std::time::Duration;

use derive_more::{Display, From};
use rustc_hash::FxHashMap;

/// Cancellation handle for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From)]
#[display("Task({_0})")]
pub struct TaskId(u64);

#[derive(Clone, Debug)]
struct ScheduledTask<T> {
    due_ms: u64,
    payload: T,
}

/// Single-threaded deferred task queue.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_id: u64,
    tasks: FxHashMap<TaskId, ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            tasks: FxHashMap::default(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Empty scheduler at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds advanced so far.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of tasks waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Check if nothing is scheduled.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Check if a task is still waiting to fire.
    #[must_use]
    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// Schedule `payload` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskId {
        self.next_id += 1;
        let id = TaskId(self.next_id);
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self.tasks.insert(
            id,
            ScheduledTask {
                due_ms: self.now_ms.saturating_add(delay_ms),
                payload,
            },
        );
        id
    }

    /// Cancel a task, returning its payload if it had not fired.
    pub fn cancel(&mut self, id: TaskId) -> Option<T> {
        self.tasks.remove(&id).map(|task| task.payload)
    }

    /// Cancel everything. Returns how many tasks were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }

    /// Advance the clock and take every task now due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);

        let now = self.now_ms;
        let mut due: Vec<(u64, TaskId)> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.due_ms <= now)
            .map(|(&id, task)| (task.due_ms, id))
            .collect();
        due.sort_unstable();

        due.into_iter()
            .filter_map(|(_, id)| self.tasks.remove(&id))
            .map(|task| task.payload)
            .collect()
    }
}
