//! Host layer between the UI and the engines.
//!
//! Engines own no timers. The host owns:
//! - `GameClock`: elapsed seconds, started by the first move
//! - `Scheduler`: deferred callbacks such as the mismatch flip-back
//! - `GameHost`: forwards taps, reacts to engine events, builds the
//!   finished record and hands it to an injected `ScoreStore`

mod clock;
mod game_host;
mod scheduler;

pub use clock::GameClock;
pub use game_host::GameHost;
pub use scheduler::{Scheduler, TaskId};
