//! Foresight Clock Infrastructure
//!
//! Time abstractions for the game loop:
//!
//! - [`SystemClock`] / [`ManualClock`]: timestamps for snapshots and baselines
//! - [`Countdown`]: whole-second counter owned by a timed phase
//! - [`PhaseTimer`]: periodic timer handle scoped to one phase entry
//!
//! ## Timer ownership
//!
//! ```text
//! enter thinking ──► PhaseTimer::countdown(cycle 1)
//! select         ──► drop(cycle 1) ──► PhaseTimer::countdown(cycle 2)
//!                                      PhaseTimer::poller(cycle 2)
//! result         ──► drop both
//! ```
//!
//! Every tick carries the cycle its timer was armed for, so a consumer can
//! discard ticks that belong to a phase entry that is already gone.

mod countdown;
mod manual;
mod system;
mod timer;

pub use countdown::Countdown;
pub use manual::ManualClock;
pub use system::SystemClock;
pub use timer::{PhaseTimer, TimerKind, tick_armed};

// Re-export the Clock trait for convenience
pub use foresight_ports::Clock;
