//! Foresight Session
//!
//! The game core: one session state machine and the task that drives it.
//!
//! ## Phases
//!
//! ```text
//!             confirm                 select / expiry (with selection)
//!  ┌──────────┐ ───► ┌──────────┐ ──────────────────────► ┌────────────┐
//!  │ analysis │      │ thinking │                          │ evaluating │
//!  └──────────┘ ◄─── └──────────┘                          └─────┬──────┘
//!       ▲     expiry (no selection)                               │ expiry
//!       │                                                         ▼
//!       │                 restart                           ┌──────────┐
//!       └────────────────────────────────────────────────── │  result  │
//!                                                           └──────────┘
//! ```
//!
//! - [`Session`] is synchronous and owns every piece of game state. It is
//!   fed owned feed snapshots, never the live feed.
//! - [`SessionDriver`] is the single task that owns the timers, forwards
//!   player actions and publishes [`SessionView`](foresight_core::SessionView)s.

pub mod config;
pub mod driver;
pub mod error;
pub mod machine;

pub use config::SessionConfig;
pub use driver::{SessionDriver, SessionHandle};
pub use error::{SessionError, SessionResult};
pub use machine::{Session, Transition};
