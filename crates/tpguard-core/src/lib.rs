//! tpguard core: host-agnostic teleport model, cause table, and error types.
//!
//! This crate defines the data contracts shared by the engine and by hosts that
//! feed it teleport events. It carries no runtime dependencies so it can be
//! embedded into any event pipeline.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Teleport handling runs on the host's event threads, so malformed input must
//! surface as `TpGuardError`/`Result` instead of crashing the host.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod cause;
pub mod error;
pub mod model;

/// Shared result type.
pub use error::{Result, TpGuardError};
pub use cause::{classify, CauseClass, CauseTag};
pub use model::{Actor, ActorId, Point, TeleportAttempt, TeleportEvent, Verdict};
