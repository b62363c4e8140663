//! Policy layer (cause table, safe-zone crossing, ordered teleport rules).
//!
//! Combines the combat flag, the cause bucket, and zone membership into a
//! single decision for the guard to apply.

pub mod engine;
pub mod safezone;

pub use engine::{AllowReason, DenialReason, PolicyDecision, TeleportPolicyEngine};
pub use safezone::is_disallowed_crossing;
