//! Denial notifications (per-actor cooldown).

pub mod denial;

pub use denial::{DenialNotifier, DENIAL_MESSAGE_COOLDOWN};
