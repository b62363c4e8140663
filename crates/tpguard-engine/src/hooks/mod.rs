//! Collaborator interfaces consumed by the guard.
//!
//! Combat tracking, zone containment, and message rendering live in the host;
//! the guard only sees them through these traits.

pub mod combat;
pub mod message;
pub mod remote;
pub mod zone;

pub use combat::CombatStateOracle;
pub use message::MessageService;
pub use remote::{RemoteZoneProvider, RemoteZoneService};
pub use zone::{ZoneProvider, ZoneRegistry};
