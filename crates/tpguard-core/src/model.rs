//! Teleport attempt model shared by hosts and the engine.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::cause::CauseTag;

/// Stable unique actor id (e.g. a player UUID rendered as text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub struct ActorId(Arc<str>);

impl ActorId {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ActorId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The acting player. Combat flag/timer live in the combat oracle, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub display_name: String,
}

impl Actor {
    pub fn new(id: impl Into<ActorId>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A location inside a named world. Only ever handed to zone providers.
#[derive(Debug, Clone, Deserialize)]
pub struct Point {
    pub world: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: world.into(),
            x,
            y,
            z,
        }
    }
}

/// One inbound teleport, immutable while it is evaluated.
#[derive(Debug, Clone, Deserialize)]
pub struct TeleportAttempt {
    pub actor: Actor,
    #[serde(default)]
    pub origin: Option<Point>,
    #[serde(default)]
    pub destination: Option<Point>,
    pub cause: CauseTag,
}

/// Host-side mutable teleport event.
#[derive(Debug, Clone)]
pub struct TeleportEvent {
    pub attempt: TeleportAttempt,
    pub cancelled: bool,
}

impl TeleportEvent {
    pub fn new(attempt: TeleportAttempt) -> Self {
        Self {
            attempt,
            cancelled: false,
        }
    }
}

/// Final outcome for one teleport attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Allow,
    Cancel,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Allow => "allow",
            Verdict::Cancel => "cancel",
        }
    }

    pub fn is_cancel(self) -> bool {
        matches!(self, Verdict::Cancel)
    }
}
