//! Teleport cause tags and their classification table.
//!
//! The table only marks exceptions: `AlwaysAllowed` causes skip every check,
//! `CombatRestrictable` causes are blocked while in combat when the restriction
//! is enabled. Everything else is `Default` and still goes through the
//! safe-zone check.

use std::fmt;

use serde::Deserialize;

/// Why a teleport was initiated (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum CauseTag {
    EnderPearl,
    ChorusFruit,
    Command,
    Plugin,
    Spectate,
    NetherPortal,
    EndPortal,
    EndGateway,
    Dismount,
    ExitBed,
    Unknown,
    Other,
}

/// Classification bucket for a cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CauseClass {
    /// Never blocked, regardless of combat or zones.
    AlwaysAllowed,
    /// Blocked in combat when `combat.block_teleport_in_combat` is on.
    CombatRestrictable,
    /// No exception; subject to the safe-zone check only.
    Default,
}

pub const ALL_CAUSES: [CauseTag; 12] = [
    CauseTag::EnderPearl,
    CauseTag::ChorusFruit,
    CauseTag::Command,
    CauseTag::Plugin,
    CauseTag::Spectate,
    CauseTag::NetherPortal,
    CauseTag::EndPortal,
    CauseTag::EndGateway,
    CauseTag::Dismount,
    CauseTag::ExitBed,
    CauseTag::Unknown,
    CauseTag::Other,
];

/// Total cause -> bucket table.
pub const fn classify(cause: CauseTag) -> CauseClass {
    match cause {
        CauseTag::EnderPearl | CauseTag::Spectate => CauseClass::AlwaysAllowed,
        CauseTag::Command | CauseTag::Plugin | CauseTag::ChorusFruit => {
            CauseClass::CombatRestrictable
        }
        CauseTag::NetherPortal
        | CauseTag::EndPortal
        | CauseTag::EndGateway
        | CauseTag::Dismount
        | CauseTag::ExitBed
        | CauseTag::Unknown
        | CauseTag::Other => CauseClass::Default,
    }
}

impl CauseTag {
    /// Parse a host cause tag (`"ENDER_PEARL"`, `"ender_pearl"`, ...).
    /// Unrecognised tags map to `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "ENDER_PEARL" => CauseTag::EnderPearl,
            "CHORUS_FRUIT" => CauseTag::ChorusFruit,
            "COMMAND" => CauseTag::Command,
            "PLUGIN" | "PLUGIN_INITIATED" => CauseTag::Plugin,
            "SPECTATE" => CauseTag::Spectate,
            "NETHER_PORTAL" => CauseTag::NetherPortal,
            "END_PORTAL" => CauseTag::EndPortal,
            "END_GATEWAY" => CauseTag::EndGateway,
            "DISMOUNT" => CauseTag::Dismount,
            "EXIT_BED" => CauseTag::ExitBed,
            "UNKNOWN" => CauseTag::Unknown,
            _ => CauseTag::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CauseTag::EnderPearl => "ENDER_PEARL",
            CauseTag::ChorusFruit => "CHORUS_FRUIT",
            CauseTag::Command => "COMMAND",
            CauseTag::Plugin => "PLUGIN",
            CauseTag::Spectate => "SPECTATE",
            CauseTag::NetherPortal => "NETHER_PORTAL",
            CauseTag::EndPortal => "END_PORTAL",
            CauseTag::EndGateway => "END_GATEWAY",
            CauseTag::Dismount => "DISMOUNT",
            CauseTag::ExitBed => "EXIT_BED",
            CauseTag::Unknown => "UNKNOWN",
            CauseTag::Other => "OTHER",
        }
    }

    pub fn class(self) -> CauseClass {
        classify(self)
    }
}

impl From<String> for CauseTag {
    fn from(s: String) -> Self {
        CauseTag::from_tag(&s)
    }
}

impl fmt::Display for CauseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
