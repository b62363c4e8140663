use std::sync::Arc;

use tpguard_core::cause::{classify, CauseClass};
use tpguard_core::model::{TeleportAttempt, Verdict};

use crate::config::CombatSection;
use crate::hooks::ZoneRegistry;
use crate::obs::metrics::GuardMetrics;

use super::safezone::is_disallowed_crossing;

/// Which rule let a teleport through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    NotInCombat,
    NoDestination,
    ExemptCause,
    RestrictionDisabled,
    Unrestricted,
}

impl AllowReason {
    pub fn as_str(self) -> &'static str {
        match self {
            AllowReason::NotInCombat => "not_in_combat",
            AllowReason::NoDestination => "no_destination",
            AllowReason::ExemptCause => "exempt_cause",
            AllowReason::RestrictionDisabled => "restriction_disabled",
            AllowReason::Unrestricted => "unrestricted",
        }
    }
}

/// Which rule blocked a teleport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// Escaping from an unsafe point into a safe zone.
    SafeZoneEntry,
    /// Restrictable cause while in combat.
    CombatRestricted,
}

impl DenialReason {
    pub fn as_str(self) -> &'static str {
        match self {
            DenialReason::SafeZoneEntry => "safe_zone_entry",
            DenialReason::CombatRestricted => "combat_restricted",
        }
    }

    /// Message template used when telling the player.
    pub fn template_key(self) -> &'static str {
        match self {
            DenialReason::SafeZoneEntry => "combat_teleport_safezone_blocked",
            DenialReason::CombatRestricted => "combat_teleport_blocked",
        }
    }
}

/// Decision from policy evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    Allow(AllowReason),
    Cancel(DenialReason),
}

impl PolicyDecision {
    pub fn verdict(self) -> Verdict {
        match self {
            PolicyDecision::Allow(_) => Verdict::Allow,
            PolicyDecision::Cancel(_) => Verdict::Cancel,
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            PolicyDecision::Allow(r) => r.as_str(),
            PolicyDecision::Cancel(r) => r.as_str(),
        }
    }
}

/// Teleport policy. Stateless apart from the shared zone registry.
/// Construct once at startup, then share via Arc.
pub struct TeleportPolicyEngine {
    zones: Arc<ZoneRegistry>,
    metrics: Arc<GuardMetrics>,
}

impl TeleportPolicyEngine {
    pub fn new(zones: Arc<ZoneRegistry>, metrics: Arc<GuardMetrics>) -> Self {
        Self { zones, metrics }
    }

    pub fn zones(&self) -> &Arc<ZoneRegistry> {
        &self.zones
    }

    /// Ordered rules, first match wins.
    ///
    /// The safe-zone rule runs before the config toggle: disabling
    /// `block_teleport_in_combat` never lets a player escape into a safe zone.
    pub fn evaluate(
        &self,
        attempt: &TeleportAttempt,
        in_combat: bool,
        combat: &CombatSection,
    ) -> PolicyDecision {
        if !in_combat {
            return PolicyDecision::Allow(AllowReason::NotInCombat);
        }

        let Some(destination) = attempt.destination.as_ref() else {
            return PolicyDecision::Allow(AllowReason::NoDestination);
        };

        let class = classify(attempt.cause);
        if class == CauseClass::AlwaysAllowed {
            return PolicyDecision::Allow(AllowReason::ExemptCause);
        }

        let providers = self.zones.enabled_providers();
        if is_disallowed_crossing(
            attempt.origin.as_ref(),
            Some(destination),
            &providers,
            &self.metrics,
        ) {
            return PolicyDecision::Cancel(DenialReason::SafeZoneEntry);
        }

        if !combat.block_teleport_in_combat {
            return PolicyDecision::Allow(AllowReason::RestrictionDisabled);
        }

        if class == CauseClass::CombatRestrictable {
            return PolicyDecision::Cancel(DenialReason::CombatRestricted);
        }

        PolicyDecision::Allow(AllowReason::Unrestricted)
    }
}
