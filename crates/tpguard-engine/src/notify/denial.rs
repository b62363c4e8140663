use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use tpguard_core::model::{Actor, ActorId};

use crate::hooks::{CombatStateOracle, MessageService};
use crate::obs::metrics::GuardMetrics;
use crate::policy::DenialReason;

/// Minimum gap between two denial messages to the same actor.
pub const DENIAL_MESSAGE_COOLDOWN: Duration = Duration::from_millis(3000);

/// Per-actor rate-limited denial messages.
///
/// `actor id -> last emitted denial`. Entries are never expired; they are only
/// dropped by `cleanup()` (shutdown/reload).
pub struct DenialNotifier {
    last_denial: DashMap<ActorId, Instant>,
    cooldown: Duration,
    messages: Arc<dyn MessageService>,
    combat: Arc<dyn CombatStateOracle>,
    metrics: Arc<GuardMetrics>,
}

impl DenialNotifier {
    pub fn new(
        messages: Arc<dyn MessageService>,
        combat: Arc<dyn CombatStateOracle>,
        metrics: Arc<GuardMetrics>,
    ) -> Self {
        Self {
            last_denial: DashMap::new(),
            cooldown: DENIAL_MESSAGE_COOLDOWN,
            messages,
            combat,
            metrics,
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Tell `actor` why the teleport was blocked, unless told recently.
    /// Returns whether a message was emitted.
    pub fn notify(&self, actor: &Actor, reason: DenialReason) -> bool {
        self.notify_at(actor, reason, Instant::now())
    }

    /// Same as `notify` with an explicit clock reading.
    pub fn notify_at(&self, actor: &Actor, reason: DenialReason, now: Instant) -> bool {
        if !self.claim(&actor.id, now) {
            self.metrics.notifications.inc(&[("outcome", "suppressed")]);
            tracing::trace!(
                actor = %actor.id,
                reason = reason.as_str(),
                "denial message suppressed (cooldown)"
            );
            return false;
        }

        let secs = match self.combat.remaining_combat_secs(&actor.id) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(
                    actor = %actor.id,
                    error = %e,
                    "remaining combat time unavailable; using 0"
                );
                self.metrics.collaborator_failures.inc(&[
                    ("collaborator", "combat_oracle"),
                    ("code", e.code().as_str()),
                ]);
                0
            }
        };

        let mut placeholders = HashMap::new();
        placeholders.insert("player".to_string(), actor.display_name.clone());
        placeholders.insert("time".to_string(), secs.to_string());

        if let Err(e) = self.messages.send(actor, reason.template_key(), &placeholders) {
            tracing::warn!(
                actor = %actor.id,
                template = reason.template_key(),
                error = %e,
                "denial message send failed"
            );
            self.metrics.collaborator_failures.inc(&[
                ("collaborator", "message_service"),
                ("code", e.code().as_str()),
            ]);
        }

        self.metrics.notifications.inc(&[("outcome", "sent")]);
        true
    }

    /// Atomic per-key check-and-stamp; the entry holds the shard lock.
    fn claim(&self, actor: &ActorId, now: Instant) -> bool {
        match self.last_denial.entry(actor.clone()) {
            Entry::Occupied(mut e) => {
                if now.saturating_duration_since(*e.get()) < self.cooldown {
                    return false;
                }
                e.insert(now);
                true
            }
            Entry::Vacant(e) => {
                e.insert(now);
                true
            }
        }
    }

    /// Forget every cooldown. Idempotent.
    pub fn cleanup(&self) {
        self.last_denial.clear();
    }

    pub fn tracked(&self) -> usize {
        self.last_denial.len()
    }
}
