//! Host-facing teleport guard.
//!
//! Wires the combat oracle, zone registry, policy engine, and denial notifier
//! together. The host calls `on_teleport_attempt` (or `handle_event`) once per
//! teleport; only a `Verdict` comes back, every collaborator failure is
//! absorbed here.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Instant;

use tpguard_core::error::Result;
use tpguard_core::model::{TeleportAttempt, TeleportEvent, Verdict};

use crate::config::GuardConfig;
use crate::hooks::{CombatStateOracle, MessageService, ZoneProvider, ZoneRegistry};
use crate::notify::DenialNotifier;
use crate::obs::metrics::GuardMetrics;
use crate::policy::{PolicyDecision, TeleportPolicyEngine};

#[derive(Clone)]
pub struct TeleportGuard {
    inner: Arc<GuardInner>,
}

struct GuardInner {
    cfg: RwLock<Arc<GuardConfig>>,
    combat: Arc<dyn CombatStateOracle>,
    engine: TeleportPolicyEngine,
    notifier: DenialNotifier,
    metrics: Arc<GuardMetrics>,
}

impl TeleportGuard {
    /// Build the guard. Returns Result so hosts can refuse a bad config at startup.
    pub fn new(
        cfg: GuardConfig,
        combat: Arc<dyn CombatStateOracle>,
        messages: Arc<dyn MessageService>,
    ) -> Result<Self> {
        cfg.validate()?;

        let metrics = Arc::new(GuardMetrics::default());
        let zones = Arc::new(ZoneRegistry::from_config(&cfg.zones));
        let engine = TeleportPolicyEngine::new(zones, Arc::clone(&metrics));
        let notifier = DenialNotifier::new(messages, Arc::clone(&combat), Arc::clone(&metrics));

        tracing::info!(
            block_teleport_in_combat = cfg.combat.block_teleport_in_combat,
            query_timeout_ms = cfg.zones.query_timeout_ms,
            "teleport guard ready"
        );

        Ok(Self {
            inner: Arc::new(GuardInner {
                cfg: RwLock::new(Arc::new(cfg)),
                combat,
                engine,
                notifier,
                metrics,
            }),
        })
    }

    /// Current config snapshot.
    pub fn cfg(&self) -> Arc<GuardConfig> {
        let cfg = self.inner.cfg.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&cfg)
    }

    /// Apply a reloaded config in place. Registered zone providers are kept;
    /// notification cooldowns are cleared. An invalid config leaves the
    /// current one untouched. Remote providers keep the timeout they were
    /// built with.
    pub fn reload(&self, cfg: GuardConfig) -> Result<()> {
        cfg.validate()?;

        self.zones().reconfigure(&cfg.zones);
        tracing::info!(
            block_teleport_in_combat = cfg.combat.block_teleport_in_combat,
            query_timeout_ms = cfg.zones.query_timeout_ms,
            "teleport guard reloaded"
        );
        {
            let mut current = self.inner.cfg.write().unwrap_or_else(PoisonError::into_inner);
            *current = Arc::new(cfg);
        }

        self.cleanup();
        Ok(())
    }

    pub fn zones(&self) -> &Arc<ZoneRegistry> {
        self.inner.engine.zones()
    }

    pub fn register_zone_provider(&self, provider: Arc<dyn ZoneProvider>) {
        self.zones().register(provider);
    }

    pub fn notifier(&self) -> &DenialNotifier {
        &self.inner.notifier
    }

    pub fn metrics(&self) -> &GuardMetrics {
        &self.inner.metrics
    }

    /// Prometheus text for all guard metrics.
    pub fn metrics_text(&self) -> String {
        let tracked = self.inner.notifier.tracked() as u64;
        self.inner
            .metrics
            .render(&[("tpguard_denial_cooldown_entries", tracked)])
    }

    /// Decide one teleport. Notifies the actor (rate-limited) on cancel.
    pub fn on_teleport_attempt(&self, attempt: &TeleportAttempt) -> Verdict {
        let started = Instant::now();
        let in_combat = self.in_combat(attempt);
        let cfg = self.cfg();

        let decision = self.inner.engine.evaluate(attempt, in_combat, &cfg.combat);

        let verdict = decision.verdict();
        self.inner.metrics.evaluate_duration.observe(&[], started.elapsed());
        self.inner.metrics.decisions.inc(&[
            ("verdict", verdict.as_str()),
            ("reason", decision.reason()),
        ]);
        tracing::debug!(
            actor = %attempt.actor.id,
            cause = %attempt.cause,
            verdict = verdict.as_str(),
            reason = decision.reason(),
            "teleport evaluated"
        );

        if let PolicyDecision::Cancel(reason) = decision {
            self.inner.notifier.notify(&attempt.actor, reason);
        }

        verdict
    }

    /// Apply the verdict to a host event. Events cancelled upstream are left alone.
    pub fn handle_event(&self, event: &mut TeleportEvent) {
        if event.cancelled {
            return;
        }
        if self.on_teleport_attempt(&event.attempt).is_cancel() {
            event.cancelled = true;
        }
    }

    /// Drop all notification cooldowns (shutdown/reload). Idempotent.
    pub fn cleanup(&self) {
        self.inner.notifier.cleanup();
        tracing::debug!("teleport guard cooldowns cleared");
    }

    fn in_combat(&self, attempt: &TeleportAttempt) -> bool {
        match self.inner.combat.is_in_combat(&attempt.actor.id) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(
                    actor = %attempt.actor.id,
                    error = %e,
                    "combat state unavailable; treating as not in combat"
                );
                self.inner.metrics.collaborator_failures.inc(&[
                    ("collaborator", "combat_oracle"),
                    ("code", e.code().as_str()),
                ]);
                false
            }
        }
    }
}
