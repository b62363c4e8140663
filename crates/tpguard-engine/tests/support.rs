//! In-memory collaborators shared by guard tests.

#![allow(dead_code)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tracing_subscriber::{fmt, EnvFilter};

use tpguard_core::error::{Result, TpGuardError};
use tpguard_core::{Actor, ActorId, CauseTag, Point, TeleportAttempt};
use tpguard_engine::config::GuardConfig;
use tpguard_engine::hooks::{CombatStateOracle, MessageService, ZoneProvider};
use tpguard_engine::TeleportGuard;

pub fn init_tracing() {
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct FakeOracle {
    pub in_combat: AtomicBool,
    pub remaining_secs: u64,
    pub fail_lookup: bool,
    pub fail_remaining: bool,
}

impl FakeOracle {
    pub fn in_combat(v: bool) -> Arc<Self> {
        Arc::new(Self {
            in_combat: AtomicBool::new(v),
            remaining_secs: 12,
            fail_lookup: false,
            fail_remaining: false,
        })
    }

    pub fn broken() -> Arc<Self> {
        Arc::new(Self {
            in_combat: AtomicBool::new(true),
            remaining_secs: 12,
            fail_lookup: true,
            fail_remaining: true,
        })
    }

    pub fn without_timer() -> Arc<Self> {
        Arc::new(Self {
            in_combat: AtomicBool::new(true),
            remaining_secs: 12,
            fail_lookup: false,
            fail_remaining: true,
        })
    }
}

impl CombatStateOracle for FakeOracle {
    fn is_in_combat(&self, _actor: &ActorId) -> Result<bool> {
        if self.fail_lookup {
            return Err(TpGuardError::Unavailable("combat tracker gone".into()));
        }
        Ok(self.in_combat.load(Ordering::SeqCst))
    }

    fn remaining_combat_secs(&self, _actor: &ActorId) -> Result<u64> {
        if self.fail_remaining {
            return Err(TpGuardError::Unavailable("actor state vanished".into()));
        }
        Ok(self.remaining_secs)
    }
}

/// Treats every point in `safe_world` as protected.
pub struct WorldZone {
    pub name: &'static str,
    pub safe_world: &'static str,
    pub calls: AtomicUsize,
}

impl WorldZone {
    pub fn new(name: &'static str, safe_world: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            safe_world,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ZoneProvider for WorldZone {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_safe_zone(&self, point: &Point) -> Result<bool> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(point.world == self.safe_world)
    }
}

pub struct FailingZone {
    pub name: &'static str,
}

impl ZoneProvider for FailingZone {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_safe_zone(&self, _point: &Point) -> Result<bool> {
        Err(TpGuardError::Unavailable(format!("{} not loaded", self.name)))
    }
}

/// Standard provider set: `worldguard` protects "spawn", `griefprevention` protects "claim".
pub fn provider_named(name: &str) -> Arc<dyn ZoneProvider> {
    match name {
        "worldguard" => WorldZone::new("worldguard", "spawn"),
        "griefprevention" => WorldZone::new("griefprevention", "claim"),
        other => panic!("unknown test provider: {other}"),
    }
}

#[derive(Debug, Clone)]
pub struct Sent {
    pub actor: ActorId,
    pub template_key: String,
    pub placeholders: HashMap<String, String>,
}

#[derive(Default)]
pub struct RecordingMessages {
    pub sent: Mutex<Vec<Sent>>,
    pub attempts: AtomicUsize,
    pub fail: bool,
}

impl RecordingMessages {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            fail: true,
            ..Self::default()
        })
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl MessageService for RecordingMessages {
    fn send(
        &self,
        actor: &Actor,
        template_key: &str,
        placeholders: &HashMap<String, String>,
    ) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(TpGuardError::Internal("template missing".into()));
        }
        self.sent.lock().unwrap().push(Sent {
            actor: actor.id.clone(),
            template_key: template_key.to_string(),
            placeholders: placeholders.clone(),
        });
        Ok(())
    }
}

pub fn guard_with(
    cfg: GuardConfig,
    oracle: Arc<FakeOracle>,
    messages: Arc<RecordingMessages>,
) -> TeleportGuard {
    init_tracing();
    TeleportGuard::new(cfg, oracle, messages).expect("guard must build")
}

pub fn at(world: &str) -> Point {
    Point::new(world, 10.5, 64.0, -3.0)
}

pub fn attempt(
    actor: &str,
    cause: CauseTag,
    from: Option<&str>,
    to: Option<&str>,
) -> TeleportAttempt {
    TeleportAttempt {
        actor: Actor::new(actor, format!("{actor}_name")),
        origin: from.map(at),
        destination: to.map(at),
        cause,
    }
}
