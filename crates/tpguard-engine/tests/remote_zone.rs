//! Bounded remote zone lookups.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod support;

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::runtime::{Builder, Runtime};

use tpguard_core::error::{Result, TpGuardError};
use tpguard_core::{CauseTag, Point, Verdict};
use tpguard_engine::config::GuardConfig;
use tpguard_engine::hooks::{RemoteZoneProvider, RemoteZoneService, ZoneProvider};

use support::{at, attempt, guard_with, FakeOracle, RecordingMessages};

struct SlowRegions {
    delay: Duration,
}

#[async_trait]
impl RemoteZoneService for SlowRegions {
    async fn is_safe_zone(&self, point: Point) -> Result<bool> {
        tokio::time::sleep(self.delay).await;
        Ok(point.world == "spawn")
    }
}

struct DownRegions;

#[async_trait]
impl RemoteZoneService for DownRegions {
    async fn is_safe_zone(&self, _point: Point) -> Result<bool> {
        Err(TpGuardError::Unavailable("region service 503".into()))
    }
}

fn runtime() -> Runtime {
    Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

#[test]
fn fast_answer_is_returned() {
    let rt = runtime();
    let p = RemoteZoneProvider::new(
        "regions",
        Arc::new(SlowRegions { delay: Duration::from_millis(1) }),
        rt.handle().clone(),
        Duration::from_millis(500),
    );

    assert_eq!(p.name(), "regions");
    assert!(p.is_safe_zone(&at("spawn")).unwrap());
    assert!(!p.is_safe_zone(&at("wild")).unwrap());
}

#[test]
fn slow_answer_times_out_within_bound() {
    let rt = runtime();
    let p = RemoteZoneProvider::new(
        "regions",
        Arc::new(SlowRegions { delay: Duration::from_secs(5) }),
        rt.handle().clone(),
        Duration::from_millis(50),
    );

    let started = Instant::now();
    let err = p.is_safe_zone(&at("spawn")).expect_err("must time out");
    assert_eq!(err.code().as_str(), "TIMEOUT");
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[test]
fn service_error_is_passed_through() {
    let rt = runtime();
    let p = RemoteZoneProvider::new(
        "regions",
        Arc::new(DownRegions),
        rt.handle().clone(),
        Duration::from_millis(200),
    );
    let err = p.is_safe_zone(&at("spawn")).expect_err("must fail");
    assert_eq!(err.code().as_str(), "UNAVAILABLE");
}

#[test]
fn timed_out_provider_fails_open_in_guard() {
    let rt = runtime();
    let mut cfg = GuardConfig::default();
    cfg.zones.query_timeout_ms = 30;

    let guard = guard_with(cfg.clone(), FakeOracle::in_combat(true), RecordingMessages::new());
    guard.register_zone_provider(Arc::new(RemoteZoneProvider::from_config(
        "regions",
        Arc::new(SlowRegions { delay: Duration::from_secs(5) }),
        rt.handle().clone(),
        &cfg.zones,
    )));

    let a = attempt("u-1", CauseTag::NetherPortal, Some("wild"), Some("spawn"));
    assert_eq!(guard.on_teleport_attempt(&a), Verdict::Allow);
    assert_eq!(
        guard
            .metrics()
            .collaborator_failures
            .get(&[("collaborator", "zone_provider"), ("code", "TIMEOUT")]),
        1
    );
}
