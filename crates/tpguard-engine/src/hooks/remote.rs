//! Bounded adapter for network-backed zone services.
//!
//! Zone lookups run on the host's event threads and must never stall them.
//! `RemoteZoneProvider` spawns the async lookup on a tokio runtime and waits at
//! most `query_timeout_ms`; a late answer is reported as `Timeout`, which the
//! crossing evaluator treats as "not safe".
//!
//! Note: calling this from a worker of the same current-thread runtime that
//! owns `handle` cannot make progress and always times out. Give the adapter a
//! multi-thread runtime or a dedicated one.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::runtime::Handle;

use tpguard_core::error::{Result, TpGuardError};
use tpguard_core::model::Point;

use crate::config::ZonesSection;
use crate::hooks::zone::ZoneProvider;

/// Async zone lookup (HTTP service, database, ...).
#[async_trait]
pub trait RemoteZoneService: Send + Sync {
    async fn is_safe_zone(&self, point: Point) -> Result<bool>;
}

pub struct RemoteZoneProvider {
    name: &'static str,
    service: Arc<dyn RemoteZoneService>,
    handle: Handle,
    timeout: Duration,
}

impl RemoteZoneProvider {
    pub fn new(
        name: &'static str,
        service: Arc<dyn RemoteZoneService>,
        handle: Handle,
        timeout: Duration,
    ) -> Self {
        Self {
            name,
            service,
            handle,
            timeout,
        }
    }

    pub fn from_config(
        name: &'static str,
        service: Arc<dyn RemoteZoneService>,
        handle: Handle,
        cfg: &ZonesSection,
    ) -> Self {
        Self::new(name, service, handle, Duration::from_millis(cfg.query_timeout_ms))
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}

impl ZoneProvider for RemoteZoneProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_safe_zone(&self, point: &Point) -> Result<bool> {
        let (tx, rx) = mpsc::sync_channel(1);
        let service = Arc::clone(&self.service);
        let point = point.clone();
        let deadline = self.timeout;
        let ms = self.timeout_ms();

        self.handle.spawn(async move {
            let res = match tokio::time::timeout(deadline, service.is_safe_zone(point)).await {
                Ok(r) => r,
                Err(_) => Err(TpGuardError::Timeout(ms)),
            };
            // receiver may already have given up
            let _ = tx.send(res);
        });

        match rx.recv_timeout(deadline) {
            Ok(res) => res,
            Err(RecvTimeoutError::Timeout) => Err(TpGuardError::Timeout(ms)),
            Err(RecvTimeoutError::Disconnected) => Err(TpGuardError::Unavailable(format!(
                "zone provider {} query task dropped",
                self.name
            ))),
        }
    }
}
