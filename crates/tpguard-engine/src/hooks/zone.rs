use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use dashmap::DashMap;

use tpguard_core::error::Result;
use tpguard_core::model::Point;

use crate::config::ZonesSection;

/// A zone-protection backend (region plugin, claim plugin, ...).
pub trait ZoneProvider: Send + Sync {
    fn name(&self) -> &'static str;
    /// Whether `point` lies inside a protected/safe zone.
    fn is_safe_zone(&self, point: &Point) -> Result<bool>;
}

/// Registry of zone providers, each enabled or disabled by configuration.
///
/// Having no providers is a valid state: nothing can be a safe zone then.
/// Registered providers survive `reconfigure`; only the enabled flags change.
#[derive(Default)]
pub struct ZoneRegistry {
    providers: DashMap<&'static str, Arc<dyn ZoneProvider>>,
    settings: RwLock<ZonesSection>,
}

impl ZoneRegistry {
    pub fn new() -> Self {
        Self::from_config(&ZonesSection::default())
    }

    pub fn from_config(cfg: &ZonesSection) -> Self {
        Self {
            providers: DashMap::new(),
            settings: RwLock::new(cfg.clone()),
        }
    }

    /// Swap the provider enable flags (config reload).
    pub fn reconfigure(&self, cfg: &ZonesSection) {
        let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        *settings = cfg.clone();
    }

    // A poisoned lock still holds a whole ZonesSection; keep serving it.
    fn settings(&self) -> RwLockReadGuard<'_, ZonesSection> {
        self.settings.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn register(&self, provider: Arc<dyn ZoneProvider>) {
        let name = provider.name();
        if self.providers.insert(name, provider).is_some() {
            tracing::warn!(provider = name, "zone provider replaced");
        } else {
            tracing::info!(
                provider = name,
                enabled = self.is_enabled(name),
                "zone provider registered"
            );
        }
    }

    pub fn unregister(&self, name: &str) -> bool {
        self.providers.remove(name).is_some()
    }

    pub fn registered(&self) -> Vec<&'static str> {
        self.providers.iter().map(|e| *e.key()).collect()
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.settings().is_enabled(name)
    }

    /// Snapshot of enabled providers. Order is unspecified.
    pub fn enabled_providers(&self) -> Vec<Arc<dyn ZoneProvider>> {
        let settings = self.settings();
        self.providers
            .iter()
            .filter(|e| settings.is_enabled(e.key()))
            .map(|e| Arc::clone(e.value()))
            .collect()
    }
}
