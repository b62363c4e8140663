use std::collections::HashMap;

use serde::Deserialize;
use tpguard_core::error::{Result, TpGuardError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardConfig {
    pub version: u32,

    #[serde(default)]
    pub combat: CombatSection,

    #[serde(default)]
    pub zones: ZonesSection,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            combat: CombatSection::default(),
            zones: ZonesSection::default(),
        }
    }
}

impl GuardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TpGuardError::UnsupportedVersion);
        }

        self.zones.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CombatSection {
    /// Gates the cause-based restriction only; safe-zone entry is always blocked.
    #[serde(default = "default_true")]
    pub block_teleport_in_combat: bool,
}

impl Default for CombatSection {
    fn default() -> Self {
        Self {
            block_teleport_in_combat: default_true(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZonesSection {
    /// Upper bound for a single remote zone lookup.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// provider name -> enabled. Providers not listed here are enabled.
    #[serde(default)]
    pub providers: HashMap<String, bool>,
}

impl Default for ZonesSection {
    fn default() -> Self {
        Self {
            query_timeout_ms: default_query_timeout_ms(),
            providers: HashMap::new(),
        }
    }
}

impl ZonesSection {
    pub fn validate(&self) -> Result<()> {
        if !(10..=5000).contains(&self.query_timeout_ms) {
            return Err(TpGuardError::InvalidConfig(
                "zones.query_timeout_ms must be between 10 and 5000".into(),
            ));
        }
        if let Some(name) = self.providers.keys().find(|n| n.trim().is_empty()) {
            return Err(TpGuardError::InvalidConfig(format!(
                "zones.providers has an empty provider name: {name:?}"
            )));
        }
        Ok(())
    }

    pub fn is_enabled(&self, provider: &str) -> bool {
        self.providers.get(provider).copied().unwrap_or(true)
    }
}

fn default_true() -> bool {
    true
}
fn default_query_timeout_ms() -> u64 {
    250
}
