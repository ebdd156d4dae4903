//! Engine configuration
//!
//! A small serde-backed settings tree, loadable from TOML. Defaults match
//! the behaviour the tests assume.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub teleport: TeleportSettings,
    pub limits: LimitSettings,
}

/// Visitation behaviour knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleportSettings {
    /// Sort relative to the actor's current area when no area was given
    pub per_area_visit: bool,
    /// Include plots co-owned through merges when visiting by player
    pub visit_merged_owners: bool,
    /// Identity lookup deadline in milliseconds
    pub lookup_timeout_ms: u64,
}

impl Default for TeleportSettings {
    fn default() -> Self {
        Self {
            per_area_visit: false,
            visit_merged_owners: false,
            lookup_timeout_ms: 5_000,
        }
    }
}

/// Numeric bounds supplied by configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitSettings {
    /// Upper bound for explicit permission-range scans
    pub max_plots: u32,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self { max_plots: 127 }
    }
}

impl Settings {
    /// Parse settings from a TOML document
    ///
    /// # Errors
    ///
    /// Returns the underlying `toml` error if the document is malformed.
    pub fn from_toml(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// The identity lookup deadline as a `Duration`
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.teleport.lookup_timeout_ms)
    }
}
