//! # Application configuration: `portfolio.toml`
//!
//! UX thresholds that are not part of the portfolio data itself. The web
//! package embeds the file at build time and falls back to
//! [`PortfolioConfig::default`] when it is missing or malformed.
//!
//! ## Structure
//!
//! ```toml
//! [drag]
//! pointer_distance_px = 10   # mouse/pen movement before a drag starts
//! touch_delay_ms = 50        # press duration before a touch drag starts
//! touch_tolerance_px = 15    # movement allowed during that press
//!
//! [notifications]
//! duration_ms = 3000         # how long a toast stays on screen
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PortfolioConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`DragConfig`] | Drag activation thresholds, see [`crate::drag`]. |
//! | [`NotificationConfig`] | Toast lifetime. |
//!
//! Every field has a default, so an empty file equals the default configuration.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default)]
    pub drag: DragConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragConfig {
    #[serde(default = "default_pointer_distance")]
    pub pointer_distance_px: f64,
    #[serde(default = "default_touch_delay")]
    pub touch_delay_ms: u64,
    #[serde(default = "default_touch_tolerance")]
    pub touch_tolerance_px: f64,
}

fn default_pointer_distance() -> f64 {
    10.0
}

fn default_touch_delay() -> u64 {
    50
}

fn default_touch_tolerance() -> f64 {
    15.0
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            pointer_distance_px: default_pointer_distance(),
            touch_delay_ms: default_touch_delay(),
            touch_tolerance_px: default_touch_tolerance(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_notification_duration")]
    pub duration_ms: u64,
}

fn default_notification_duration() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_notification_duration(),
        }
    }
}

impl PortfolioConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "portfolio.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(s)?)
    }

    /// Parse from TOML, logging and falling back to defaults on error.
    pub fn from_toml_or_default(s: &str) -> Self {
        Self::from_toml(s).unwrap_or_else(|e| {
            tracing::warn!("{}: {e}; using defaults", Self::filename());
            Self::default()
        })
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
