//! Client Configuration
//!
//! Read from an optional JSON block embedded in the page; every field has a default.

use serde::Deserialize;

use crate::error::ClientResult;

/// Element id of the embedded configuration block
pub const CONFIG_ELEMENT_ID: &str = "habit-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin; empty means "same origin as the page"
    pub base_url: String,
    /// Preferences resource path (some deployments serve `/api/preferences`)
    pub preferences_path: String,
    /// Longest allowed export range, in days
    pub export_max_days: i64,
    /// How long a toast stays visible
    pub notice_timeout_ms: u32,
    /// localStorage key mirroring the dark-mode preference
    pub dark_mode_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            preferences_path: "/preferences".to_string(),
            export_max_days: 365,
            notice_timeout_ms: 3000,
            dark_mode_key: "darkMode".to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> ClientResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Fill in the origin when the page did not pin one
    pub fn with_origin(mut self, origin: &str) -> Self {
        if self.base_url.trim().is_empty() {
            self.base_url = origin.to_string();
        }
        self
    }
}
