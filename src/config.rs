//! App Configuration
//!
//! Compiled-in settings: seed anecdotes, notification lifetime, log level.

use std::time::Duration;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::AppResult;
use crate::models::AnecdoteDraft;

const EMBEDDED_CONFIG: &str = include_str!("../assets/config.json");

const DEFAULT_NOTIFICATION_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Anecdotes present at startup
    #[serde(default)]
    pub seed: Vec<AnecdoteDraft>,
    /// How long the "created" notification stays visible
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_notification_ms() -> u64 {
    DEFAULT_NOTIFICATION_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: Vec::new(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Parse the configuration bundled with the app
    pub fn load() -> AppResult<Self> {
        Self::from_json(EMBEDDED_CONFIG)
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
