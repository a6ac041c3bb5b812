//! Game settings
//!
//! Read from a JSON file next to the binary. Missing fields take their
//! defaults; a missing or broken file falls back to `Settings::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE;

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Host timer rate (ticks per second)
    pub tick_rate: u32,
    /// Seed for the spawn headings; `None` picks one from the clock
    pub seed: Option<u64>,

    // === Headless demo ===
    /// How long the native demo runs (seconds of simulated time)
    pub demo_seconds: f32,
    /// Steer the paddle toward the ball during the demo
    pub autoplay: bool,

    // === Logging ===
    /// Log every resolver event at info level instead of debug
    pub log_events: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            seed: None,

            demo_seconds: 30.0,
            autoplay: true,

            log_events: false,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "block_break.json";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Seed to use for this run
    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }

    /// Ticks the headless demo runs for
    pub fn demo_ticks(&self) -> u64 {
        (self.demo_seconds.max(0.0) * self.tick_rate as f32) as u64
    }
}
