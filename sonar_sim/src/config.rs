// sonar_sim/src/config.rs

//! Viewer configuration: the core replay parameters plus everything the host
//! owns (pacing, window). Loaded with figment so a missing file simply yields
//! the defaults.

use bevy::prelude::Resource;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sonar_core::config::ReplayConfig;
use std::path::Path;
use std::time::Duration;

// =========================================================================
// == Top-Level Configuration Resource ==
// =========================================================================

/// The root of the data parsed from `replay.toml`.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    pub replay: ReplayConfig,
    pub playback: PlaybackConfig,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Delay between frames. Only affects pacing, never the computed results.
    pub frame_interval_ms: u64,
    pub start_paused: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: 250,
            start_paused: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    /// sRGB clear colour.
    pub background: [f32; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ultrasonic Sensor Replay".to_string(),
            width: 1400.0,
            height: 700.0,
            background: [0.97, 0.97, 0.97],
        }
    }
}

impl ViewerConfig {
    /// Defaults, overlaid by `path` if it exists.
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(ViewerConfig::default())).merge(Toml::file(path))
    }

    pub fn load(path: &Path) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.playback.frame_interval_ms)
    }
}
