use bevy::prelude::Resource;
use clap::Parser;
use std::path::PathBuf;

use crate::config::ViewerConfig;

/// Sonar replay: dead-reckon a recorded ultrasonic log and animate it.
///
/// This struct defines the command-line arguments accepted by the replay
/// viewer binary.
#[derive(Parser, Debug, Resource, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Headerless CSV with 24 range readings and a movement label per row.
    #[arg(default_value = "sensor_readings_24.csv")]
    pub data: PathBuf,

    /// The path to the viewer TOML file. Missing files fall back to defaults.
    #[arg(short, long, default_value = "assets/replay.toml")]
    pub config: PathBuf,

    /// Render every frame without opening a window.
    #[arg(long, default_value_t = false)]
    pub headless: bool,

    /// Write the trajectory and every rendered frame as JSON (headless only).
    #[arg(long, requires = "headless")]
    pub export: Option<PathBuf>,

    /// Override the delay between frames, in milliseconds.
    #[arg(long)]
    pub interval_ms: Option<u64>,
}

impl Cli {
    /// Applies flags that take precedence over the config file.
    pub fn apply_overrides(&self, config: &mut ViewerConfig) {
        if let Some(interval_ms) = self.interval_ms {
            config.playback.frame_interval_ms = interval_ms;
        }
    }
}
