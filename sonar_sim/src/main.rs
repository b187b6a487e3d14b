// sonar_sim/src/main.rs

//! Replays a recorded ultrasonic log.
//!
//! `cargo run -p sonar_sim -- sensor_readings_24.csv` opens the two-panel
//! viewer; add `--headless --export out.json` to render every frame without
//! a window and dump the results.

use anyhow::{bail, Context};
use bevy::prelude::*;
use clap::Parser;
use sonar_core::error::DatasetError;
use sonar_core::Replay;

use sonar_sim::cli::Cli;
use sonar_sim::config::ViewerConfig;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --- 1. Configuration: defaults, then the TOML file, then flags ---
    let mut config = ViewerConfig::load(&cli.config)
        .with_context(|| format!("failed to load viewer config {:?}", cli.config))?;
    cli.apply_overrides(&mut config);

    // --- 2. Data: parse the whole log and dead-reckon it before any frame is shown ---
    let replay = Replay::load(&cli.data, config.replay.clone())
        .with_context(|| format!("failed to load sensor log {:?}", cli.data))?;
    if replay.frame_count() == 0 {
        return Err(DatasetError::Empty)
            .with_context(|| format!("nothing to replay in {:?}", cli.data));
    }

    // --- 3. Run ---
    match sonar_sim::build_app(&cli, config, replay).run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("replay exited with status {}", code),
    }
}
