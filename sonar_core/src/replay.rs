// sonar_core/src/replay.rs

use crate::config::ReplayConfig;
use crate::dataset::SensorLog;
use crate::error::{RenderError, ReplayError};
use crate::geometry::SensorGeometry;
use crate::render::{FrameRenderer, RenderState};
use crate::trajectory::Trajectory;
use std::path::Path;

/// A loaded log together with everything derived from it up front.
///
/// The trajectory is dead-reckoned once at construction; afterwards the whole
/// structure is read-only and can be shared with the host without locking.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "bevy", derive(bevy_ecs::prelude::Resource))]
pub struct Replay {
    log: SensorLog,
    trajectory: Trajectory,
    geometry: SensorGeometry,
    config: ReplayConfig,
}

impl Replay {
    pub fn new(log: SensorLog, config: ReplayConfig) -> Result<Self, ReplayError> {
        let geometry = config.geometry()?;
        let trajectory = Trajectory::build_with(&config.motion, log.labels());
        Ok(Self {
            log,
            trajectory,
            geometry,
            config,
        })
    }

    /// Reads the log at `path` and prepares it for playback.
    pub fn load(path: impl AsRef<Path>, config: ReplayConfig) -> Result<Self, ReplayError> {
        let log = SensorLog::load(path)?;
        Self::new(log, config)
    }

    pub fn log(&self) -> &SensorLog {
        &self.log
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn geometry(&self) -> &SensorGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    pub fn frame_count(&self) -> usize {
        self.log.len()
    }

    pub fn renderer(&self) -> FrameRenderer<'_> {
        FrameRenderer::new(&self.log, &self.trajectory, &self.geometry, &self.config)
    }

    pub fn render(&self, frame_index: usize) -> Result<RenderState, RenderError> {
        self.renderer().render(frame_index)
    }
}
