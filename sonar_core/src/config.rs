// sonar_core/src/config.rs

use crate::error::GeometryError;
use crate::geometry::SensorGeometry;
use crate::models::motion::MotionProfile;
use serde::{Deserialize, Serialize};

/// Fixed parameters of a replay. They are read once at startup and shared by
/// both panels, so the radar highlight and the map's detection circle always
/// agree on the threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayConfig {
    /// Readings strictly below this distance count as a close obstacle. Also
    /// the radius of the detection circle on the map.
    pub obstacle_threshold: f64,
    /// Length of the heading indicator on the map. Purely visual.
    pub heading_arrow_length: f64,
    /// Radar radial bound as a multiple of the largest finite reading.
    pub radar_headroom: f64,
    /// Overrides the built-in 24-entry bearing table when present.
    pub bearings_deg: Option<Vec<f64>>,
    pub motion: MotionProfile,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            obstacle_threshold: 30.0,
            heading_arrow_length: 10.0,
            radar_headroom: 1.1,
            bearings_deg: None,
            motion: MotionProfile::default(),
        }
    }
}

impl ReplayConfig {
    pub fn geometry(&self) -> Result<SensorGeometry, GeometryError> {
        match &self.bearings_deg {
            Some(bearings) => SensorGeometry::from_slice(bearings),
            None => Ok(SensorGeometry::default()),
        }
    }
}
