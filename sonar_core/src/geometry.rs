// sonar_core/src/geometry.rs

//! The fixed ring of ultrasonic sensors around the robot.

use crate::error::GeometryError;
use serde::Serialize;

/// Number of ultrasonic sensors, and of range columns in every log row.
pub const SENSOR_COUNT: usize = 24;

/// Bearing of each sensor in degrees, relative to the robot's forward axis.
/// Index `i` here lines up with reading column `i`.
pub const DEFAULT_BEARINGS_DEG: [f64; SENSOR_COUNT] = [
    180.0, -165.0, -150.0, -135.0, -120.0, -105.0, -90.0, -75.0, //
    -60.0, -45.0, -30.0, -15.0, 0.0, 15.0, 30.0, 45.0, //
    60.0, 75.0, 90.0, 105.0, 120.0, 135.0, 150.0, 165.0,
];

/// Index-aligned table of sensor bearings. Built once at startup and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorGeometry {
    bearings_deg: [f64; SENSOR_COUNT],
}

impl SensorGeometry {
    pub fn new(bearings_deg: [f64; SENSOR_COUNT]) -> Result<Self, GeometryError> {
        if let Some((index, &value)) = bearings_deg
            .iter()
            .enumerate()
            .find(|(_, b)| !b.is_finite())
        {
            return Err(GeometryError::NonFiniteBearing { index, value });
        }
        Ok(Self { bearings_deg })
    }

    /// Builds a table from configuration data, which must hold exactly
    /// [`SENSOR_COUNT`] finite bearings.
    pub fn from_slice(bearings_deg: &[f64]) -> Result<Self, GeometryError> {
        let table: [f64; SENSOR_COUNT] =
            bearings_deg
                .try_into()
                .map_err(|_| GeometryError::BearingCount {
                    expected: SENSOR_COUNT,
                    found: bearings_deg.len(),
                })?;
        Self::new(table)
    }

    pub fn bearings_deg(&self) -> &[f64; SENSOR_COUNT] {
        &self.bearings_deg
    }

    pub fn bearing_deg(&self, sensor: usize) -> Option<f64> {
        self.bearings_deg.get(sensor).copied()
    }

    /// Bearings converted to radians, in sensor order.
    pub fn bearings_rad(&self) -> impl Iterator<Item = f64> + '_ {
        self.bearings_deg.iter().map(|b| b.to_radians())
    }
}

impl Default for SensorGeometry {
    fn default() -> Self {
        Self {
            bearings_deg: DEFAULT_BEARINGS_DEG,
        }
    }
}
