// sonar_core/src/projection.rs

use crate::dataset::Readings;
use crate::geometry::SensorGeometry;
use crate::types::{direction, ObstaclePoint, Pose};

/// Projects one frame of range readings into world coordinates.
///
/// Each bearing is expressed in the robot's own frame, so it is rotated by the
/// current heading before the range is applied. Output index `i` always
/// corresponds to sensor `i`; a NaN reading yields a NaN point rather than
/// being dropped.
pub fn project(pose: &Pose, readings: &Readings, geometry: &SensorGeometry) -> Vec<ObstaclePoint> {
    let heading_rad = pose.heading_rad();
    readings
        .iter()
        .zip(geometry.bearings_rad())
        .map(|(&range, bearing_rad)| pose.position + direction(bearing_rad + heading_rad) * range)
        .collect()
}
