// sonar_core/src/render.rs

//! The pure per-frame render function.
//!
//! [`FrameRenderer::render`] turns a frame index into a [`RenderState`]: the
//! complete visual content of both panels for that frame. It keeps no state
//! between calls; the host decides when to call it and how to draw the result.

use crate::config::ReplayConfig;
use crate::dataset::SensorLog;
use crate::error::RenderError;
use crate::geometry::SensorGeometry;
use crate::legend::DisplayColor;
use crate::movement::MovementLabel;
use crate::projection::project;
use crate::trajectory::Trajectory;
use crate::types::{ObstaclePoint, Pose, WorldPoint};
use serde::Serialize;

pub const MAP_TITLE: &str = "Top-Down Robot Path";

// =========================================================================
// == Render State ==
// =========================================================================

/// One vertex of the radar outline: a reading plotted at its sensor's bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarVertex {
    pub sensor: usize,
    pub bearing_rad: f64,
    pub range: f64,
}

/// Polar panel content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarView {
    /// All sensors in order, closed by repeating the first vertex at the end.
    pub vertices: Vec<RadarVertex>,
    /// Sensors whose reading is finite and strictly below the threshold.
    pub close_sensors: Vec<usize>,
    /// Outer radius of the plot, shared by every frame of the log.
    /// `None` when the whole log holds no finite reading.
    pub radial_max: Option<f64>,
    pub has_finite_readings: bool,
    pub title: String,
}

impl RadarView {
    /// Unbroken stretches of the outline. A NaN reading splits the loop the
    /// way a plotting library skips missing samples; an all-NaN frame has no
    /// runs at all.
    pub fn outline_runs(&self) -> impl Iterator<Item = &[RadarVertex]> {
        self.vertices
            .split(|v| !v.range.is_finite())
            .filter(|run| !run.is_empty())
    }

    pub fn close_vertices(&self) -> impl Iterator<Item = &RadarVertex> {
        self.close_sensors.iter().filter_map(|&i| self.vertices.get(i))
    }
}

/// The heading indicator: a fixed-length arrow, not a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadingVector {
    pub tail: WorldPoint,
    pub tip: WorldPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetectionCircle {
    pub center: WorldPoint,
    pub radius: f64,
}

/// Top-down panel content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Positions of trajectory poses `0..=frame_index`.
    pub path: Vec<WorldPoint>,
    pub pose: Pose,
    pub heading: HeadingVector,
    pub detection: DetectionCircle,
    /// Finite projections of the current readings.
    pub obstacles: Vec<ObstaclePoint>,
    pub obstacle_color: DisplayColor,
    pub title: String,
}

/// Caption data shared by both panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Caption {
    /// 1-based, for display.
    pub frame_number: usize,
    pub frame_count: usize,
    pub movement: String,
}

impl Caption {
    pub fn title(&self) -> String {
        format!(
            "Frame {}/{} | Movement: {}",
            self.frame_number, self.frame_count, self.movement
        )
    }
}

/// Everything needed to draw one frame. Built fresh by every render call and
/// never carried over to the next frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderState {
    pub frame_index: usize,
    pub label: MovementLabel,
    pub color: DisplayColor,
    pub threshold: f64,
    pub radar: RadarView,
    pub map: MapView,
    pub caption: Caption,
}

// =========================================================================
// == Renderer ==
// =========================================================================

/// Borrowing view over the immutable inputs of a replay.
#[derive(Debug, Clone, Copy)]
pub struct FrameRenderer<'a> {
    log: &'a SensorLog,
    trajectory: &'a Trajectory,
    geometry: &'a SensorGeometry,
    config: &'a ReplayConfig,
    radial_max: Option<f64>,
}

impl<'a> FrameRenderer<'a> {
    pub fn new(
        log: &'a SensorLog,
        trajectory: &'a Trajectory,
        geometry: &'a SensorGeometry,
        config: &'a ReplayConfig,
    ) -> Self {
        let radial_max = log
            .max_finite_reading()
            .map(|max| max * config.radar_headroom);
        Self {
            log,
            trajectory,
            geometry,
            config,
            radial_max,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.log.len()
    }

    /// Radar radial bound: the largest finite reading of the whole log times
    /// the configured headroom.
    pub fn radial_max(&self) -> Option<f64> {
        self.radial_max
    }

    pub fn render(&self, frame_index: usize) -> Result<RenderState, RenderError> {
        let out_of_range = || RenderError::FrameOutOfRange {
            index: frame_index,
            frame_count: self.log.len(),
        };
        let frame = self.log.get(frame_index).ok_or_else(out_of_range)?;
        let path = self
            .trajectory
            .path_through(frame_index)
            .ok_or_else(out_of_range)?;
        let pose = *path.last().ok_or_else(out_of_range)?;

        let threshold = self.config.obstacle_threshold;
        let label = frame.label.clone();
        let color = DisplayColor::for_movement(&label);

        // --- Radar ---
        let mut vertices: Vec<RadarVertex> = frame
            .readings
            .iter()
            .zip(self.geometry.bearings_rad())
            .enumerate()
            .map(|(sensor, (&range, bearing_rad))| RadarVertex {
                sensor,
                bearing_rad,
                range,
            })
            .collect();
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }

        let close_sensors = frame
            .readings
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_finite() && **r < threshold)
            .map(|(i, _)| i)
            .collect();

        let radar = RadarView {
            vertices,
            close_sensors,
            radial_max: self.radial_max,
            has_finite_readings: frame.has_finite_readings(),
            title: format!("Radar View — {label}"),
        };

        // --- Map ---
        let obstacles = project(&pose, &frame.readings, self.geometry)
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .collect();

        let map = MapView {
            path: path.iter().map(|p| p.position).collect(),
            pose,
            heading: HeadingVector {
                tail: pose.position,
                tip: pose.ahead(self.config.heading_arrow_length),
            },
            detection: DetectionCircle {
                center: pose.position,
                radius: threshold,
            },
            obstacles,
            obstacle_color: DisplayColor::LightGray,
            title: MAP_TITLE.to_string(),
        };

        let caption = Caption {
            frame_number: frame_index + 1,
            frame_count: self.log.len(),
            movement: label.to_string(),
        };

        Ok(RenderState {
            frame_index,
            label,
            color,
            threshold,
            radar,
            map,
            caption,
        })
    }
}
