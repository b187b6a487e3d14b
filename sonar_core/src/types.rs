// sonar_core/src/types.rs

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

// --- Core Type Aliases ---
/// A position in the fixed world frame.
pub type WorldPoint = Point2<f64>;
/// A sensor return projected into the world frame. Never persisted.
pub type ObstaclePoint = WorldPoint;

/// Unit vector pointing along `angle_rad`, measured counter-clockwise from +x.
pub(crate) fn direction(angle_rad: f64) -> Vector2<f64> {
    Vector2::new(angle_rad.cos(), angle_rad.sin())
}

// =========================================================================
// == Pose ==
// =========================================================================

/// A planar robot pose in the world frame.
///
/// `heading_deg` uses the math convention: 0° faces +x and the angle grows
/// counter-clockwise, so a left turn increases it and a right turn decreases
/// it. Headings accumulate and are never wrapped into a fixed range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: WorldPoint,
    pub heading_deg: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, heading_deg: f64) -> Self {
        Self {
            position: WorldPoint::new(x, y),
            heading_deg,
        }
    }

    /// The fixed start of every trajectory: `{0, 0, 0°}`.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn heading_rad(&self) -> f64 {
        self.heading_deg.to_radians()
    }

    /// Point reached by moving `distance` units from this pose along its heading.
    pub fn ahead(&self, distance: f64) -> WorldPoint {
        self.position + direction(self.heading_rad()) * distance
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::origin()
    }
}

// =========================================================================
// == Bounds ==
// =========================================================================

/// Axis-aligned box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: WorldPoint,
    pub max: WorldPoint,
}

impl Bounds {
    /// Smallest box containing every finite point, or `None` if there are none.
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a WorldPoint>) -> Option<Self> {
        points
            .into_iter()
            .filter(|p| p.x.is_finite() && p.y.is_finite())
            .fold(None, |bounds: Option<Bounds>, p| {
                Some(match bounds {
                    None => Bounds { min: *p, max: *p },
                    Some(b) => Bounds {
                        min: WorldPoint::new(b.min.x.min(p.x), b.min.y.min(p.y)),
                        max: WorldPoint::new(b.max.x.max(p.x), b.max.y.max(p.y)),
                    },
                })
            })
    }

    /// Grows the box by `margin` on every side.
    pub fn expanded(&self, margin: f64) -> Self {
        Self {
            min: WorldPoint::new(self.min.x - margin, self.min.y - margin),
            max: WorldPoint::new(self.max.x + margin, self.max.y + margin),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> WorldPoint {
        nalgebra::center(&self.min, &self.max)
    }
}
