// sonar_sim/src/render/layout.rs

//! Screen placement of the two panels and the coordinate conversions into
//! them. Everything here is pure so it can be tested without a window.

use bevy::prelude::*;
use nalgebra::Point2;
use sonar_core::types::Bounds;

/// Fraction of the available half-window a panel may fill.
const PANEL_FILL: f32 = 0.82;
/// Vertical room kept free above the panels for the caption.
const CAPTION_BAND: f32 = 40.0;

/// Where the radar and map panels sit in the 2D camera's space (logical
/// pixels, origin at the window centre, +y up).
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub radar_center: Vec2,
    pub radar_radius: f32,
    pub map_center: Vec2,
    /// Half the side length of the square map panel.
    pub map_half_extent: f32,
}

impl PanelLayout {
    /// Splits a window of `width` × `height` into two square panels.
    pub fn for_window(width: f32, height: f32) -> Self {
        let usable_height = (height - CAPTION_BAND).max(1.0);
        let half = (width / 4.0).min(usable_height / 2.0) * PANEL_FILL;
        let y = -CAPTION_BAND / 2.0;
        Self {
            radar_center: Vec2::new(-width / 4.0, y),
            radar_radius: half,
            map_center: Vec2::new(width / 4.0, y),
            map_half_extent: half,
        }
    }

    /// Radar position of a `range` at `bearing_rad`, scaled so `radial_max`
    /// lands on the panel rim.
    ///
    /// The radar puts 0° at the bottom of the panel and lets bearings grow
    /// clockwise, so the robot's rear (sensor 0 at 180°) points up.
    pub fn radar_point(&self, bearing_rad: f64, range: f64, radial_max: f64) -> Vec2 {
        let scale = self.radar_radius / radial_max as f32;
        let (sin, cos) = (bearing_rad as f32).sin_cos();
        self.radar_center + Vec2::new(-sin, -cos) * (range as f32 * scale)
    }
}

/// Fixed world-to-screen mapping for the map panel, fitted once to the whole
/// trajectory so the view stays still while the path grows.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    world_center: Point2<f64>,
    /// Screen pixels per world unit. Equal on both axes.
    scale: f32,
    screen_center: Vec2,
    half_extent: f32,
}

impl MapViewport {
    /// Fits `extents`, grown by `margin` on every side, into the map panel.
    pub fn fit(extents: &Bounds, margin: f64, layout: &PanelLayout) -> Self {
        let framed = extents.expanded(margin);
        let span = framed.width().max(framed.height()).max(f64::EPSILON);
        Self {
            world_center: framed.center(),
            scale: (2.0 * layout.map_half_extent) / span as f32,
            screen_center: layout.map_center,
            half_extent: layout.map_half_extent,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, point: &Point2<f64>) -> Vec2 {
        let offset = *point - self.world_center;
        self.screen_center + Vec2::new(offset.x as f32, offset.y as f32) * self.scale
    }

    /// Whether a screen position falls inside the map panel.
    pub fn contains(&self, screen: Vec2) -> bool {
        let d = (screen - self.screen_center).abs();
        d.x <= self.half_extent && d.y <= self.half_extent
    }
}
