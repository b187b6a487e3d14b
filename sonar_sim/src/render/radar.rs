// sonar_sim/src/render/radar.rs

use bevy::prelude::*;
use sonar_core::render::RadarView;

use super::{bevy_color, PanelLayout};
use crate::replay::CurrentFrame;

const GRID_RINGS: usize = 4;
const GRID_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 0.35);
const FILL_ALPHA: f32 = 0.15;
const CLOSE_MARKER_RADIUS: f32 = 4.0;
const CLOSE_MARKER_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Polar view of the current frame's 24 readings.
pub fn draw_radar_panel(
    mut gizmos: Gizmos,
    current: Res<CurrentFrame>,
    layout: Option<Res<PanelLayout>>,
) {
    let Some(layout) = layout else {
        return;
    };
    draw_grid(&mut gizmos, &layout);

    let Some(state) = current.0.as_ref() else {
        return;
    };
    let radar = &state.radar;
    let Some(radial_max) = radar.radial_max else {
        // No finite reading anywhere in the log: nothing to scale against.
        return;
    };

    let color = bevy_color(state.color);
    draw_outline(&mut gizmos, &layout, radar, radial_max, color);

    for vertex in radar.close_vertices() {
        let pos = layout.radar_point(vertex.bearing_rad, vertex.range, radial_max);
        gizmos.circle_2d(pos, CLOSE_MARKER_RADIUS, CLOSE_MARKER_COLOR);
    }
}

fn draw_grid(gizmos: &mut Gizmos, layout: &PanelLayout) {
    for ring in 1..=GRID_RINGS {
        let radius = layout.radar_radius * ring as f32 / GRID_RINGS as f32;
        gizmos.circle_2d(layout.radar_center, radius, GRID_COLOR);
    }
    // Spokes every 45°.
    for spoke in 0..8 {
        let angle = spoke as f64 * std::f64::consts::FRAC_PI_4;
        let rim = layout.radar_point(angle, 1.0, 1.0);
        gizmos.line_2d(layout.radar_center, rim, GRID_COLOR);
    }
}

/// The coloured outline, broken wherever a reading is missing, plus
/// translucent spokes standing in for the polygon fill.
fn draw_outline(
    gizmos: &mut Gizmos,
    layout: &PanelLayout,
    radar: &RadarView,
    radial_max: f64,
    color: Color,
) {
    for run in radar.outline_runs() {
        let points = run
            .iter()
            .map(|v| layout.radar_point(v.bearing_rad, v.range, radial_max));
        gizmos.linestrip_2d(points, color);
    }

    let fill = color.with_alpha(FILL_ALPHA);
    for vertex in radar.vertices.iter().filter(|v| v.range.is_finite()) {
        let pos = layout.radar_point(vertex.bearing_rad, vertex.range, radial_max);
        gizmos.line_2d(layout.radar_center, pos, fill);
    }
}
