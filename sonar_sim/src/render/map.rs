// sonar_sim/src/render/map.rs

use bevy::prelude::*;
use sonar_core::render::MapView;

use super::{bevy_color, MapViewport, PanelLayout};
use crate::replay::CurrentFrame;

const FRAME_COLOR: Color = Color::srgba(0.3, 0.3, 0.3, 0.5);
const PATH_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.6);
const DETECTION_COLOR: Color = Color::srgba(1.0, 0.0, 0.0, 0.4);
const POSE_RADIUS: f32 = 6.0;
const OBSTACLE_RADIUS: f32 = 2.5;

/// Top-down view: path so far, pose, heading, detection circle, obstacles.
pub fn draw_map_panel(
    mut gizmos: Gizmos,
    current: Res<CurrentFrame>,
    layout: Option<Res<PanelLayout>>,
    viewport: Option<Res<MapViewport>>,
) {
    let (Some(layout), Some(viewport)) = (layout, viewport) else {
        return;
    };
    gizmos.rect_2d(
        layout.map_center,
        Vec2::splat(2.0 * layout.map_half_extent),
        FRAME_COLOR,
    );

    let Some(state) = current.0.as_ref() else {
        return;
    };
    let map = &state.map;

    draw_path(&mut gizmos, &viewport, map);

    let center = viewport.to_screen(&map.pose.position);
    gizmos.circle_2d(
        center,
        map.detection.radius as f32 * viewport.scale(),
        DETECTION_COLOR,
    );

    let obstacle_color = bevy_color(map.obstacle_color);
    for point in &map.obstacles {
        let pos = viewport.to_screen(point);
        if viewport.contains(pos) {
            gizmos.circle_2d(pos, OBSTACLE_RADIUS, obstacle_color);
        }
    }

    gizmos.circle_2d(center, POSE_RADIUS, bevy_color(state.color));
    gizmos.circle_2d(center, POSE_RADIUS + 1.0, Color::BLACK);
    gizmos
        .arrow_2d(center, viewport.to_screen(&map.heading.tip), Color::BLACK)
        .with_tip_length(8.0);
}

fn draw_path(gizmos: &mut Gizmos, viewport: &MapViewport, map: &MapView) {
    if map.path.len() < 2 {
        return;
    }
    gizmos.linestrip_2d(map.path.iter().map(|p| viewport.to_screen(p)), PATH_COLOR);
}
