// sonar_sim/src/render/mod.rs

//! Draws the current `RenderState` into a window: the polar radar on the
//! left, the top-down map on the right, and a caption overlay. Drawing is
//! immediate-mode gizmos, so every system here only reads `CurrentFrame`.

mod caption;
mod layout;
mod map;
mod radar;

pub use layout::{MapViewport, PanelLayout};

use bevy::prelude::*;
use sonar_core::legend::DisplayColor;
use sonar_core::Replay;

use crate::app_state::ReplaySet;
use crate::config::ViewerConfig;
use crate::replay::CurrentFrame;

/// Converts a core display colour into a Bevy colour.
pub fn bevy_color(color: DisplayColor) -> Color {
    let [r, g, b] = color.srgb();
    Color::srgb(r, g, b)
}

pub struct PanelsPlugin;

impl Plugin for PanelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_panels, caption::spawn_captions))
            .add_systems(
                Update,
                (
                    radar::draw_radar_panel,
                    map::draw_map_panel,
                    caption::update_captions.run_if(resource_changed::<CurrentFrame>),
                )
                    .in_set(ReplaySet::Present),
            );
    }
}

/// Spawns the camera and fixes the panel layout and map viewport for the
/// whole run.
fn setup_panels(mut commands: Commands, config: Res<ViewerConfig>, replay: Res<Replay>) {
    commands.spawn(Camera2d);

    let layout = PanelLayout::for_window(config.window.width, config.window.height);

    // Leave room for the detection circle and the longest projected return.
    let renderer = replay.renderer();
    let margin = replay
        .config()
        .obstacle_threshold
        .max(renderer.radial_max().unwrap_or(0.0))
        .max(replay.config().heading_arrow_length);
    let viewport = MapViewport::fit(&replay.trajectory().extents(), margin, &layout);
    debug!(
        "Map viewport fitted with margin {:.2} ({:.3} px per unit)",
        margin,
        viewport.scale()
    );

    commands.insert_resource(layout);
    commands.insert_resource(viewport);
}
