// sonar_sim/src/render/caption.rs

use bevy::prelude::*;
use sonar_core::render::MAP_TITLE;

use super::bevy_color;
use crate::config::ViewerConfig;
use crate::replay::CurrentFrame;

/// Which caption a text entity shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionSlot {
    Title,
    Radar,
    Map,
}

pub fn spawn_captions(mut commands: Commands, config: Res<ViewerConfig>) {
    let width = config.window.width;
    let quarter = width / 4.0;

    let slots = [
        (CaptionSlot::Title, "", width / 2.0 - 220.0, 8.0, 22.0),
        (CaptionSlot::Radar, "Radar View", quarter - 120.0, 36.0, 17.0),
        (CaptionSlot::Map, MAP_TITLE, 3.0 * quarter - 90.0, 36.0, 17.0),
    ];

    for (slot, text, left, top, font_size) in slots {
        commands.spawn((
            Text::new(text),
            TextFont {
                font_size,
                ..default()
            },
            TextColor(Color::BLACK),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(left.max(0.0)),
                top: Val::Px(top),
                ..default()
            },
            slot,
        ));
    }
}

/// Rewrites the caption texts whenever a new frame was rendered.
pub fn update_captions(
    current: Res<CurrentFrame>,
    mut query: Query<(&CaptionSlot, &mut Text, &mut TextColor)>,
) {
    let Some(state) = current.0.as_ref() else {
        return;
    };
    for (slot, mut text, mut color) in &mut query {
        match slot {
            CaptionSlot::Title => text.0 = state.caption.title(),
            CaptionSlot::Radar => {
                text.0 = state.radar.title.clone();
                color.0 = bevy_color(state.color);
            }
            CaptionSlot::Map => text.0 = state.map.title.clone(),
        }
    }
}
