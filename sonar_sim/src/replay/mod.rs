// sonar_sim/src/replay/mod.rs

//! The animation driver: owns the playback cursor and pacing, and asks the
//! core renderer for one `RenderState` per frame, strictly in order.

mod cursor;
mod systems;

pub use cursor::PlaybackCursor;

use bevy::prelude::*;
use sonar_core::render::RenderState;
use std::time::Duration;

use crate::app_state::{PlaybackState, ReplaySet};

/// How the cursor moves between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// One frame per elapsed interval, with keyboard controls.
    Interval(Duration),
    /// One frame per app update, as fast as possible (headless runs).
    Unpaced,
}

/// The `RenderState` of the frame under the cursor. Rebuilt whenever the
/// cursor moves, never patched in place.
#[derive(Resource, Debug, Default)]
pub struct CurrentFrame(pub Option<RenderState>);

/// Repeating timer that paces `Pacing::Interval` playback.
#[derive(Resource, Debug)]
pub struct FrameClock(pub Timer);

/// Expects a `sonar_core::Replay` resource to be inserted by the caller.
pub struct ReplayPlugin {
    pub pacing: Pacing,
}

impl Plugin for ReplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CurrentFrame>()
            .configure_sets(
                Update,
                (
                    ReplaySet::Input,
                    ReplaySet::Render,
                    ReplaySet::Present,
                    ReplaySet::Advance,
                )
                    .chain(),
            )
            .add_systems(Startup, systems::announce_replay)
            .add_systems(
                Update,
                systems::render_current_frame
                    .in_set(ReplaySet::Render)
                    .run_if(resource_changed::<PlaybackCursor>),
            )
            .add_systems(OnEnter(PlaybackState::Finished), systems::log_finished);

        match self.pacing {
            Pacing::Interval(interval) => {
                app.insert_resource(FrameClock(Timer::new(interval, TimerMode::Repeating)))
                    .add_systems(
                        Update,
                        (
                            systems::playback_controls.in_set(ReplaySet::Input),
                            systems::advance_on_clock
                                .in_set(ReplaySet::Advance)
                                .run_if(in_state(PlaybackState::Playing)),
                        ),
                    );
            }
            Pacing::Unpaced => {
                app.add_systems(
                    Update,
                    systems::advance_every_update
                        .in_set(ReplaySet::Advance)
                        .run_if(in_state(PlaybackState::Playing)),
                );
            }
        }
    }
}
