// sonar_sim/src/replay/systems.rs

use bevy::prelude::*;
use sonar_core::geometry::SENSOR_COUNT;
use sonar_core::Replay;

use super::{CurrentFrame, FrameClock, PlaybackCursor};
use crate::app_state::PlaybackState;

/// Logs a summary of the loaded log once at startup.
pub fn announce_replay(replay: Res<Replay>) {
    let log = replay.log();
    info!(
        "Loaded dataset with {} frames and {} sensors.",
        log.len(),
        SENSOR_COUNT
    );
    if log.coerced_readings() > 0 {
        warn!(
            "{} readings could not be parsed and were replaced by NaN.",
            log.coerced_readings()
        );
    }
    let unknown = unknown_label_count(&replay);
    if unknown > 0 {
        warn!(
            "{} frames carry an unrecognised movement label; the robot holds its pose on them.",
            unknown
        );
    }
    let trajectory = replay.trajectory();
    if let Some(end) = trajectory.poses().last() {
        debug!(
            "Dead-reckoned {} poses, ending at ({:.3}, {:.3}) heading {:.1}°",
            trajectory.pose_count(),
            end.x(),
            end.y(),
            end.heading_deg
        );
    }
}

/// Frames whose label falls outside the motion table.
pub fn unknown_label_count(replay: &Replay) -> usize {
    replay.log().labels().filter(|label| !label.is_known()).count()
}

/// Rebuilds the `RenderState` for the frame under the cursor.
pub fn render_current_frame(
    replay: Res<Replay>,
    cursor: Res<PlaybackCursor>,
    mut current: ResMut<CurrentFrame>,
    mut next_state: ResMut<NextState<PlaybackState>>,
) {
    match replay.render(cursor.frame()) {
        Ok(state) => current.0 = Some(state),
        Err(e) => {
            // The cursor is sized from the same log, so this is a driver bug.
            error!("Failed to render frame: {}", e);
            current.0 = None;
            next_state.set(PlaybackState::Finished);
        }
    }
}

/// Space pauses/resumes, Right arrow steps one frame while paused, R restarts.
pub fn playback_controls(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<PlaybackState>>,
    mut next_state: ResMut<NextState<PlaybackState>>,
    mut cursor: ResMut<PlaybackCursor>,
    mut clock: ResMut<FrameClock>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        cursor.restart();
        clock.0.reset();
        next_state.set(PlaybackState::Playing);
        info!("[Playback] Restarted from frame 1");
        return;
    }

    match state.get() {
        PlaybackState::Playing if keyboard.just_pressed(KeyCode::Space) => {
            next_state.set(PlaybackState::Paused);
            info!("[Playback] Paused at frame {}", cursor.frame() + 1);
        }
        PlaybackState::Paused if keyboard.just_pressed(KeyCode::Space) => {
            clock.0.reset();
            next_state.set(PlaybackState::Playing);
            info!("[Playback] Resumed");
        }
        PlaybackState::Paused if keyboard.just_pressed(KeyCode::ArrowRight) => {
            if !cursor.is_last() {
                cursor.advance();
            }
        }
        _ => {}
    }
}

/// Paced driver: one frame per elapsed interval.
pub fn advance_on_clock(
    time: Res<Time>,
    mut clock: ResMut<FrameClock>,
    mut cursor: ResMut<PlaybackCursor>,
    mut next_state: ResMut<NextState<PlaybackState>>,
) {
    if !clock.0.tick(time.delta()).just_finished() {
        return;
    }
    step_or_finish(&mut cursor, &mut next_state);
}

/// Unpaced driver: one frame per update.
pub fn advance_every_update(
    mut cursor: ResMut<PlaybackCursor>,
    mut next_state: ResMut<NextState<PlaybackState>>,
) {
    step_or_finish(&mut cursor, &mut next_state);
}

fn step_or_finish(
    cursor: &mut ResMut<PlaybackCursor>,
    next_state: &mut ResMut<NextState<PlaybackState>>,
) {
    // `is_last` only derefs immutably, so the final frame is not marked changed.
    if cursor.is_last() {
        next_state.set(PlaybackState::Finished);
    } else {
        cursor.advance();
    }
}

pub fn log_finished(cursor: Res<PlaybackCursor>) {
    info!(
        "[Playback] Finished at frame {}/{}",
        cursor.frame() + 1,
        cursor.frame_count()
    );
}
