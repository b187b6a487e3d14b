// sonar_sim/src/app_state.rs

use bevy::{ecs::schedule::SystemSet, prelude::States};

/// Where the replay driver is in its run.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum PlaybackState {
    /// Frames advance on every tick of the frame clock.
    #[default]
    Playing,

    /// The current frame stays on screen; single steps are still allowed.
    Paused,

    /// The last frame has been shown. Nothing advances until a restart.
    Finished,
}

// =========================================================================
// == Per-Frame Sets (The "Data Flow Graph") ==
// =========================================================================

/// System sets that order one tick of the replay. They are chained, so a
/// frame is always fully rendered before anything reads it, and the cursor
/// only moves after the current frame has been drawn.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReplaySet {
    /// Keyboard controls (pause, step, restart).
    Input,
    /// Recompute the `RenderState` when the cursor moved.
    Render,
    /// Consume the current `RenderState` (gizmos, captions, export buffer).
    Present,
    /// Move the cursor forward according to the pacing policy.
    Advance,
}
