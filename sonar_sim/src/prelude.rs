// sonar_sim/src/prelude.rs

// Re-export the entire Bevy prelude for convenience.
pub use bevy::prelude::*;

// Re-export the sonar_core prelude so pure types like `Pose`, `Trajectory`
// and `RenderState` are one import away.
pub use sonar_core::prelude::*;

// Re-export common host-side types.
pub use crate::app_state::{PlaybackState, ReplaySet};
pub use crate::cli::Cli;
pub use crate::config::{PlaybackConfig, ViewerConfig, WindowConfig};
pub use crate::export::{ExportBuffer, HeadlessExportPlugin, ReplayExport};
pub use crate::render::{MapViewport, PanelLayout, PanelsPlugin};
pub use crate::replay::{CurrentFrame, Pacing, PlaybackCursor, ReplayPlugin};
pub use crate::{build_app, SonarReplayPlugin};
