// sonar_core/src/prelude.rs

// --- Core Abstractions ---
pub use crate::models::motion::{next_pose, MotionModel, MotionProfile};

// --- Core Data Structures ---
pub use crate::dataset::{Readings, SensorFrame, SensorLog};
pub use crate::geometry::{SensorGeometry, DEFAULT_BEARINGS_DEG, SENSOR_COUNT};
pub use crate::legend::DisplayColor;
pub use crate::movement::MovementLabel;
pub use crate::trajectory::{build_trajectory, Trajectory};
pub use crate::types::{Bounds, ObstaclePoint, Pose, WorldPoint};

// --- Pipeline ---
pub use crate::config::ReplayConfig;
pub use crate::error::{DatasetError, GeometryError, RenderError, ReplayError};
pub use crate::projection::project;
pub use crate::render::{FrameRenderer, RenderState};
pub use crate::replay::Replay;
