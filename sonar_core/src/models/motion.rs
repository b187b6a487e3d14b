// sonar_core/src/models/motion.rs

use crate::movement::MovementLabel;
use crate::types::Pose;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// The contract for anything that turns one movement command into a pose
/// increment.
///
/// Implementations must be pure and total: every label, including unknown
/// ones, maps to a defined pose, and identical inputs give bit-identical
/// outputs.
pub trait MotionModel: Debug + Send + Sync {
    fn next_pose(&self, pose: &Pose, label: &MovementLabel) -> Pose;
}

/// Step sizes of the discrete dead-reckoning model.
///
/// | Label             | Heading change       | Translation                         |
/// |-------------------|----------------------|-------------------------------------|
/// | Move-Forward      | none                 | `forward_step` along current heading |
/// | Slight-Right-Turn | `-slight_turn_deg`   | `slight_turn_step` along new heading |
/// | Sharp-Right-Turn  | `-sharp_turn_deg`    | none (rotate in place)              |
/// | Slight-Left-Turn  | `+slight_turn_deg`   | `slight_turn_step` along new heading |
/// | anything else     | none                 | none                                |
///
/// The slight turns translate along the *post-turn* heading while the sharp
/// turn does not translate at all. The recorded motion semantics depend on
/// that asymmetry, so it must not be "fixed".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionProfile {
    pub forward_step: f64,
    pub slight_turn_deg: f64,
    pub slight_turn_step: f64,
    pub sharp_turn_deg: f64,
}

impl Default for MotionProfile {
    fn default() -> Self {
        Self {
            forward_step: 2.0,
            slight_turn_deg: 10.0,
            slight_turn_step: 1.5,
            sharp_turn_deg: 25.0,
        }
    }
}

impl MotionModel for MotionProfile {
    fn next_pose(&self, pose: &Pose, label: &MovementLabel) -> Pose {
        match label {
            MovementLabel::MoveForward => translate(pose.heading_deg, pose, self.forward_step),
            MovementLabel::SlightRightTurn => {
                translate(pose.heading_deg - self.slight_turn_deg, pose, self.slight_turn_step)
            }
            MovementLabel::SharpRightTurn => Pose {
                heading_deg: pose.heading_deg - self.sharp_turn_deg,
                ..*pose
            },
            MovementLabel::SlightLeftTurn => {
                translate(pose.heading_deg + self.slight_turn_deg, pose, self.slight_turn_step)
            }
            MovementLabel::Other(_) => *pose,
        }
    }
}

/// Sets the heading to `heading_deg`, then advances `distance` along it.
fn translate(heading_deg: f64, pose: &Pose, distance: f64) -> Pose {
    let turned = Pose {
        heading_deg,
        ..*pose
    };
    Pose {
        position: turned.ahead(distance),
        ..turned
    }
}

/// Applies the default [`MotionProfile`] to a single pose.
pub fn next_pose(pose: &Pose, label: &MovementLabel) -> Pose {
    MotionProfile::default().next_pose(pose, label)
}
