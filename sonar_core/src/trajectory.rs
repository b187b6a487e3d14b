// sonar_core/src/trajectory.rs

use crate::models::motion::{MotionModel, MotionProfile};
use crate::movement::MovementLabel;
use crate::types::{Bounds, Pose, WorldPoint};
use serde::Serialize;

/// The full dead-reckoned pose history of a log.
///
/// Holds one more pose than there are frames: index 0 is the origin and index
/// `k + 1` is the pose after applying frame `k`'s movement label. Built once,
/// up front, and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trajectory {
    poses: Vec<Pose>,
}

impl Trajectory {
    /// Dead-reckons `labels` with the default [`MotionProfile`].
    pub fn build<'a>(labels: impl IntoIterator<Item = &'a MovementLabel>) -> Self {
        Self::build_with(&MotionProfile::default(), labels)
    }

    /// Left fold of `model` over `labels`, strictly in input order.
    pub fn build_with<'a, M>(model: &M, labels: impl IntoIterator<Item = &'a MovementLabel>) -> Self
    where
        M: MotionModel + ?Sized,
    {
        let origin = Pose::origin();
        let poses = std::iter::once(origin)
            .chain(labels.into_iter().scan(origin, |pose, label| {
                *pose = model.next_pose(pose, label);
                Some(*pose)
            }))
            .collect();
        Self { poses }
    }

    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    /// Number of poses (frames + 1). Never zero, since the origin is always
    /// present.
    pub fn pose_count(&self) -> usize {
        self.poses.len()
    }

    /// Poses `0..=index`, i.e. the path driven up to and including `index`.
    pub fn path_through(&self, index: usize) -> Option<&[Pose]> {
        self.poses.get(..=index)
    }

    /// Bounding box of every position on the trajectory.
    pub fn extents(&self) -> Bounds {
        let origin = WorldPoint::origin();
        Bounds::enclosing(self.poses.iter().map(|p| &p.position)).unwrap_or(Bounds {
            min: origin,
            max: origin,
        })
    }

    pub fn into_poses(self) -> Vec<Pose> {
        self.poses
    }
}

/// Dead-reckons a label sequence into `labels.len() + 1` poses starting at the
/// origin.
pub fn build_trajectory<'a>(labels: impl IntoIterator<Item = &'a MovementLabel>) -> Vec<Pose> {
    Trajectory::build(labels).into_poses()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::motion::next_pose;
    use approx::assert_abs_diff_eq;

    fn labels(names: &[&str]) -> Vec<MovementLabel> {
        names.iter().map(|n| MovementLabel::parse(n)).collect()
    }

    #[test]
    fn empty_log_yields_only_the_origin() {
        let none: Vec<MovementLabel> = Vec::new();
        assert_eq!(build_trajectory(&none), vec![Pose::origin()]);
    }

    #[test]
    fn length_is_one_more_than_label_count() {
        let sequence = labels(&[
            "Move-Forward",
            "Slight-Right-Turn",
            "Sharp-Right-Turn",
            "Slight-Left-Turn",
            "Unknown",
            "Move-Forward",
        ]);
        for n in 0..=sequence.len() {
            let poses = build_trajectory(&sequence[..n]);
            assert_eq!(poses.len(), n + 1);
            assert_eq!(poses[0], Pose::origin());
        }
    }

    #[test]
    fn every_step_applies_the_motion_model() {
        let sequence = labels(&[
            "Slight-Left-Turn",
            "Move-Forward",
            "Sharp-Right-Turn",
            "Sharp-Right-Turn",
            "Slight-Right-Turn",
            "Bogus",
        ]);
        let trajectory = Trajectory::build(&sequence);
        for (i, label) in sequence.iter().enumerate() {
            assert_eq!(
                trajectory.poses()[i + 1],
                next_pose(&trajectory.poses()[i], label)
            );
        }
    }

    #[test]
    fn forward_then_slight_left() {
        let poses = build_trajectory(&labels(&["Move-Forward", "Slight-Left-Turn"]));

        assert_eq!(poses[0], Pose::origin());
        assert_eq!(poses[1], Pose::new(2.0, 0.0, 0.0));

        assert_eq!(poses[2].heading_deg, 10.0);
        assert_abs_diff_eq!(poses[2].x(), 2.0 + 1.5 * 10f64.to_radians().cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(poses[2].y(), 1.5 * 10f64.to_radians().sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(poses[2].x(), 3.477, epsilon = 1e-3);
        assert_abs_diff_eq!(poses[2].y(), 0.260, epsilon = 1e-3);
    }

    #[test]
    fn order_matters() {
        let a = build_trajectory(&labels(&["Sharp-Right-Turn", "Move-Forward"]));
        let b = build_trajectory(&labels(&["Move-Forward", "Sharp-Right-Turn"]));
        assert_eq!(a[2].heading_deg, b[2].heading_deg);
        assert_ne!(a[2].position, b[2].position);
    }

    #[test]
    fn path_through_is_inclusive() {
        let trajectory = Trajectory::build(&labels(&["Move-Forward"; 4]));
        assert_eq!(trajectory.path_through(0).map(<[Pose]>::len), Some(1));
        assert_eq!(trajectory.path_through(3).map(<[Pose]>::len), Some(4));
        assert_eq!(trajectory.path_through(4).map(<[Pose]>::len), Some(5));
        assert!(trajectory.path_through(5).is_none());
    }

    #[test]
    fn extents_cover_the_whole_path() {
        let trajectory = Trajectory::build(&labels(&[
            "Move-Forward",
            "Move-Forward",
            "Sharp-Right-Turn",
            "Sharp-Right-Turn",
            "Sharp-Right-Turn",
            "Sharp-Right-Turn",
            "Move-Forward",
        ]));
        let extents = trajectory.extents();
        assert_abs_diff_eq!(extents.min.x, 0.0);
        assert_abs_diff_eq!(extents.max.x, 4.0, epsilon = 1e-12);
        assert!(extents.min.y < 0.0);
    }
}
