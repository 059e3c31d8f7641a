extern crate nalgebra as na;

pub mod kinematics_traits {
    use super::*;
    use crate::dimension_error::DimensionError;
    use na::{Isometry3, Vector3};

    /// Pose is used as the pose of the end effector. It contains both Cartesian
    /// position and rotation quaternion
    /// ```
    /// extern crate nalgebra as na;
    /// use na::{Isometry3, Translation3, UnitQuaternion, Vector3};
    ///
    /// type Pose = Isometry3<f64>;
    ///
    /// let translation = Translation3::new(1.0, 0.0, 0.0);
    /// // The quaternion should be normalized to represent a valid rotation.
    /// let rotation = UnitQuaternion::from_quaternion(na::Quaternion::new(1.0, 0.0, 0.0, 1.0).normalize());
    /// let transform = Pose::from_parts(translation, rotation);
    /// ```
    pub type Pose = Isometry3<f64>;

    /// One target vector per leg, pointing from the leg's mount origin to the
    /// joint the leg must drive to.
    pub type JointTargets = Vec<Vector3<f64>>;

    pub trait Kinematics {
        /// Joint target vectors in the world frame, one per leg. The redundant
        /// link angles are given in degrees, one per leg; a mismatching angle
        /// count fails with [DimensionError::ShapeMismatch].
        fn joint_targets_world(
            &self,
            pose: &Pose,
            redundant_deg: &[f64],
        ) -> Result<JointTargets, DimensionError>;

        /// Joint target vectors re-expressed in each leg's own mount frame, the
        /// frame the leg's linear actuators are calibrated against.
        fn joint_targets_local(
            &self,
            pose: &Pose,
            redundant_deg: &[f64],
        ) -> Result<JointTargets, DimensionError>;
    }

    /// Source of end effector poses along a path, mapping a scalar progress
    /// parameter to a pose. Trajectory generators stay outside this library;
    /// any closure over the parameter works.
    pub trait PoseSource {
        fn pose_at(&self, s: f64) -> Pose;
    }

    impl<F> PoseSource for F
    where
        F: Fn(f64) -> Pose,
    {
        fn pose_at(&self, s: f64) -> Pose {
            self(s)
        }
    }
}
