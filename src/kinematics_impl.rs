//! Computes the per-leg joint targets for a commanded end effector pose.

use crate::dimension_error::DimensionError;
use crate::dimensions::pppsr_kinematics::Dimensions;
use crate::kinematic_traits::kinematics_traits::{JointTargets, Kinematics, Pose};
use nalgebra::{Point3, UnitQuaternion, Vector3};

/// Inverse kinematics geometry of a PPP-SR mechanism: linear actuators on every
/// leg, each leg carrying a rotating redundant link of fixed length that ends in
/// the joint attached to the end effector.
///
/// The redundant link lies along the local X axis at zero angle and swings about
/// the local Z axis of the end effector body frame. The link rotation is applied
/// before the end effector orientation: the link swings within the end effector
/// body, not within the world.
pub struct PPPSRKinematics {
    dimensions: Dimensions,
}

impl PPPSRKinematics {
    /// Creates a new `PPPSRKinematics` instance with the given dimensions.
    pub fn new(dimensions: Dimensions) -> Self {
        PPPSRKinematics { dimensions }
    }

    /// The fixed dimensions this instance was created with.
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    fn check_angle_count(&self, redundant_deg: &[f64]) -> Result<(), DimensionError> {
        let expected = self.dimensions.leg_count();
        let found = redundant_deg.len();
        if found != expected {
            return Err(DimensionError::ShapeMismatch { expected, found });
        }
        Ok(())
    }
}

impl Kinematics for PPPSRKinematics {
    fn joint_targets_world(
        &self,
        pose: &Pose,
        redundant_deg: &[f64],
    ) -> Result<JointTargets, DimensionError> {
        self.check_angle_count(redundant_deg)?;

        let targets = self
            .dimensions
            .legs()
            .iter()
            .zip(redundant_deg)
            .map(|(leg, angle_deg)| {
                // Reach of the redundant link, swung about Z in the end effector body frame.
                let link = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle_deg.to_radians())
                    * Vector3::new(leg.link_length, 0.0, 0.0);
                let attachment = pose.transform_point(&Point3::from(leg.effector_offset - link));
                attachment.coords - leg.mount_position
            })
            .collect();
        Ok(targets)
    }

    fn joint_targets_local(
        &self,
        pose: &Pose,
        redundant_deg: &[f64],
    ) -> Result<JointTargets, DimensionError> {
        let targets = self
            .joint_targets_world(pose, redundant_deg)?
            .iter()
            .zip(self.dimensions.legs())
            .map(|(target, leg)| leg.mount_orientation.inverse_transform_vector(target))
            .collect();
        Ok(targets)
    }
}
