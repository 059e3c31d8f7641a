//! Hardcoded dimensions for a few mechanisms

pub mod pppsr_kinematics {
    use crate::dimensions::pppsr_kinematics::{Dimensions, LegDimensions};
    use nalgebra::{UnitQuaternion, Vector3};

    fn z_rotation_deg(angle_deg: f64) -> UnitQuaternion<f64> {
        UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle_deg.to_radians())
    }

    #[allow(dead_code)]
    impl Dimensions {
        /// Three-legged laboratory rig, dimensions in millimetres. Legs are
        /// mounted on a 111.5 mm pitch circle at 210, 330 and 90 degrees, each
        /// mount frame turned so its actuator axes face the workspace center.
        /// The joint attachment points sit 120 degrees apart on the end effector,
        /// redundant links are 85 mm.
        pub fn tripod_111() -> Self {
            let mount = 111.5 * Vector3::x();
            let attachment = Vector3::new(-12.47, -68.15, 0.0);
            Dimensions::new(vec![
                LegDimensions {
                    mount_position: z_rotation_deg(210.0) * mount,
                    mount_orientation: z_rotation_deg(-60.0),
                    effector_offset: attachment,
                    link_length: 85.0,
                },
                LegDimensions {
                    mount_position: z_rotation_deg(330.0) * mount,
                    mount_orientation: z_rotation_deg(60.0),
                    effector_offset: z_rotation_deg(120.0) * attachment,
                    link_length: 85.0,
                },
                LegDimensions {
                    mount_position: z_rotation_deg(90.0) * mount,
                    mount_orientation: z_rotation_deg(180.0),
                    effector_offset: z_rotation_deg(240.0) * attachment,
                    link_length: 85.0,
                },
            ])
        }
    }

    /// Redundant link angles (degrees, one per leg) that place the links of
    /// [Dimensions::tripod_111] in their calibrated home direction.
    pub fn tripod_111_home_angles() -> [f64; 3] {
        [
            (-12.396_f64).atan2(84.09).to_degrees(),
            79.02_f64.atan2(-31.31).to_degrees(),
            (-66.63_f64).atan2(-52.78).to_degrees(),
        ]
    }
}
