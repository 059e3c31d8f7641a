
#[cfg(test)]
mod tests {
    use crate::dimension_error::DimensionError;
    use crate::dimensions::pppsr_kinematics::Dimensions;
    use crate::kinematic_traits::kinematics_traits::Kinematics;
    use crate::kinematics_impl::PPPSRKinematics;
    use nalgebra::{Isometry3, UnitQuaternion, Vector3};

    const READ_ERROR: &'static str = "Failed to load dimensions from file";

    #[test]
    fn test_dimensions_from_toml() {
        let filename = "src/tests/data/pppsr/unit_mounts.toml";
        let loaded = Dimensions::from_toml_file(filename).expect(READ_ERROR);

        assert_eq!(3, loaded.leg_count());
        assert_eq!(Vector3::new(1.0, 0.0, 0.0), loaded.legs()[0].mount_position);
        assert_eq!(UnitQuaternion::identity(), loaded.legs()[0].mount_orientation);
        assert_eq!(Vector3::zeros(), loaded.legs()[1].effector_offset);
        assert_eq!(0.0, loaded.legs()[2].link_length);

        // Unit mounts, no offsets, no links: at the identity pose every target
        // is the negated mount position.
        let mechanism = PPPSRKinematics::new(loaded);
        let targets = mechanism
            .joint_targets_world(&Isometry3::identity(), &[0.0, 0.0, 0.0])
            .expect("angle count matches the file");
        assert_eq!(Vector3::new(-1.0, 0.0, 0.0), targets[0]);
        assert_eq!(Vector3::new(0.0, -1.0, 0.0), targets[1]);
        assert_eq!(Vector3::new(0.0, 0.0, -1.0), targets[2]);
    }

    #[test]
    fn test_toml_round_trip() {
        let original = Dimensions::tripod_111();
        let path = std::env::temp_dir().join("pppsr_dimensions_round_trip.toml");
        original
            .save_to_toml_file(&path)
            .expect("temp dir must be writable");

        let loaded = Dimensions::from_toml_file(&path).expect(READ_ERROR);
        std::fs::remove_file(&path).expect("temp file must be removable");

        assert_eq!(original.leg_count(), loaded.leg_count());
        for (a, b) in original.legs().iter().zip(loaded.legs()) {
            assert_eq!(a.mount_position, b.mount_position);
            assert_eq!(a.effector_offset, b.effector_offset);
            assert_eq!(a.link_length, b.link_length);
            // q and -q are the same rotation, compare as rotations.
            assert!(a.mount_orientation.angle_to(&b.mount_orientation) < 1e-9);
        }
    }

    #[test]
    fn test_quaternion_component_order_on_read() {
        // O_i entries are (x, y, z, w); this one is a 90 degree turn about Z.
        let document = "\
u_i = [[0.0, 0.0, 0.0]]
O_i = [[0.0, 0.0, 0.7071067811865476, 0.7071067811865476]]
b_i = [[0.0, 0.0, 0.0]]
l_i = [0.0]
";
        let loaded = Dimensions::from_toml(document).expect(READ_ERROR);
        let rotated = loaded.legs()[0].mount_orientation * Vector3::x();
        assert!((rotated - Vector3::y()).norm() < 1e-9);
    }

    #[test]
    fn test_quaternion_component_order_on_write() {
        let quarter_turn =
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 90.0_f64.to_radians());
        let dimensions = Dimensions::from_parts(
            vec![Vector3::zeros()],
            vec![quarter_turn],
            vec![Vector3::zeros()],
            vec![0.0],
        )
        .expect("one entry per sequence");

        // (x, y, z, w): only the z and w components carry a turn about Z.
        let document = dimensions.to_toml();
        let line = document
            .lines()
            .find(|line| line.starts_with("O_i"))
            .expect("O_i must be written");
        assert_eq!(
            format!("O_i = [[0, 0, {}, {}]]", quarter_turn.k, quarter_turn.w),
            line
        );
    }

    #[test]
    fn test_rejects_unequal_lengths() {
        let filename = "src/tests/data/test/invalid_unequal_lengths.toml";
        match Dimensions::from_toml_file(filename) {
            Err(DimensionError::ShapeMismatch { expected, found }) => {
                assert_eq!(3, expected);
                assert_eq!(2, found);
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_wrong_arity() {
        let filename = "src/tests/data/test/invalid_wrong_arity.toml";
        let err = Dimensions::from_toml_file(filename).unwrap_err();
        assert!(
            matches!(err, DimensionError::ParseError(_)),
            "expected ParseError, got {:?}",
            err
        );
    }

    #[test]
    fn test_rejects_missing_field() {
        let filename = "src/tests/data/test/invalid_missing_field.toml";
        let err = Dimensions::from_toml_file(filename).unwrap_err();
        match err {
            DimensionError::ParseError(msg) => assert!(msg.contains("b_i"), "{msg}"),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_data() {
        let filename = "src/tests/data/test/invalid_not_a_number.toml";
        let err = Dimensions::from_toml_file(filename).unwrap_err();
        assert!(
            matches!(err, DimensionError::ParseError(_)),
            "expected ParseError, got {:?}",
            err
        );
    }

    #[test]
    fn test_rejects_missing_file() {
        let err = Dimensions::from_toml_file("src/tests/data/test/no_such_file.toml").unwrap_err();
        assert!(
            matches!(err, DimensionError::IoError(_)),
            "expected IoError, got {:?}",
            err
        );
    }
}
