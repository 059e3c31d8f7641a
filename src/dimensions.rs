//! Defines the PPPSR dimension data structures

pub mod pppsr_kinematics {
    use crate::dimension_error::DimensionError;
    use nalgebra::{UnitQuaternion, Vector3};

    /// Fixed dimensions of a single leg of the mechanism.
    #[derive(Debug, Clone, Copy)]
    pub struct LegDimensions {
        /// Position of the leg's mounting point in the world frame.
        pub mount_position: Vector3<f64>,

        /// Fixed orientation of the leg's mount frame relative to the world frame.
        /// The linear actuators of the leg are calibrated in this frame.
        pub mount_orientation: UnitQuaternion<f64>,

        /// Vector from the end effector reference point to the leg's joint
        /// attachment point, expressed in the end effector body frame.
        pub effector_offset: Vector3<f64>,

        /// Length of the leg's redundant rotating link.
        pub link_length: f64,
    }

    /// Fixed dimensions of the complete mechanism, one entry per leg.
    /// See [dimensions_mechanisms.rs](dimensions_mechanisms.rs) for concrete mechanisms.
    ///
    /// The value is immutable once constructed: there are no mutators, and read
    /// access hands out shared references only. A "changed" mechanism is a newly
    /// constructed value. This makes it safe to share between threads without
    /// locking.
    #[derive(Debug, Clone)]
    pub struct Dimensions {
        legs: Vec<LegDimensions>,
    }

    impl Dimensions {
        /// Creates the dimensions from per-leg records. The number of legs is
        /// fixed from here on (three for the mechanisms this library was written
        /// for, but any count works).
        pub fn new(legs: Vec<LegDimensions>) -> Self {
            Dimensions { legs }
        }

        /// Creates the dimensions from four parallel sequences, one entry per leg
        /// in each. Fails with [DimensionError::ShapeMismatch] if the sequences do
        /// not all have the same length. No other validation is performed; any
        /// real value is accepted, including zero or negative link lengths.
        pub fn from_parts(
            mount_positions: Vec<Vector3<f64>>,
            mount_orientations: Vec<UnitQuaternion<f64>>,
            effector_offsets: Vec<Vector3<f64>>,
            link_lengths: Vec<f64>,
        ) -> Result<Self, DimensionError> {
            let expected = mount_positions.len();
            for found in [
                mount_orientations.len(),
                effector_offsets.len(),
                link_lengths.len(),
            ] {
                if found != expected {
                    return Err(DimensionError::ShapeMismatch { expected, found });
                }
            }

            let legs = mount_positions
                .into_iter()
                .zip(mount_orientations)
                .zip(effector_offsets)
                .zip(link_lengths)
                .map(
                    |(((mount_position, mount_orientation), effector_offset), link_length)| {
                        LegDimensions {
                            mount_position,
                            mount_orientation,
                            effector_offset,
                            link_length,
                        }
                    },
                )
                .collect();
            Ok(Dimensions { legs })
        }

        /// The per-leg dimension records.
        pub fn legs(&self) -> &[LegDimensions] {
            &self.legs
        }

        /// Number of legs of the mechanism.
        pub fn leg_count(&self) -> usize {
            self.legs.len()
        }

        /// Convert to the TOML representation (quick viewing, persistence).
        /// Floats are written in their shortest round trip form, so a value read
        /// back from this document compares equal to the original.
        ///
        /// Keys follow the mechanism notation: `u_i` mount positions, `O_i` mount
        /// orientations as (x, y, z, w) quaternions, `b_i` effector offsets,
        /// `l_i` link lengths.
        pub fn to_toml(&self) -> String {
            fn triple(v: &Vector3<f64>) -> String {
                format!("[{}, {}, {}]", v.x, v.y, v.z)
            }
            fn quat(q: &UnitQuaternion<f64>) -> String {
                format!("[{}, {}, {}, {}]", q.i, q.j, q.k, q.w)
            }
            fn list(items: Vec<String>) -> String {
                format!("[{}]", items.join(", "))
            }
            format!(
                "u_i = {}\nO_i = {}\nb_i = {}\nl_i = {}\n",
                list(self.legs.iter().map(|l| triple(&l.mount_position)).collect()),
                list(self.legs.iter().map(|l| quat(&l.mount_orientation)).collect()),
                list(self.legs.iter().map(|l| triple(&l.effector_offset)).collect()),
                list(self.legs.iter().map(|l| l.link_length.to_string()).collect()),
            )
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn leg_sequences() -> (
            Vec<Vector3<f64>>,
            Vec<UnitQuaternion<f64>>,
            Vec<Vector3<f64>>,
            Vec<f64>,
        ) {
            (
                vec![Vector3::x(), Vector3::y(), Vector3::z()],
                vec![UnitQuaternion::identity(); 3],
                vec![Vector3::zeros(); 3],
                vec![0.5; 3],
            )
        }

        #[test]
        fn test_from_parts_equal_lengths() {
            let (u, o, b, l) = leg_sequences();
            let dimensions = Dimensions::from_parts(u, o, b, l).expect("equal lengths must pass");
            assert_eq!(3, dimensions.leg_count());
            assert_eq!(Vector3::y(), dimensions.legs()[1].mount_position);
            assert_eq!(0.5, dimensions.legs()[2].link_length);
        }

        #[test]
        fn test_from_parts_rejects_unequal_lengths() {
            let (u, o, b, mut l) = leg_sequences();
            l.pop();
            match Dimensions::from_parts(u, o, b, l) {
                Err(DimensionError::ShapeMismatch { expected, found }) => {
                    assert_eq!(3, expected);
                    assert_eq!(2, found);
                }
                other => panic!("expected ShapeMismatch, got {:?}", other.map(|_| ())),
            }
        }
    }
}
