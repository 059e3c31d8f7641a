//! Helper functions

use nalgebra::{Isometry3, UnitQuaternion, Vector3};

/// Print per-leg target vectors, one leg per row.
#[allow(dead_code)]
pub fn dump_targets(targets: &[Vector3<f64>]) {
    if targets.is_empty() {
        println!("No targets");
    }
    for (leg_idx, target) in targets.iter().enumerate() {
        println!(
            "leg {}: [{:8.3} {:8.3} {:8.3}]",
            leg_idx, target.x, target.y, target.z
        );
    }
}

pub fn dump_pose(isometry: &Isometry3<f64>) {
    // Extract translation components
    let translation = isometry.translation.vector;

    // Extract rotation components
    let rotation: UnitQuaternion<f64> = isometry.rotation;

    // Print translation and rotation
    println!(
        "x: {:.5}, y: {:.5}, z: {:.5},  quat: {:.5},{:.5},{:.5},{:.5}",
        translation.x, translation.y, translation.z, rotation.i, rotation.j, rotation.k, rotation.w
    );
}
