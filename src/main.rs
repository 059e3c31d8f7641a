use nalgebra::{Isometry3, Translation3, UnitQuaternion, Vector3};
use rs_pppsr_kinematics::dimensions::pppsr_kinematics::Dimensions;
use rs_pppsr_kinematics::dimensions_mechanisms::pppsr_kinematics::tripod_111_home_angles;
use rs_pppsr_kinematics::kinematic_traits::kinematics_traits::{Kinematics, Pose, PoseSource};
use rs_pppsr_kinematics::kinematics_impl::PPPSRKinematics;
use rs_pppsr_kinematics::utils::{dump_pose, dump_targets};
use std::f64::consts::TAU;

/// Usage example.
fn main() -> anyhow::Result<()> {
    let mechanism = PPPSRKinematics::new(Dimensions::tripod_111());
    let home_angles = tripod_111_home_angles();

    let pose: Pose = Isometry3::identity(); // Pose is alias of nalgebra::Isometry3<f64>
    println!("End effector at the home pose:");
    dump_pose(&pose);

    println!("Joint targets in the world frame:");
    let world = mechanism.joint_targets_world(&pose, &home_angles)?;
    dump_targets(&world);

    println!("Same targets in the mount frame of each leg:");
    let local = mechanism.joint_targets_local(&pose, &home_angles)?;
    dump_targets(&local);

    // Any closure over a progress parameter works as a pose source. Here a
    // 10 mm circle in the horizontal plane, sampled at a few points.
    let circle = |s: f64| {
        Pose::from_parts(
            Translation3::new(10.0 * (TAU * s).cos(), 10.0 * (TAU * s).sin(), 0.0),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), 0.0),
        )
    };
    println!("Leg 0 targets along a 10 mm circle:");
    for step in 0..4 {
        let pose = circle.pose_at(step as f64 / 4.0);
        let local = mechanism.joint_targets_local(&pose, &home_angles)?;
        dump_targets(&local[0..1]);
    }

    #[cfg(feature = "allow_filesystem")]
    {
        // This requires the TOML library
        println!("Dimensions as TOML:\n{}", mechanism.dimensions().to_toml());
    }
    Ok(())
}
