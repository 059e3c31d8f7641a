//! Rust implementation of the inverse kinematics geometry for redundant PPP-SR
//! parallel mechanisms
//!
//! The mechanism has three (or more) leg assemblies connecting a fixed base to a
//! common end effector. Each leg combines linear actuation with a rotating
//! redundant link of fixed length that terminates in the joint attached to the
//! end effector. Given the fixed dimensions of the mechanism and a commanded
//! end effector pose together with the redundant link angles, this library
//! computes the vector each leg must drive its joint to, first in the common
//! world frame and then in the leg's own mount frame (the frame the physical
//! linear axes are calibrated against).
//!
//! # Features
//!
//! - Joint targets are returned for all legs at once; a mismatch between the
//!   leg count and the supplied angle count is rejected, never truncated.
//! - The dimension set is immutable once constructed and safe to share
//!   read-only between threads without locking.
//! - Dimensions can be saved to and loaded from TOML files, with quaternions
//!   persisted in (x, y, z, w) component order.
//! - Trajectory generation and device I/O stay outside: the library only
//!   consumes a pose per query and emits per-leg target vectors.
//!
//! # Dimensions
//!
//! Four dimensions describe each leg: the mount position and mount orientation
//! of the leg's base frame in the world, the attachment offset from the end
//! effector reference point to the leg's joint (in the end effector body
//! frame), and the redundant link length. Fill out a
//! `pppsr_kinematics::Dimensions` structure, or load one from a TOML file.

pub mod dimensions;
pub mod dimensions_mechanisms;

#[cfg(feature = "allow_filesystem")]
pub mod dimensions_from_file;

pub mod dimension_error;

pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
