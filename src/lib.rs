//! Rust implementation of inverse and forward kinematics for 3-link planar robotic arms,
//! with smooth joint space trajectories between end-effector poses.
//!
//! The arm has three revolute joints rotating in the same plane. Each joint angle is
//! measured relative to the previous link, the first one relative to the fixed base.
//! The end-effector pose consists of the tip position and the heading of the last link.
//!
//! # Features
//!
//! - Closed form inverse kinematics. Both elbow branches are available, and the branch
//!   returned by default is chosen by an explicit, configurable policy.
//! - Reachability check: poses whose wrist center is outside the annulus reachable by the
//!   first two links are reported as errors, as are degenerate configurations. No NaN
//!   values are ever returned.
//! - Forward kinematics to the end-effector pose or to the positions of all joints.
//! - Smooth trajectories that start and end at rest (clamped cubic per joint), sampled
//!   lazily and restartable.
//! - Marker polygon and timed frames for external renderers.
//! - Optional reading of the arm and poses from YAML files.
//!
//! # Parameters
//!
//! The arm is described by three link lengths `l1`, `l2`, `l3`, all strictly positive.
//! The base is at the origin of the arm frame; with all joints at zero, the arm lies
//! along the +x axis.
//!
//! ```
//! use rs_planar_kinematics::kinematic_traits::{Kinematics, Pose};
//! use rs_planar_kinematics::kinematics_impl::PlanarKinematics;
//! use rs_planar_kinematics::parameters::planar_kinematics::LinkLengths;
//!
//! let robot = PlanarKinematics::new(LinkLengths::new(3.0, 2.0, 1.2).unwrap());
//! let joints = robot.inverse(&Pose::from_degrees(3.0, 2.0, -90.0)).unwrap();
//! let pose = robot.forward(&joints);
//! assert!((pose.x - 3.0).abs() < 1E-9 && (pose.y - 2.0).abs() < 1E-9);
//! ```

pub mod parameters;
pub mod parameters_arms;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod kinematics_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;

#[path = "path_plan/interpolator.rs"]
pub mod interpolator;

#[path = "path_plan/motion.rs"]
pub mod motion;

#[path = "visualize/marker.rs"]
pub mod marker;

#[path = "visualize/animation.rs"]
pub mod animation;

#[cfg(test)]
mod tests;
