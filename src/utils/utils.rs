//! Helper functions

use crate::kinematic_traits::{JointPositions, Joints, Pose, Solutions};
use crate::kinematics_error::KinematicsError;
use nalgebra::Point2;
use std::f64::consts::PI;

/// Checks if all elements in the array are finite
pub fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Convert array of angles in degrees to Joints in radians
pub fn joints(angles: &[f64; 3]) -> Joints {
    angles.map(|a| a.to_radians())
}

/// Convert joints that are in radians to degrees
pub fn to_degrees(angles: &Joints) -> [f64; 3] {
    angles.map(|a| a.to_degrees())
}

/// Allows to specify joint values in integer degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 3]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Wraps the angle into (-pi, pi].
pub fn normalize_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let wrapped = angle.rem_euclid(two_pi);
    if wrapped > PI { wrapped - two_pi } else { wrapped }
}

/// Absolute difference between two angles, taking the shorter way around the circle.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    normalize_angle(a - b).abs()
}

/// Sum of the wrapped angular distances of all joints.
pub fn joints_distance(from: &Joints, to: &Joints) -> f64 {
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| angular_distance(*a, *b))
        .sum()
}

/// Splits joint positions into x and y coordinate arrays, base first. This is the
/// form plotting front ends usually take.
pub fn to_coordinate_arrays(positions: &JointPositions) -> ([f64; 4], [f64; 4]) {
    (positions.map(|p| p.x), positions.map(|p| p.y))
}

/// Builds joint positions from coordinate slices. Both must contain exactly 4 elements,
/// starting with the base.
pub fn from_coordinates(x: &[f64], y: &[f64]) -> Result<JointPositions, KinematicsError> {
    if x.len() != 4 || y.len() != 4 {
        return Err(KinematicsError::InvalidConfiguration(format!(
            "x and y must contain exactly 4 elements each, starting with the base (got {} and {})",
            x.len(),
            y.len()
        )));
    }
    Ok(std::array::from_fn(|i| Point2::new(x[i], y[i])))
}

/// Print joint values for all solutions, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_solutions(solutions: &Solutions) {
    if solutions.is_empty() {
        println!("No solutions");
    }
    for solution in solutions {
        dump_joints(solution);
    }
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint in joints {
        row_str.push_str(&format!("{:5.2} ", joint.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

pub fn dump_positions(positions: &JointPositions) {
    let row: Vec<String> = positions
        .iter()
        .map(|p| format!("({:.4}, {:.4})", p.x, p.y))
        .collect();
    println!("[{}]", row.join(", "));
}

pub fn dump_pose(pose: &Pose) {
    println!(
        "x: {:.5}, y: {:.5}, orientation: {:.3} deg",
        pose.x,
        pose.y,
        pose.orientation.to_degrees()
    );
}

pub fn assert_pose_eq(ta: &Pose, tb: &Pose, distance_tolerance: f64, angular_tolerance: f64) -> bool {
    fn bad(ta: &Pose, tb: &Pose) {
        dump_pose(ta);
        dump_pose(tb);
    }

    let translation_distance = (ta.position() - tb.position()).norm();
    let angular = angular_distance(ta.orientation, tb.orientation);

    if translation_distance > distance_tolerance {
        bad(ta, tb);
        panic!("Poses have too different translations");
    }

    if angular > angular_tolerance {
        bad(ta, tb);
        panic!("Poses have too different angles");
    }
    true
}
