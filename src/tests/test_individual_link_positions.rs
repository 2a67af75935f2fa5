use crate::kinematic_traits::{Kinematics, JOINTS_AT_ZERO, J_BASE, J_TOOL};
use crate::kinematics_impl::{forward_kinematics, PlanarKinematics};
use crate::parameters::planar_kinematics::LinkLengths;
use nalgebra::Point2;
use std::f64::consts::{FRAC_PI_2, PI};

const SMALL: f64 = 1e-12;

fn check_xy(positions: &[Point2<f64>; 4], expected: [(f64, f64); 4]) {
    for (i, (position, (x, y))) in positions.iter().zip(expected).enumerate() {
        assert!(
            (position.x - x).abs() < SMALL && (position.y - y).abs() < SMALL,
            "Joint {}: expected ({}, {}), got ({}, {})",
            i,
            x,
            y,
            position.x,
            position.y
        );
    }
}

#[test]
fn test_forward_kinematics_straight() {
    let robot = PlanarKinematics::new(LinkLengths::reference_arm());
    let positions = robot.forward_with_joint_positions(&JOINTS_AT_ZERO);
    check_xy(&positions, [(0.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);

    let pose = robot.forward(&JOINTS_AT_ZERO);
    assert_eq!(pose.orientation, 0.0);
}

#[test]
fn test_forward_kinematics_right_angles() {
    let robot = PlanarKinematics::new(LinkLengths::reference_arm());

    // Up, then left, then down
    let joints = [FRAC_PI_2, FRAC_PI_2, FRAC_PI_2];
    let positions = robot.forward_with_joint_positions(&joints);
    check_xy(&positions, [(0.0, 0.0), (0.0, 2.0), (-1.0, 2.0), (-1.0, 1.0)]);

    let pose = robot.forward(&joints);
    assert!((pose.orientation - 3.0 * FRAC_PI_2).abs() < SMALL, "Sum of joints is not wrapped");
}

#[test]
fn test_forward_kinematics_folded() {
    let robot = PlanarKinematics::new(LinkLengths::unit_arm());
    let positions = robot.forward_with_joint_positions(&[0.0, PI, 0.0]);
    check_xy(&positions, [(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (-1.0, 0.0)]);
}

#[test]
fn test_base_always_at_origin() {
    let robot = PlanarKinematics::new(LinkLengths::demo_arm());
    for joints in [[1.0, -2.0, 3.0], [-0.3, 0.7, 2.9], [10.0, -10.0, 0.0]] {
        let positions = robot.forward_with_joint_positions(&joints);
        assert_eq!(positions[J_BASE], Point2::origin());

        let pose = robot.forward(&joints);
        assert_eq!(pose.position(), positions[J_TOOL]);
    }
}

#[test]
fn test_link_lengths_preserved() {
    let links = LinkLengths::demo_arm();
    let robot = PlanarKinematics::new(links);
    let positions = robot.forward_with_joint_positions(&[0.4, -1.3, 2.2]);
    for (i, length) in links.as_array().iter().enumerate() {
        let distance = (positions[i + 1] - positions[i]).norm();
        assert!((distance - length).abs() < SMALL);
    }
}

#[test]
fn test_free_function() {
    let (xs, ys) = forward_kinematics(0.0, 0.0, 0.0, 2.0, 1.0, 1.0).expect("valid lengths");
    assert_eq!(xs, [0.0, 2.0, 3.0, 4.0]);
    assert_eq!(ys, [0.0, 0.0, 0.0, 0.0]);

    assert!(forward_kinematics(0.0, 0.0, 0.0, 2.0, 0.0, 1.0).is_err());
}
