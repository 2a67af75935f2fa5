use crate::kinematic_traits::Kinematics;
use crate::kinematics_impl::PlanarKinematics;
use crate::parameter_error::ParameterError;
use crate::parameters::planar_kinematics::LinkLengths;
use crate::parameters_from_file::{poses_from_yaml_file, poses_from_yaml_str};
use std::f64::consts::FRAC_PI_2;

const READ_ERROR: &str = "Failed to load arm from file";
const FILENAME: &str = "src/tests/data/arm.yaml";

#[test]
fn test_link_lengths_from_yaml() {
    let loaded = LinkLengths::from_yaml_file(FILENAME).expect(READ_ERROR);
    assert_eq!(loaded, LinkLengths::demo_arm());
}

#[test]
fn test_poses_from_yaml() {
    let poses = poses_from_yaml_file(FILENAME).expect(READ_ERROR);
    assert_eq!(poses.len(), 3);

    assert_eq!((poses[0].x, poses[0].y), (3.0, 2.0));
    assert!((poses[0].orientation + FRAC_PI_2).abs() < 1E-12);
    assert_eq!(poses[1].orientation, FRAC_PI_2);
    assert_eq!((poses[2].x, poses[2].y, poses[2].orientation), (4.0, 0.0, 0.0));

    // All poses in the file are reachable by the arm in the same file
    let robot = PlanarKinematics::new(LinkLengths::from_yaml_file(FILENAME).expect(READ_ERROR));
    for pose in &poses {
        assert!(robot.inverse(pose).is_ok(), "{:?}", pose);
    }
}

#[test]
fn test_round_trip_to_yaml() {
    let links = LinkLengths::reference_arm();
    let restored = LinkLengths::from_yaml_str(&links.to_yaml()).expect("valid YAML");
    assert_eq!(restored, links);
}

#[test]
fn test_invalid_lengths() {
    let result = LinkLengths::from_yaml_str("planar_arm_link_lengths: { l1: 1.0, l2: 0.0, l3: 1.0 }");
    assert!(
        matches!(result, Err(ParameterError::KinematicsConfigurationError(_))),
        "{:?}",
        result
    );

    let result = LinkLengths::from_yaml_str("planar_arm_link_lengths: { l1: 1.0, l2: abc, l3: 1.0 }");
    assert!(matches!(result, Err(ParameterError::ParseError(_))), "{:?}", result);
}

#[test]
fn test_invalid_poses() {
    assert!(matches!(poses_from_yaml_str("other: []"), Err(ParameterError::MissingField(_))));
    assert!(matches!(
        poses_from_yaml_str("poses: [{ x: 1, y: 2, orientation: grad(3) }]"),
        Err(ParameterError::WrongAngle(_))
    ));
    assert!(matches!(
        poses_from_yaml_str("poses: [{ x: 1, orientation: 0 }]"),
        Err(ParameterError::MissingField(_))
    ));
    assert!(matches!(poses_from_yaml_file("no/such/file.yaml"), Err(ParameterError::IoError(_))));
    assert!(matches!(poses_from_yaml_str("poses: [ {"), Err(ParameterError::YamlError(_))));
}

#[test]
fn test_missing_file() {
    let result = LinkLengths::from_yaml_file("src/tests/data/missing.yaml");
    assert!(matches!(result, Err(ParameterError::IoError(_))));
}
