//! Supports extracting link lengths and poses from YAML file (optional)

use std::path::Path;

use regex::Regex;
use yaml_rust2::{Yaml, YamlLoader};

use crate::kinematic_traits::Pose;
use crate::parameter_error::ParameterError;
use crate::parameters::planar_kinematics::LinkLengths;

const LINK_LENGTHS_KEY: &str = "planar_arm_link_lengths";
const POSES_KEY: &str = "poses";

impl LinkLengths {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// planar_arm_link_lengths:
    ///   l1: 3.0
    ///   l2: 2.0
    ///   l3: 1.2
    /// ```
    /// Lengths are checked the same way as in [LinkLengths::new]. Other top level
    /// keys (like poses) are ignored.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let doc = first_document(contents)?;
        let lengths = &doc[LINK_LENGTHS_KEY];
        if lengths.is_badvalue() {
            return Err(ParameterError::MissingField(LINK_LENGTHS_KEY.to_string()));
        }

        Ok(LinkLengths::new(
            read_number(lengths, "l1")?,
            read_number(lengths, "l2")?,
            read_number(lengths, "l3")?,
        )?)
    }
}

/// Read the list of end-effector poses from YAML file:
/// ```yaml
/// poses:
///   - { x: 3.0, y: 2.0, orientation: deg(-90) }
///   - { x: 2.0, y: 3.0, orientation: 0.5 }
/// ```
/// Orientation is either a number in radians or `deg(angle)` in degrees.
pub fn poses_from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Vec<Pose>, ParameterError> {
    let contents = std::fs::read_to_string(path)?;
    poses_from_yaml_str(&contents)
}

pub fn poses_from_yaml_str(contents: &str) -> Result<Vec<Pose>, ParameterError> {
    let doc = first_document(contents)?;
    let poses = doc[POSES_KEY]
        .as_vec()
        .ok_or_else(|| ParameterError::MissingField(POSES_KEY.to_string()))?;

    poses
        .iter()
        .map(|entry| {
            Ok(Pose::new(
                read_number(entry, "x")?,
                read_number(entry, "y")?,
                read_angle(entry, "orientation")?,
            ))
        })
        .collect()
}

fn first_document(contents: &str) -> Result<Yaml, ParameterError> {
    YamlLoader::load_from_str(contents)?
        .into_iter()
        .next()
        .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))
}

fn read_number(node: &Yaml, key: &str) -> Result<f64, ParameterError> {
    match &node[key] {
        Yaml::Real(_) => node[key]
            .as_f64()
            .ok_or_else(|| ParameterError::ParseError(format!("{} is not a valid number", key))),
        Yaml::Integer(value) => Ok(*value as f64),
        Yaml::BadValue => Err(ParameterError::MissingField(key.to_string())),
        other => Err(ParameterError::ParseError(format!(
            "{} must be a number, got {:?}",
            key, other
        ))),
    }
}

/// Angle in radians, or deg(angle) in degrees.
fn read_angle(node: &Yaml, key: &str) -> Result<f64, ParameterError> {
    match &node[key] {
        Yaml::String(text) => parse_degrees(text).map(f64::to_radians),
        _ => read_number(node, key),
    }
}

fn parse_degrees(text: &str) -> Result<f64, ParameterError> {
    let pattern = Regex::new(r"^\s*deg\(\s*([-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?)\s*\)\s*$")
        .map_err(|e| ParameterError::ParseError(e.to_string()))?;
    let captures = pattern
        .captures(text)
        .ok_or_else(|| ParameterError::WrongAngle(text.to_string()))?;
    captures[1]
        .parse::<f64>()
        .map_err(|_| ParameterError::WrongAngle(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_degrees() {
        assert_eq!(parse_degrees("deg(-90)").expect("valid"), -90.0);
        assert_eq!(parse_degrees(" deg( 12.5 ) ").expect("valid"), 12.5);
        assert!(matches!(parse_degrees("rad(1)"), Err(ParameterError::WrongAngle(_))));
        assert!(parse_degrees("deg()").is_err());
    }

    #[test]
    fn test_integer_lengths() {
        let links = LinkLengths::from_yaml_str("planar_arm_link_lengths: { l1: 2, l2: 1, l3: 1 }")
            .expect("valid lengths");
        assert_eq!(links.as_array(), [2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_missing_lengths() {
        let result = LinkLengths::from_yaml_str("other: 1");
        assert!(matches!(result, Err(ParameterError::MissingField(_))));
    }
}
