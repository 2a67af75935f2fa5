//! Small flag drawn at the tip of the arm to show the end-effector heading

use crate::kinematic_traits::{JointPositions, J_TOOL};
use crate::kinematics_error::KinematicsError;
use nalgebra::{Point2, Vector2};

/// Last link shorter than this has no usable direction.
const DEGENERATE_SEGMENT: f64 = 1E-12;

/// Marker polygon: a bar across the tip of the last link with two short arms pointing
/// forward, like an open gripper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndEffectorMarker {
    /// Half of the bar length, across the last link.
    half_width: f64,
    /// Length of the arms, along the last link.
    half_depth: f64,
}

impl Default for EndEffectorMarker {
    fn default() -> Self {
        EndEffectorMarker {
            half_width: 0.3,
            half_depth: 0.4,
        }
    }
}

impl EndEffectorMarker {
    pub fn new(half_width: f64, half_depth: f64) -> Result<Self, KinematicsError> {
        if !(half_width.is_finite() && half_width > 0.0 && half_depth.is_finite() && half_depth > 0.0) {
            return Err(KinematicsError::InvalidConfiguration(format!(
                "marker dimensions must be positive, got {} x {}",
                half_width, half_depth
            )));
        }
        Ok(EndEffectorMarker {
            half_width,
            half_depth,
        })
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_depth(&self) -> f64 {
        self.half_depth
    }

    /// Four points of the marker polyline for the given joint positions. Fails with
    /// `DegenerateGeometry` if the last two joints coincide.
    pub fn polygon(&self, positions: &JointPositions) -> Result<[Point2<f64>; 4], KinematicsError> {
        let tip = positions[J_TOOL];
        let direction: Vector2<f64> = tip - positions[J_TOOL - 1];
        let length = direction.norm();
        if !(length > DEGENERATE_SEGMENT) {
            return Err(KinematicsError::DegenerateGeometry(format!(
                "last link has zero length at ({}, {}), marker direction is undefined",
                tip.x, tip.y
            )));
        }

        let along = direction / length;
        let across = Vector2::new(-along.y, along.x) * self.half_width;
        let back = -along * self.half_depth;

        Ok([
            tip - across - back,
            tip - across,
            tip + across,
            tip + across - back,
        ])
    }
}
