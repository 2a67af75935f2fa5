//! Frames for renderers. Nothing here draws or waits: the renderer receives precomputed
//! frames with timestamps and schedules them itself.

use crate::kinematic_traits::{JointPositions, Joints, Kinematics};
use crate::kinematics_error::KinematicsError;
use crate::interpolator::Interpolator;
use crate::marker::EndEffectorMarker;
use nalgebra::Point2;
use std::time::Duration;

/// Display interval between two frames unless configured otherwise.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Everything needed to draw one trajectory sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub index: usize,

    /// Time since the first frame.
    pub time: Duration,

    pub joints: Joints,

    pub positions: JointPositions,

    /// None if the marker is undefined for this frame (last link of zero length).
    pub marker: Option<[Point2<f64>; 4]>,
}

/// Converts trajectories into timed frames.
#[derive(Debug, Clone, Copy)]
pub struct Animation {
    interval: Duration,
    marker: EndEffectorMarker,
}

impl Default for Animation {
    fn default() -> Self {
        Animation {
            interval: DEFAULT_FRAME_INTERVAL,
            marker: EndEffectorMarker::default(),
        }
    }
}

impl Animation {
    pub fn new(interval: Duration, marker: EndEffectorMarker) -> Result<Self, KinematicsError> {
        if interval.is_zero() {
            return Err(KinematicsError::InvalidConfiguration(
                "frame interval must not be zero".to_string(),
            ));
        }
        Ok(Animation { interval, marker })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn time_of(&self, index: usize) -> Duration {
        self.interval
            .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    /// Time from the first to the last frame of the trajectory.
    pub fn duration(&self, trajectory: &Interpolator) -> Duration {
        self.time_of(trajectory.steps() - 1)
    }

    /// Frames for every sample of the trajectory, computed lazily.
    pub fn frames<'a, K: Kinematics + ?Sized>(
        &'a self,
        robot: &'a K,
        trajectory: &'a Interpolator,
    ) -> impl Iterator<Item = Frame> + 'a {
        trajectory.iter().enumerate().map(move |(index, joints)| {
            let positions = robot.forward_with_joint_positions(&joints);
            Frame {
                index,
                time: self.time_of(index),
                joints,
                positions,
                marker: self.marker.polygon(&positions).ok(),
            }
        })
    }
}

/// Axis limits a plot needs to show the arm: one unit of margin around the joints, the
/// floor (y = 0) always visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl PlotBounds {
    const MARGIN: f64 = 1.0;

    pub fn enclosing(positions: &JointPositions) -> Self {
        let (mut x_min, mut x_max) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut y_min, mut y_max) = (f64::INFINITY, f64::NEG_INFINITY);
        for p in positions {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }

        PlotBounds {
            x_min: x_min - Self::MARGIN,
            x_max: x_max + Self::MARGIN,
            // Floor stays in view
            y_min: if y_min < 0.0 { y_min - Self::MARGIN } else { 0.0 },
            y_max: y_max + Self::MARGIN,
        }
    }

    /// Smallest bounds containing both.
    pub fn union(&self, other: &PlotBounds) -> PlotBounds {
        PlotBounds {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }

    /// Bounds that fit all frames, so the view does not jump during the animation.
    pub fn for_frames<'a>(frames: impl IntoIterator<Item = &'a Frame>) -> Option<PlotBounds> {
        frames
            .into_iter()
            .map(|frame| PlotBounds::enclosing(&frame.positions))
            .reduce(|a, b| a.union(&b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics_impl::PlanarKinematics;
    use crate::parameters::planar_kinematics::LinkLengths;
    use std::f64::consts::PI;

    #[test]
    fn test_frames_are_timed() {
        let robot = PlanarKinematics::new(LinkLengths::reference_arm());
        let trajectory = Interpolator::new(&[0.0, 0.0, 0.0], &[PI / 2.0, 0.0, 0.0], 5)
            .expect("valid trajectory");
        let animation = Animation::default();
        let frames: Vec<Frame> = animation.frames(&robot, &trajectory).collect();

        assert_eq!(frames.len(), 5);
        assert_eq!(frames[0].time, Duration::ZERO);
        assert_eq!(frames[4].time, Duration::from_millis(200));
        assert_eq!(animation.duration(&trajectory), Duration::from_millis(200));
        assert!(frames.iter().all(|f| f.marker.is_some()));

        // Last frame is the arm pointing straight up
        let tip = frames[4].positions[3];
        assert!(tip.x.abs() < 1E-12);
        assert!((tip.y - 4.0).abs() < 1E-12);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let result = Animation::new(Duration::ZERO, EndEffectorMarker::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_plot_bounds() {
        let positions = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(4.0, 0.0),
        ];
        let bounds = PlotBounds::enclosing(&positions);
        assert_eq!(
            bounds,
            PlotBounds { x_min: -1.0, x_max: 5.0, y_min: 0.0, y_max: 1.0 }
        );

        let hanging = [
            Point2::new(0.0, 0.0),
            Point2::new(0.0, -2.0),
            Point2::new(1.0, -2.0),
            Point2::new(1.0, -3.0),
        ];
        let both = bounds.union(&PlotBounds::enclosing(&hanging));
        assert_eq!(
            both,
            PlotBounds { x_min: -1.0, x_max: 5.0, y_min: -4.0, y_max: 1.0 }
        );
    }
}
