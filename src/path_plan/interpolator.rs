//! Smooth joint space trajectories between two joint configurations.

use crate::kinematic_traits::Joints;
use crate::kinematics_error::KinematicsError;
use crate::utils::is_valid;
use std::iter::FusedIterator;
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cubic polynomial on `t` in [0, 1] passing through the given positions with the given
/// velocities (derivatives by `t`) at both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampedCubic {
    c0: f64,
    c1: f64,
    c2: f64,
    c3: f64,
}

impl ClampedCubic {
    pub fn new(start: f64, end: f64, start_velocity: f64, end_velocity: f64) -> Self {
        let delta = end - start;
        ClampedCubic {
            c0: start,
            c1: start_velocity,
            c2: 3.0 * delta - 2.0 * start_velocity - end_velocity,
            c3: -2.0 * delta + start_velocity + end_velocity,
        }
    }

    /// Starts and ends with zero velocity: `start + (end - start) (3t² - 2t³)`.
    pub fn at_rest(start: f64, end: f64) -> Self {
        Self::new(start, end, 0.0, 0.0)
    }

    pub fn position(&self, t: f64) -> f64 {
        ((self.c3 * t + self.c2) * t + self.c1) * t + self.c0
    }

    pub fn velocity(&self, t: f64) -> f64 {
        (3.0 * self.c3 * t + 2.0 * self.c2) * t + self.c1
    }

    pub fn acceleration(&self, t: f64) -> f64 {
        6.0 * self.c3 * t + 2.0 * self.c2
    }
}

/// Trajectory from one joint configuration to another, sampled at `steps` evenly spaced
/// values of the parameter `t` from 0 to 1 inclusive. Every joint follows its own
/// [ClampedCubic] so the arm starts and stops at rest. Samples are computed on demand,
/// the interpolator can be iterated any number of times.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolator {
    start: Joints,
    end: Joints,
    steps: usize,
    curves: [ClampedCubic; 3],
}

impl Interpolator {
    /// Fails with `InvalidConfiguration` if fewer than 2 steps are requested or joint
    /// values are not finite.
    pub fn new(start: &Joints, end: &Joints, steps: usize) -> Result<Self, KinematicsError> {
        if steps < 2 {
            return Err(KinematicsError::InvalidConfiguration(format!(
                "trajectory needs at least 2 steps, got {}",
                steps
            )));
        }
        if !is_valid(start) || !is_valid(end) {
            return Err(KinematicsError::InvalidConfiguration(format!(
                "trajectory joints must be finite: {:?} -> {:?}",
                start, end
            )));
        }
        trace!("Interpolating {:?} -> {:?} in {} steps", start, end, steps);
        Ok(Interpolator {
            start: *start,
            end: *end,
            steps,
            curves: std::array::from_fn(|i| ClampedCubic::at_rest(start[i], end[i])),
        })
    }

    pub fn start(&self) -> &Joints {
        &self.start
    }

    pub fn end(&self) -> &Joints {
        &self.end
    }

    /// Number of samples.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Value of `t` for the sample with the given index.
    pub fn parameter(&self, index: usize) -> f64 {
        index as f64 / (self.steps - 1) as f64
    }

    /// Joints at the given `t`, clamped to [0, 1]. The ends are returned exactly.
    pub fn sample(&self, t: f64) -> Joints {
        if t <= 0.0 {
            return self.start;
        } else if t >= 1.0 {
            return self.end;
        }
        self.curves.map(|curve| curve.position(t))
    }

    /// Joint velocities by `t` at the given `t`, clamped to [0, 1]. Zero at both ends.
    pub fn velocity(&self, t: f64) -> Joints {
        let t = t.clamp(0.0, 1.0);
        self.curves.map(|curve| curve.velocity(t))
    }

    /// Sample with the given index, None past the last one.
    pub fn get(&self, index: usize) -> Option<Joints> {
        if index < self.steps {
            Some(self.sample(self.parameter(index)))
        } else {
            None
        }
    }

    pub fn iter(&self) -> TrajectoryIter {
        TrajectoryIter {
            interpolator: *self,
            front: 0,
            back: self.steps,
        }
    }

    /// All samples, collected.
    pub fn samples(&self) -> Vec<Joints> {
        self.iter().collect()
    }

    /// All samples, computed in parallel. Same result as [Interpolator::samples].
    #[cfg(feature = "parallel")]
    pub fn par_samples(&self) -> Vec<Joints> {
        (0..self.steps)
            .into_par_iter()
            .map(|i| self.sample(self.parameter(i)))
            .collect()
    }
}

/// Iterator over the samples of an [Interpolator].
#[derive(Debug, Clone)]
pub struct TrajectoryIter {
    interpolator: Interpolator,
    front: usize,
    back: usize,
}

impl Iterator for TrajectoryIter {
    type Item = Joints;

    fn next(&mut self) -> Option<Joints> {
        if self.front >= self.back {
            return None;
        }
        let joints = self.interpolator.get(self.front);
        self.front += 1;
        joints
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for TrajectoryIter {
    fn next_back(&mut self) -> Option<Joints> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.interpolator.get(self.back)
    }
}

impl ExactSizeIterator for TrajectoryIter {}

impl FusedIterator for TrajectoryIter {}

impl IntoIterator for Interpolator {
    type Item = Joints;
    type IntoIter = TrajectoryIter;

    fn into_iter(self) -> TrajectoryIter {
        self.iter()
    }
}

impl IntoIterator for &Interpolator {
    type Item = Joints;
    type IntoIter = TrajectoryIter;

    fn into_iter(self) -> TrajectoryIter {
        self.iter()
    }
}

/// Smooth trajectory between two joint configurations with the given number of samples
/// (at least 2).
pub fn interpolate_trajectory(
    start: &Joints,
    end: &Joints,
    steps: usize,
) -> Result<Interpolator, KinematicsError> {
    Interpolator::new(start, end, steps)
}
