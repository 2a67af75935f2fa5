//! Motion of the arm from one end-effector pose to another

use crate::kinematic_traits::{JointPositions, Kinematics, Pose};
use crate::kinematics_error::KinematicsError;
use crate::interpolator::Interpolator;
use tracing::debug;

/// Joint space motion between two poses. Both poses are solved with inverse kinematics,
/// the joints in between follow the smooth [Interpolator]. The end-effector does not
/// move along a straight line between the poses.
pub struct JointMotion<'a, K: Kinematics + ?Sized> {
    robot: &'a K,
    trajectory: Interpolator,
}

impl<'a, K: Kinematics + ?Sized> JointMotion<'a, K> {
    /// Solves both poses with the branch policy of the robot.
    pub fn plan(robot: &'a K, from: &Pose, to: &Pose, steps: usize) -> Result<Self, KinematicsError> {
        let start = robot.inverse(from)?;
        let end = robot.inverse(to)?;
        debug!("Motion {:?} -> {:?}: joints {:?} -> {:?}", from, to, start, end);
        Ok(Self::from_trajectory(robot, Interpolator::new(&start, &end, steps)?))
    }

    /// Solves the starting pose with the branch policy of the robot, and the final pose
    /// with the solution closest to the start. This avoids flipping the elbow on the way.
    pub fn plan_continuing(
        robot: &'a K,
        from: &Pose,
        to: &Pose,
        steps: usize,
    ) -> Result<Self, KinematicsError> {
        let start = robot.inverse(from)?;
        let end = robot.inverse_continuing(to, &start)?;
        Ok(Self::from_trajectory(robot, Interpolator::new(&start, &end, steps)?))
    }

    pub fn from_trajectory(robot: &'a K, trajectory: Interpolator) -> Self {
        JointMotion { robot, trajectory }
    }

    pub fn trajectory(&self) -> &Interpolator {
        &self.trajectory
    }

    /// Positions of all joints for every sample, computed lazily.
    pub fn positions(&self) -> impl Iterator<Item = JointPositions> + '_ {
        self.trajectory
            .iter()
            .map(|joints| self.robot.forward_with_joint_positions(&joints))
    }

    /// End-effector pose for every sample, computed lazily.
    pub fn poses(&self) -> impl Iterator<Item = Pose> + '_ {
        self.trajectory
            .iter()
            .map(|joints| self.robot.forward(&joints))
    }
}
