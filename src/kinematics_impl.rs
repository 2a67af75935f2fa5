use crate::kinematic_traits::{
    BranchPolicy, ElbowBranch, JointPositions, Joints, Kinematics, Pose, Solutions, J1, J2, J_TOOL,
};
use crate::kinematics_error::KinematicsError;
use crate::parameters::planar_kinematics::LinkLengths;
use crate::utils::{joints_distance, normalize_angle, to_coordinate_arrays};
use nalgebra::{Point2, Vector2};
use tracing::debug;

/// Rounding slack allowed on the cosine of the elbow angle before the pose is
/// declared unreachable. Poses exactly on the boundary of the annulus stay solvable.
const REACH_TOLERANCE: f64 = 1E-12;

/// Wrist center closer than this (relative to l1 + l2) to the base has no defined
/// direction.
const DEGENERATE_RADIUS: f64 = 1E-12;

/// Closed form kinematics of the 3-link planar arm.
#[derive(Debug, Clone, Copy)]
pub struct PlanarKinematics {
    links: LinkLengths,
    policy: BranchPolicy,
}

/// Position of the wrist center and the law-of-cosines value of the elbow for a pose.
#[derive(Debug, Clone, Copy)]
struct WristCenter {
    x: f64,
    y: f64,
    cos_elbow: f64,
}

impl PlanarKinematics {
    /// Creates a new `PlanarKinematics` instance with the given link lengths, using
    /// the default branch policy (prefer non-negative shoulder angle).
    pub fn new(links: LinkLengths) -> Self {
        PlanarKinematics {
            links,
            policy: BranchPolicy::default(),
        }
    }

    /// Creates a new `PlanarKinematics` instance that selects IK branches by the given policy.
    pub fn new_with_policy(links: LinkLengths, policy: BranchPolicy) -> Self {
        PlanarKinematics { links, policy }
    }

    pub fn links(&self) -> &LinkLengths {
        &self.links
    }

    pub fn policy(&self) -> BranchPolicy {
        self.policy
    }

    fn wrist_center(&self, pose: &Pose) -> Result<WristCenter, KinematicsError> {
        if !(pose.x.is_finite() && pose.y.is_finite() && pose.orientation.is_finite()) {
            return Err(KinematicsError::InvalidConfiguration(format!(
                "pose must be finite, got {:?}",
                pose
            )));
        }
        let (l1, l2, l3) = (self.links.l1(), self.links.l2(), self.links.l3());

        // Retract the end-effector along its heading by the length of the last link
        let x = pose.x - l3 * pose.orientation.cos();
        let y = pose.y - l3 * pose.orientation.sin();
        let a = (x * x + y * y - l1 * l1 - l2 * l2) / (2.0 * l1 * l2);

        if a.abs() > 1.0 + REACH_TOLERANCE {
            return Err(KinematicsError::Unreachable {
                x: pose.x,
                y: pose.y,
                cos_elbow: a,
            });
        }

        if x.hypot(y) <= DEGENERATE_RADIUS * (l1 + l2) {
            return Err(KinematicsError::DegenerateGeometry(format!(
                "wrist center of pose ({}, {}) is at the base, shoulder angle is undefined",
                pose.x, pose.y
            )));
        }

        Ok(WristCenter {
            x,
            y,
            cos_elbow: a.clamp(-1.0, 1.0),
        })
    }

    fn solve_branch(&self, pose: &Pose, wrist: &WristCenter, branch: ElbowBranch) -> Joints {
        let (l1, l2) = (self.links.l1(), self.links.l2());
        let theta2 = branch.sign() * wrist.cos_elbow.acos();

        // Angle between the wrist direction and the first link. This is the same as
        // asin(l2 sin(theta2) / |wrist|) while l1 + l2 cos(theta2) >= 0, and still
        // lands in the right quadrant when the second link is longer and folds back.
        let offset = f64::atan2(l2 * theta2.sin(), l1 + l2 * theta2.cos());
        let theta1 = normalize_angle(f64::atan2(wrist.y, wrist.x) - offset);
        let theta3 = normalize_angle(pose.orientation - theta1 - theta2);
        [theta1, theta2, theta3]
    }

    /// Elbow-down solution, and the elbow-up one unless both are the same.
    fn solve_both(&self, pose: &Pose, wrist: &WristCenter) -> (Joints, Option<Joints>) {
        let down = self.solve_branch(pose, wrist, ElbowBranch::Down);
        if wrist.cos_elbow.abs() == 1.0 {
            // Stretched or folded arm
            return (down, None);
        }
        (down, Some(self.solve_branch(pose, wrist, ElbowBranch::Up)))
    }

    fn nearest((down, up): (Joints, Option<Joints>), reference: &Joints) -> Joints {
        match up {
            Some(up) if joints_distance(&up, reference) < joints_distance(&down, reference) => up,
            _ => down,
        }
    }

    fn select(&self, pose: &Pose, wrist: &WristCenter) -> Joints {
        match self.policy {
            BranchPolicy::PreferPositiveShoulder => {
                let first = self.solve_branch(pose, wrist, ElbowBranch::Down);
                if first[J1] >= 0.0 {
                    return first;
                }
                let flipped = self.solve_branch(pose, wrist, ElbowBranch::Up);
                if flipped[J1] >= 0.0 {
                    debug!(
                        "Shoulder angle {:.4} negative, switched to elbow-up branch",
                        first[J1]
                    );
                    flipped
                } else {
                    debug!(
                        "No branch with non-negative shoulder angle for {:?}, keeping elbow-down",
                        pose
                    );
                    first
                }
            }
            BranchPolicy::Fixed(branch) => self.solve_branch(pose, wrist, branch),
            BranchPolicy::Nearest(reference) => {
                Self::nearest(self.solve_both(pose, wrist), &reference)
            }
        }
    }
}

impl Kinematics for PlanarKinematics {
    fn inverse(&self, pose: &Pose) -> Result<Joints, KinematicsError> {
        let wrist = self.wrist_center(pose)?;
        Ok(self.select(pose, &wrist))
    }

    fn inverse_branch(&self, pose: &Pose, branch: ElbowBranch) -> Result<Joints, KinematicsError> {
        let wrist = self.wrist_center(pose)?;
        Ok(self.solve_branch(pose, &wrist, branch))
    }

    fn inverse_solutions(&self, pose: &Pose) -> Result<Solutions, KinematicsError> {
        let wrist = self.wrist_center(pose)?;
        let (down, up) = self.solve_both(pose, &wrist);
        Ok(std::iter::once(down).chain(up).collect())
    }

    fn inverse_continuing(&self, pose: &Pose, previous: &Joints) -> Result<Joints, KinematicsError> {
        let wrist = self.wrist_center(pose)?;
        let solution = Self::nearest(self.solve_both(pose, &wrist), previous);
        debug!(
            "Continuing from {:?}, elbow {:.4} selected",
            previous, solution[J2]
        );
        Ok(solution)
    }

    fn forward(&self, joints: &Joints) -> Pose {
        let tip = self.forward_with_joint_positions(joints)[J_TOOL];
        Pose::new(tip.x, tip.y, joints.iter().sum())
    }

    fn forward_with_joint_positions(&self, joints: &Joints) -> JointPositions {
        let mut positions: JointPositions = [Point2::origin(); 4];
        let mut angle = 0.0_f64;
        for (i, (q, length)) in joints.iter().zip(self.links.as_array()).enumerate() {
            // Each link rotates by the sum of all preceding joint angles
            angle += *q;
            positions[i + 1] =
                positions[i] + Vector2::new(length * angle.cos(), length * angle.sin());
        }
        positions
    }
}

/// Inverse kinematics from plain values: end-effector position, orientation (radians)
/// and link lengths. Returns joint angles in radians, selected with the default policy.
pub fn inverse_kinematics(
    x: f64,
    y: f64,
    orientation: f64,
    l1: f64,
    l2: f64,
    l3: f64,
) -> Result<Joints, KinematicsError> {
    let robot = PlanarKinematics::new(LinkLengths::new(l1, l2, l3)?);
    robot.inverse(&Pose::new(x, y, orientation))
}

/// Forward kinematics from plain values. Returns x and y coordinates of the base, both
/// elbows and the end-effector. Fails only if the link lengths are invalid.
pub fn forward_kinematics(
    theta1: f64,
    theta2: f64,
    theta3: f64,
    l1: f64,
    l2: f64,
    l3: f64,
) -> Result<([f64; 4], [f64; 4]), KinematicsError> {
    let robot = PlanarKinematics::new(LinkLengths::new(l1, l2, l3)?);
    let positions = robot.forward_with_joint_positions(&[theta1, theta2, theta3]);
    Ok(to_coordinate_arrays(&positions))
}
