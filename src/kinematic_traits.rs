extern crate nalgebra as na;

use crate::kinematics_error::KinematicsError;
use na::{Isometry2, Point2, UnitComplex, Vector2};

/// Pose of the end-effector: position of the tip and heading of the last link, measured
/// from the +x axis in radians. No range restriction applies to the orientation.
/// ```
/// use rs_planar_kinematics::kinematic_traits::Pose;
///
/// let pose = Pose::new(3.0, 2.0, -std::f64::consts::FRAC_PI_2);
/// let same = Pose::from_degrees(3.0, 2.0, -90.0);
/// assert!((pose.orientation - same.orientation).abs() < 1E-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub orientation: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, orientation: f64) -> Self {
        Pose { x, y, orientation }
    }

    /// Orientation given in degrees, stored in radians.
    pub fn from_degrees(x: f64, y: f64, orientation_degrees: f64) -> Self {
        Pose::new(x, y, orientation_degrees.to_radians())
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    /// Converts into nalgebra planar isometry. The orientation is wrapped into (-pi, pi].
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(Vector2::new(self.x, self.y), self.orientation)
    }

    pub fn from_isometry(isometry: &Isometry2<f64>) -> Self {
        Pose::new(
            isometry.translation.x,
            isometry.translation.y,
            isometry.rotation.angle(),
        )
    }

    /// Unit heading of the end-effector.
    pub fn heading(&self) -> UnitComplex<f64> {
        UnitComplex::new(self.orientation)
    }
}

/// Relative joint angles in radians. The first joint is measured from the base frame,
/// each next one from the previous link.
pub type Joints = [f64; 3];

/// Both solutions of the inverse kinematics (fewer if they coincide).
pub type Solutions = Vec<Joints>;

/// Cartesian positions of the base, the two elbows and the end-effector, in this order.
/// The base is always at the origin of the arm frame.
pub type JointPositions = [Point2<f64>; 4];

/// For providing a singularity-free default where the previous position is required.
pub const JOINTS_AT_ZERO: Joints = [0.0; 3];

/// Index of the shoulder joint
pub const J1: usize = 0;
/// Index of the elbow joint
pub const J2: usize = 1;
/// Index of the wrist joint
pub const J3: usize = 2;

/// Index of the base in JointPositions
pub const J_BASE: usize = 0;
/// Index of the end-effector (tool tip) in JointPositions
pub const J_TOOL: usize = 3;

/// Two configurations of the first two links reach the same wrist center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElbowBranch {
    /// Elbow angle `-acos(A)`, computed first.
    Down,
    /// Elbow angle `+acos(A)`.
    Up,
}

impl ElbowBranch {
    pub fn other(&self) -> Self {
        match self {
            ElbowBranch::Down => ElbowBranch::Up,
            ElbowBranch::Up => ElbowBranch::Down,
        }
    }

    /// Sign applied to `acos(A)` to obtain the elbow angle.
    pub fn sign(&self) -> f64 {
        match self {
            ElbowBranch::Down => -1.0,
            ElbowBranch::Up => 1.0,
        }
    }
}

/// How a single solution is picked when inverse kinematics has two.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BranchPolicy {
    /// Start with the elbow-down branch and switch to elbow-up if the shoulder angle
    /// comes out negative. If neither branch has a non-negative shoulder angle, the
    /// elbow-down branch is kept.
    #[default]
    PreferPositiveShoulder,

    /// Always use the given branch.
    Fixed(ElbowBranch),

    /// The branch closest to the given joint configuration (wrapped angular distance).
    Nearest(Joints),
}

/// Inverse kinematics returns all joint angles wrapped into (-pi, pi].
pub trait Kinematics {
    /// Find a single solution for the given end-effector pose, selected by the
    /// branch policy of the implementation.
    fn inverse(&self, pose: &Pose) -> Result<Joints, KinematicsError>;

    /// Find the solution on the given elbow branch.
    fn inverse_branch(&self, pose: &Pose, branch: ElbowBranch) -> Result<Joints, KinematicsError>;

    /// Find all solutions (elbow-down first). If the arm is fully stretched or folded,
    /// both branches are the same and only one is returned.
    fn inverse_solutions(&self, pose: &Pose) -> Result<Solutions, KinematicsError>;

    /// Find the solution closest to the previous joint positions. Use this when
    /// following a path so that the arm does not jump between branches.
    fn inverse_continuing(&self, pose: &Pose, previous: &Joints) -> Result<Joints, KinematicsError>;

    /// End-effector pose for the given joint angles. Orientation is the plain sum of
    /// the joint angles, not wrapped.
    fn forward(&self, joints: &Joints) -> Pose;

    /// Cartesian positions of all joints, base first.
    fn forward_with_joint_positions(&self, joints: &Joints) -> JointPositions;
}
