use crate::kinematic_traits::{BranchPolicy, ElbowBranch, Kinematics};
use crate::kinematics_impl::PlanarKinematics;
use crate::tests::test_utils::{
    joints_close, poses_close, random_joints, random_links, random_reachable_pose, rng,
};

const CASES: usize = 2000;

#[test]
fn test_random_poses() {
    let mut rng = rng();
    for _ in 0..CASES {
        let robot = PlanarKinematics::new(random_links(&mut rng));
        let pose = random_reachable_pose(&robot, &mut rng);
        let tolerance = 1E-9 * robot.links().max_reach();

        let joints = robot
            .inverse(&pose)
            .unwrap_or_else(|e| panic!("{:?} not solved for {:?}: {}", pose, robot.links(), e));
        let reached = robot.forward(&joints);
        assert!(
            poses_close(&pose, &reached, tolerance),
            "{:?} reached as {:?} with {:?}, links {:?}",
            pose,
            reached,
            joints,
            robot.links()
        );
    }
}

#[test]
fn test_both_branches_reach() {
    let mut rng = rng();
    for _ in 0..CASES {
        let robot = PlanarKinematics::new(random_links(&mut rng));
        let pose = random_reachable_pose(&robot, &mut rng);
        let tolerance = 1E-9 * robot.links().max_reach();

        let solutions = robot.inverse_solutions(&pose).expect("reachable by construction");
        assert_eq!(solutions.len(), 2);
        for joints in &solutions {
            assert!(poses_close(&pose, &robot.forward(joints), tolerance));
        }
    }
}

#[test]
fn test_original_joints_recovered() {
    let mut rng = rng();
    for _ in 0..CASES {
        let links = random_links(&mut rng);
        let original = random_joints(&mut rng);
        let branch = if original[1] < 0.0 { ElbowBranch::Down } else { ElbowBranch::Up };

        let robot = PlanarKinematics::new_with_policy(links, BranchPolicy::Fixed(branch));
        let pose = robot.forward(&original);
        let joints = robot.inverse(&pose).expect("reachable by construction");
        assert!(
            joints_close(&joints, &original, 1E-6),
            "{:?} recovered as {:?}, links {:?}",
            original,
            joints,
            links
        );
    }
}
