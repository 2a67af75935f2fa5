//! Hardcoded link lengths for a few arms

pub mod planar_kinematics {
    use crate::parameters::planar_kinematics::LinkLengths;

    #[allow(dead_code)]
    impl LinkLengths {
        // Constants below are all positive, so construction cannot fail.
        fn preset(l1: f64, l2: f64, l3: f64) -> Self {
            match LinkLengths::new(l1, l2, l3) {
                Ok(links) => links,
                Err(e) => unreachable!("preset link lengths are valid: {}", e),
            }
        }

        /// The arm used in the demonstration driver: long shoulder link, medium
        /// forearm and a short gripper.
        pub fn demo_arm() -> Self {
            Self::preset(3.0, 2.0, 1.2)
        }

        /// Arm with links 2, 1 and 1. Reaches 4 when fully stretched and cannot place
        /// the wrist closer than 1 to the base.
        pub fn reference_arm() -> Self {
            Self::preset(2.0, 1.0, 1.0)
        }

        /// All links of the unit length. The wrist can be brought to the base here,
        /// that is a singular configuration.
        pub fn unit_arm() -> Self {
            Self::preset(1.0, 1.0, 1.0)
        }
    }
}
