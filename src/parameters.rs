//! Defines the link length data structure

pub mod planar_kinematics {
    use crate::kinematics_error::KinematicsError;

    /// Lengths of the three links of the planar arm. All lengths are strictly positive
    /// and finite, this is checked when constructing. Values cannot be changed afterwards.
    /// See [parameters_arms.rs](parameters_arms.rs) for a few ready to use arms.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LinkLengths {
        /// Length of the first link (base joint to the first elbow).
        l1: f64,

        /// Length of the second link (first elbow to the second elbow).
        l2: f64,

        /// Length of the last link (second elbow to the end-effector).
        l3: f64,
    }

    impl LinkLengths {
        /// Creates link lengths, failing with `InvalidConfiguration` if any length
        /// is zero, negative or not finite.
        pub fn new(l1: f64, l2: f64, l3: f64) -> Result<Self, KinematicsError> {
            for (name, value) in [("l1", l1), ("l2", l2), ("l3", l3)] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(KinematicsError::InvalidConfiguration(format!(
                        "link length {} must be positive and finite (got {})",
                        name, value
                    )));
                }
            }
            Ok(LinkLengths { l1, l2, l3 })
        }

        pub fn l1(&self) -> f64 {
            self.l1
        }

        pub fn l2(&self) -> f64 {
            self.l2
        }

        pub fn l3(&self) -> f64 {
            self.l3
        }

        /// Lengths as array, base link first.
        pub fn as_array(&self) -> [f64; 3] {
            [self.l1, self.l2, self.l3]
        }

        /// Maximal distance from the base the end-effector can ever have.
        pub fn max_reach(&self) -> f64 {
            self.l1 + self.l2 + self.l3
        }

        /// Outer radius of the annulus the wrist center can be placed in.
        pub fn wrist_outer_radius(&self) -> f64 {
            self.l1 + self.l2
        }

        /// Inner radius of the annulus the wrist center can be placed in. Zero if the
        /// first two links have the same length.
        pub fn wrist_inner_radius(&self) -> f64 {
            (self.l1 - self.l2).abs()
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "planar_arm_link_lengths:\n  \
              l1: {}\n  \
              l2: {}\n  \
              l3: {}\n",
                self.l1, self.l2, self.l3
            )
        }
    }
}
