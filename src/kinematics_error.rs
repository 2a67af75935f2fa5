//! Errors reported by the kinematic computations

use thiserror::Error;

/// All failures are local and recoverable: the computation does not proceed for
/// the given input, and repeating it with the same input gives the same result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    /// The wrist center of the target pose lies outside the annulus reachable by
    /// the first two links. `cos_elbow` is the law-of-cosines value that fell out
    /// of [-1, 1].
    #[error("The pose ({x:.4}, {y:.4}) is not reachable with the given link lengths (cos elbow = {cos_elbow:.4})")]
    Unreachable { x: f64, y: f64, cos_elbow: f64 },

    /// Geometry where a direction is undefined (zero-length radius or segment).
    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Invalid link lengths or trajectory parameters.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
