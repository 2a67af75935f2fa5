//! Error handling for configuration file readers

use crate::kinematics_error::KinematicsError;
use std::io;
use thiserror::Error;
use yaml_rust2::ScanError;

/// Unified error to report failures while reading arm and pose descriptions.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("IO Error: {0}")]
    IoError(#[from] io::Error),

    #[error("Parse Error: {0}")]
    ParseError(String),

    #[error("YAML Error: {0}")]
    YamlError(#[from] ScanError),

    #[error("Missing Field: {0}")]
    MissingField(String),

    #[error("Wrong angle representation: {0}")]
    WrongAngle(String),

    #[error("Invalid arm configuration: {0}")]
    KinematicsConfigurationError(#[from] KinematicsError),
}
