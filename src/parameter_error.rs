//! Error handling for the robot bundle loader

use crate::kinematic_traits::KinematicsError;
use std::io;

/// Unified error to report failures while reading and assembling a CSV robot
/// bundle.
#[derive(Debug)]
pub enum ParameterError {
    IoError(io::Error),
    ParseError(String),
    MissingField(String),
    InvalidLength { expected: usize, found: usize },
    NotRigidTransform(String),
    KinematicsConfigurationError(String),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ParameterError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            ParameterError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            ParameterError::MissingField(ref field) =>
                write!(f, "Missing Field: {}", field),
            ParameterError::InvalidLength { expected, found } =>
                write!(f, "Invalid Length: expected {}, found {}", expected, found),
            ParameterError::NotRigidTransform(ref msg) =>
                write!(f, "Not a rigid transform: {}", msg),
            ParameterError::KinematicsConfigurationError(ref err) =>
                write!(f, "Kinematics Configuration Error: {}", err),
        }
    }
}

impl std::error::Error for ParameterError {}

impl From<io::Error> for ParameterError {
    fn from(err: io::Error) -> Self {
        ParameterError::IoError(err)
    }
}

impl From<csv::Error> for ParameterError {
    fn from(err: csv::Error) -> Self {
        ParameterError::ParseError(err.to_string())
    }
}

impl From<KinematicsError> for ParameterError {
    fn from(err: KinematicsError) -> Self {
        ParameterError::KinematicsConfigurationError(err.to_string())
    }
}
