//! Shared type aliases, the `Kinematics` trait and the kinematics error type.

extern crate nalgebra as na;

use crate::model::JointLimits;
use na::{DVector, Isometry3, Point3};
use std::fmt;

/// Joint vector of the robot, in radians. The length equals the number of
/// actuated joints, which is data here (the DH table decides it), so this is a
/// dynamically sized vector rather than a fixed array.
pub type Joints = DVector<f64>;

/// Pose is used as a pose of the robot tool tip. It contains both the Cartesian
/// position (millimeters) and the rotation quaternion.
pub type Pose = Isometry3<f64>;

/// Inverse kinematics may return multiple joint configurations reaching the
/// same target; they are reported in preference order, best first.
pub type Solutions = Vec<Joints>;

/// Failures of the kinematic core. These are precondition violations; the
/// numerical routines themselves degrade gracefully (damping, clamping)
/// instead of failing.
#[derive(Debug)]
pub enum KinematicsError {
    /// The joint vector length does not match the degrees of freedom.
    JointCountMismatch { expected: usize, found: usize },
    /// A robot model was constructed with no DH rows at all.
    EmptyDhTable,
    /// The limits cover a different number of joints than the DH table.
    LimitsDofMismatch { expected: usize, found: usize },
    /// A joint limit has its lower bound above its upper bound.
    LimitsOutOfOrder { joint: usize, min: f64, max: f64 },
    /// The robot geometry does not fit the requested closed-form solver.
    GeometryNotSupported(String),
    /// The damped least squares system could not be solved. Only possible
    /// with zero damping and a rank-deficient Jacobian.
    SingularSystem,
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KinematicsError::JointCountMismatch { expected, found } =>
                write!(f, "Joint count mismatch: expected {}, found {}", expected, found),
            KinematicsError::EmptyDhTable =>
                write!(f, "The DH table must contain at least one row"),
            KinematicsError::LimitsDofMismatch { expected, found } =>
                write!(f, "Limit arity mismatch: expected {} joints, found {}", expected, found),
            KinematicsError::LimitsOutOfOrder { joint, min, max } =>
                write!(f, "Joint {} limits are out of order: min {} > max {}", joint, min, max),
            KinematicsError::GeometryNotSupported(ref msg) =>
                write!(f, "Geometry not supported: {}", msg),
            KinematicsError::SingularSystem =>
                write!(f, "Singular system: the undamped Jacobian solve has no unique solution"),
        }
    }
}

impl std::error::Error for KinematicsError {}

/// The kinematic chain seam. The numerical solvers are written against this
/// trait, so they work over the DH implementation, over wrapped robots, and
/// over simple hand-written test chains alike.
pub trait Kinematics {
    /// Pose of the tool tip for the given joints.
    fn forward(&self, qs: &Joints) -> Result<Pose, KinematicsError>;

    /// Pose of the tool tip plus the Cartesian positions of every frame
    /// origin along the chain: the base, each joint after its transform, and
    /// the tool tip. Always `dof + 2` points; this is the drawing contract
    /// display layers rely on.
    fn forward_with_joint_positions(
        &self,
        qs: &Joints,
    ) -> Result<(Pose, Vec<Point3<f64>>), KinematicsError>;

    /// Number of actuated joints.
    fn dof(&self) -> usize;

    /// Joint limits, if the robot carries them.
    fn joint_limits(&self) -> Option<&JointLimits> {
        None
    }

    /// Cartesian position of the tool tip, discarding orientation.
    fn tool_position(&self, qs: &Joints) -> Result<Point3<f64>, KinematicsError> {
        Ok(Point3::from(self.forward(qs)?.translation.vector))
    }
}
