//! Defines the robot model data structure: DH table, base and tool transforms
//! and joint limits.

use crate::kinematic_traits::{Joints, KinematicsError, Pose};
use nalgebra::DVector;

/// One row of the Denavit-Hartenberg table. Standard convention: `a` is the
/// link length (mm), `alpha` the link twist (rad), `d` the link offset (mm)
/// and `theta0` the joint angle offset (rad) added to the joint variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DhRow {
    pub a: f64,
    pub alpha: f64,
    pub d: f64,
    pub theta0: f64,
}

/// Per joint position, velocity and acceleration limits, after normalization
/// to radians. Position limits are a plain box: `q_min[i] <= q_max[i]`,
/// no wrap-around ranges.
#[derive(Debug, Clone)]
pub struct JointLimits {
    pub q_min: DVector<f64>,
    pub q_max: DVector<f64>,
    pub dq_max: DVector<f64>,
    pub ddq_max: DVector<f64>,
}

impl JointLimits {
    /// Creates validated limits: all four vectors must cover the same number
    /// of joints and every position range must be ordered.
    pub fn new(
        q_min: DVector<f64>,
        q_max: DVector<f64>,
        dq_max: DVector<f64>,
        ddq_max: DVector<f64>,
    ) -> Result<Self, KinematicsError> {
        let dof = q_min.len();
        for other in [q_max.len(), dq_max.len(), ddq_max.len()] {
            if other != dof {
                return Err(KinematicsError::LimitsDofMismatch { expected: dof, found: other });
            }
        }
        for i in 0..dof {
            if q_min[i] > q_max[i] {
                return Err(KinematicsError::LimitsOutOfOrder {
                    joint: i,
                    min: q_min[i],
                    max: q_max[i],
                });
            }
        }
        Ok(JointLimits { q_min, q_max, dq_max, ddq_max })
    }

    /// Number of joints these limits cover.
    pub fn dof(&self) -> usize {
        self.q_min.len()
    }

    /// True if every joint of `qs` lies within its position range.
    pub fn contains(&self, qs: &Joints) -> bool {
        qs.len() == self.dof()
            && qs
                .iter()
                .enumerate()
                .all(|(i, &q)| q >= self.q_min[i] && q <= self.q_max[i])
    }

    /// Element-wise clamp of `qs` into the position box.
    pub fn clamp(&self, qs: &Joints) -> Joints {
        qs.sup(&self.q_min).inf(&self.q_max)
    }
}

/// Immutable description of one manipulator: the DH table, the fixed base and
/// tool transforms wrapped around the chain, and optional joint limits.
/// Constructed once at load time; all consumers share it read-only.
#[derive(Debug, Clone)]
pub struct RobotModel {
    pub(crate) dh: Vec<DhRow>,
    pub(crate) base: Pose,
    pub(crate) tool: Pose,
    pub(crate) limits: Option<JointLimits>,
}

impl RobotModel {
    /// Creates a validated model. The DH table must be non-empty and the
    /// limits, when present, must cover exactly one entry per DH row.
    pub fn new(
        dh: Vec<DhRow>,
        base: Pose,
        tool: Pose,
        limits: Option<JointLimits>,
    ) -> Result<Self, KinematicsError> {
        if dh.is_empty() {
            return Err(KinematicsError::EmptyDhTable);
        }
        if let Some(limits) = &limits {
            if limits.dof() != dh.len() {
                return Err(KinematicsError::LimitsDofMismatch {
                    expected: dh.len(),
                    found: limits.dof(),
                });
            }
        }
        Ok(RobotModel { dh, base, tool, limits })
    }

    /// Number of actuated joints (DH rows).
    pub fn dof(&self) -> usize {
        self.dh.len()
    }

    pub fn dh(&self) -> &[DhRow] {
        &self.dh
    }

    pub fn base(&self) -> &Pose {
        &self.base
    }

    pub fn tool(&self) -> &Pose {
        &self.tool
    }

    pub fn limits(&self) -> Option<&JointLimits> {
        self.limits.as_ref()
    }
}
