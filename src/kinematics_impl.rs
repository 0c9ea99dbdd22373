//! Forward kinematics over a Denavit-Hartenberg table.

use crate::kinematic_traits::{Joints, Kinematics, KinematicsError, Pose};
use crate::model::{DhRow, JointLimits, RobotModel};
use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

/// Kinematics of a serial chain described by a [`RobotModel`]. Owns the model;
/// stateless otherwise, so one instance can serve any number of concurrent
/// readers.
pub struct DhKinematics {
    model: RobotModel,
}

impl DhKinematics {
    /// Creates a new `DhKinematics` instance for the given model.
    pub fn new(model: RobotModel) -> Self {
        DhKinematics { model }
    }

    pub fn model(&self) -> &RobotModel {
        &self.model
    }

    fn check_joint_count(&self, qs: &Joints) -> Result<(), KinematicsError> {
        if qs.len() != self.model.dof() {
            return Err(KinematicsError::JointCountMismatch {
                expected: self.model.dof(),
                found: qs.len(),
            });
        }
        Ok(())
    }
}

/// Rigid transform of one DH row for the joint value `q`:
/// `Rz(theta0 + q) * Tz(d) * Tx(a) * Rx(alpha)`, expressed directly as an
/// isometry (rotation `Rz * Rx`, translation `(a cos theta, a sin theta, d)`).
pub(crate) fn link_transform(row: &DhRow, q: f64) -> Isometry3<f64> {
    let theta = row.theta0 + q;
    let rotation = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), theta)
        * UnitQuaternion::from_axis_angle(&Vector3::x_axis(), row.alpha);
    let translation = Translation3::new(row.a * theta.cos(), row.a * theta.sin(), row.d);
    Isometry3::from_parts(translation, rotation)
}

impl Kinematics for DhKinematics {
    fn forward(&self, qs: &Joints) -> Result<Pose, KinematicsError> {
        self.check_joint_count(qs)?;
        let mut t = *self.model.base();
        for (row, &q) in self.model.dh().iter().zip(qs.iter()) {
            t *= link_transform(row, q);
        }
        Ok(t * self.model.tool())
    }

    fn forward_with_joint_positions(
        &self,
        qs: &Joints,
    ) -> Result<(Pose, Vec<Point3<f64>>), KinematicsError> {
        self.check_joint_count(qs)?;
        let mut positions = Vec::with_capacity(self.model.dof() + 2);
        let mut t = *self.model.base();
        positions.push(Point3::from(t.translation.vector));
        for (row, &q) in self.model.dh().iter().zip(qs.iter()) {
            t *= link_transform(row, q);
            positions.push(Point3::from(t.translation.vector));
        }
        let t = t * self.model.tool();
        positions.push(Point3::from(t.translation.vector));
        Ok((t, positions))
    }

    fn dof(&self) -> usize {
        self.model.dof()
    }

    fn joint_limits(&self) -> Option<&JointLimits> {
        self.model.limits()
    }
}
