extern crate nalgebra as na;
use crate::kinematic_traits::{Joints, Kinematics, KinematicsError};
use na::{Matrix3, Matrix3xX, Vector3};

/// Struct representing the position Jacobian of a kinematic chain
pub struct PositionJacobian {
    /// A 3 x dof matrix mapping joint velocities to the linear velocity of the
    /// tool tip. Each column corresponds to a joint, each row to one Cartesian
    /// axis (x, y, z).
    matrix: Matrix3xX<f64>,
}

impl PositionJacobian {
    /// Constructs a new PositionJacobian by numerical differentiation of the
    /// forward kinematics around the given joint configuration
    ///
    /// # Arguments
    ///
    /// * `robot` - A reference to the robot implementing the Kinematics trait
    /// * `qs` - A reference to the joint configuration
    /// * `epsilon` - A small value used for numerical differentiation
    ///
    /// # Returns
    ///
    /// A new instance of `PositionJacobian`, or the error raised by the
    /// forward kinematics (wrong joint vector length).
    pub fn new(
        robot: &impl Kinematics,
        qs: &Joints,
        epsilon: f64,
    ) -> Result<Self, KinematicsError> {
        let matrix = compute_position_jacobian(robot, qs, epsilon)?;
        Ok(Self { matrix })
    }

    pub fn matrix(&self) -> &Matrix3xX<f64> {
        &self.matrix
    }

    /// Computes the damped least squares joint step for a desired Cartesian
    /// displacement of the tool tip.
    ///
    /// Solves `(J * J^T + lambda^2 * I) * y = dx` for the 3-vector `y` and
    /// returns `dq = J^T * y`. The damping `lambda` regularizes the solve near
    /// kinematic singularities where `J * J^T` is rank deficient; with any
    /// `lambda > 0` the system is symmetric positive definite and the solve
    /// cannot fail. With `lambda = 0` and a singular `J * J^T` the result is
    /// `SingularSystem`.
    ///
    /// # Arguments
    ///
    /// * `dx` - The desired Cartesian displacement of the tool tip
    /// * `lambda` - The damping factor
    pub fn damped_step(
        &self,
        dx: &Vector3<f64>,
        lambda: f64,
    ) -> Result<Joints, KinematicsError> {
        let j_jt = &self.matrix * self.matrix.transpose();
        let a = j_jt + Matrix3::identity() * (lambda * lambda);

        // Cholesky succeeds whenever the damping makes the system positive
        // definite; the LU path only matters for the undamped case.
        let y = match a.cholesky() {
            Some(cholesky) => cholesky.solve(dx),
            None => match a.lu().solve(dx) {
                Some(solution) => solution,
                None => return Err(KinematicsError::SingularSystem),
            },
        };
        Ok(self.matrix.transpose() * y)
    }
}

/// Computes the 3 x dof position Jacobian by forward differences: column `i`
/// is `(x(q + eps * e_i) - x(q)) / eps` where `x` is the tool position. This
/// costs `dof + 1` forward kinematics evaluations, the dominant expense of a
/// numerical IK step.
pub fn compute_position_jacobian(
    robot: &impl Kinematics,
    joints: &Joints,
    epsilon: f64,
) -> Result<Matrix3xX<f64>, KinematicsError> {
    let dof = joints.len();
    let mut jacobian = Matrix3xX::zeros(dof);
    let current_position = robot.tool_position(joints)?;

    let mut perturbed_qs = joints.clone();
    for i in 0..dof {
        perturbed_qs[i] += epsilon;
        let perturbed_position = robot.tool_position(&perturbed_qs)?;
        let column = (perturbed_position - current_position) / epsilon;
        jacobian.set_column(i, &column);
        perturbed_qs[i] = joints[i];
    }
    Ok(jacobian)
}
