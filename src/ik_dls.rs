//! Numerical inverse kinematics: one damped least squares step per control
//! tick. Suitable for jogging the arm by small Cartesian displacements; it
//! does not iterate to convergence on its own, the caller's loop does.

use crate::jacobian::PositionJacobian;
use crate::kinematic_traits::{Joints, Kinematics, KinematicsError};
use nalgebra::Vector3;

/// Damped least squares solver configuration. The fields are public so a
/// caller can retune damping between ticks (a damping slider in a teleop
/// front end does exactly that).
#[derive(Debug, Clone, Copy)]
pub struct DampedLeastSquares {
    /// Perturbation used for the finite difference Jacobian, radians.
    pub epsilon: f64,
    /// Damping factor. Larger values trade tracking accuracy for stability
    /// near singular configurations. Must stay above zero in production use.
    pub lambda: f64,
    /// Per-joint bound on a single step, radians. Caps the joint velocity one
    /// tick can command no matter how the solve is conditioned.
    pub step_clip: f64,
}

impl Default for DampedLeastSquares {
    fn default() -> Self {
        DampedLeastSquares {
            epsilon: 1e-4,
            lambda: 2.0,
            step_clip: 2.0_f64.to_radians(),
        }
    }
}

impl DampedLeastSquares {
    /// Advances the joint vector by one damped least squares step so that the
    /// tool tip approximately moves by `dx`.
    ///
    /// # Arguments
    ///
    /// * `robot` - The kinematics the Jacobian is estimated over
    /// * `qs` - The current joint configuration
    /// * `dx` - The desired Cartesian displacement of the tool tip, in the
    ///   same length units as the robot model (millimeters for the bundled
    ///   models)
    ///
    /// # Returns
    ///
    /// The next joint configuration: `qs + dq` with each component of `dq`
    /// clipped to `step_clip` and the sum clamped to the joint limits when
    /// the robot carries them.
    pub fn step(
        &self,
        robot: &impl Kinematics,
        qs: &Joints,
        dx: &Vector3<f64>,
    ) -> Result<Joints, KinematicsError> {
        let jacobian = PositionJacobian::new(robot, qs, self.epsilon)?;
        let mut dq = jacobian.damped_step(dx, self.lambda)?;
        for step in dq.iter_mut() {
            *step = step.clamp(-self.step_clip, self.step_clip);
        }
        let q_next = qs + dq;
        Ok(match robot.joint_limits() {
            Some(limits) => limits.clamp(&q_next),
            None => q_next,
        })
    }
}
