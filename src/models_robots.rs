//! Hardcoded model definitions for a few robots

use crate::kinematic_traits::Pose;
use crate::model::{DhRow, JointLimits, RobotModel};
use crate::utils::joints_from_degrees;
use std::f64::consts::FRAC_PI_2;

impl RobotModel {
    /// Mitsubishi RV-M2, a small five axis educational arm. Millimeters and
    /// radians; base and tool transforms are identity.
    ///
    /// The chain is a base yaw (link offset 300 mm, twist +90 degrees so the
    /// following joints pitch in the vertical plane), a 250 mm upper arm, a
    /// 160 mm forearm and a two joint wrist with no translation of its own.
    /// Having all wrist rows translation-free keeps the tool tip on the wrist
    /// point, which is what makes the closed-form position solver in
    /// [`crate::ik_analytic`] applicable to this robot.
    pub fn rv_m2() -> Self {
        RobotModel {
            dh: vec![
                DhRow { a: 0.0, alpha: FRAC_PI_2, d: 300.0, theta0: 0.0 },
                DhRow { a: 250.0, alpha: 0.0, d: 0.0, theta0: 0.0 },
                DhRow { a: 160.0, alpha: 0.0, d: 0.0, theta0: 0.0 },
                DhRow { a: 0.0, alpha: FRAC_PI_2, d: 0.0, theta0: 0.0 },
                DhRow { a: 0.0, alpha: 0.0, d: 0.0, theta0: 0.0 },
            ],
            base: Pose::identity(),
            tool: Pose::identity(),
            limits: Some(JointLimits {
                q_min: joints_from_degrees(&[-150.0, -60.0, -45.0, -120.0, -180.0]),
                q_max: joints_from_degrees(&[150.0, 120.0, 135.0, 120.0, 180.0]),
                dq_max: joints_from_degrees(&[120.0; 5]),
                ddq_max: joints_from_degrees(&[300.0; 5]),
            }),
        }
    }
}
