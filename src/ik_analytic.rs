//! Closed form inverse kinematics for five axis arms whose shoulder and elbow
//! form a planar two link chain (base yaw, two planar links, two wrist
//! joints). Position only: the wrist is posed to keep the tool axis level
//! rather than solved for an independent orientation.

use crate::kinematic_traits::{KinematicsError, Solutions};
use crate::model::{JointLimits, RobotModel};
use crate::utils::wrap_to_pi;
use nalgebra::{dvector, Point3};
use tracing::debug;

/// Outcome of one closed form solve.
///
/// `solutions` is ordered elbow-up first; callers that want a single answer
/// take the first element. The two flags report the degradations the solver
/// applies instead of failing, so a caller (or a test) can tell a clean
/// solution from a best-effort one.
#[derive(Debug, Clone)]
pub struct PlanarIkSolutions {
    /// Zero, one or two joint vectors reaching the (possibly projected)
    /// target, elbow-up first.
    pub solutions: Solutions,
    /// The target was outside the reachable annulus and has been projected
    /// onto the nearest reachable radius before solving.
    pub projected: bool,
    /// No candidate satisfied the joint limits; the elbow-up candidate was
    /// clamped into the limit box and returned as a fallback.
    pub clamped: bool,
}

/// Closed form solver for the planar-arm geometry. Captures the three lengths
/// that define it (shoulder height `d1`, link lengths `a1`, `a2`) and a copy
/// of the joint limits at construction, so an incompatible model is rejected
/// up front rather than producing nonsense mid-loop.
pub struct PlanarArmIk {
    a1: f64,
    a2: f64,
    d1: f64,
    limits: Option<JointLimits>,
}

impl PlanarArmIk {
    /// Binds the solver to a model, validating the geometry it assumes:
    /// five joints, with the second and third DH rows carrying positive link
    /// lengths. Models of any other shape get `GeometryNotSupported`.
    pub fn new(model: &RobotModel) -> Result<Self, KinematicsError> {
        if model.dof() != 5 {
            return Err(KinematicsError::GeometryNotSupported(format!(
                "the planar-arm solver needs 5 joints, the model has {}",
                model.dof()
            )));
        }
        let dh = model.dh();
        let a1 = dh[1].a;
        let a2 = dh[2].a;
        let d1 = dh[0].d;
        if a1 <= 0.0 || a2 <= 0.0 {
            return Err(KinematicsError::GeometryNotSupported(format!(
                "shoulder and elbow links must have positive length, got a1 = {a1}, a2 = {a2}"
            )));
        }
        Ok(PlanarArmIk {
            a1,
            a2,
            d1,
            limits: model.limits().cloned(),
        })
    }

    /// Solves for the joint vectors that place the tool tip at `target`
    /// (base frame, same length units as the model).
    ///
    /// The base yaw comes straight from the target azimuth, the shoulder and
    /// elbow from the law of cosines in the vertical plane through the
    /// target, and the wrist keeps the tool axis level (`q4 = -(q2 + q3)`,
    /// `q5 = 0`). Targets beyond the reachable annulus are projected onto its
    /// boundary and solved anyway (`projected` is set); candidates violating
    /// the joint limits are dropped, and if none survive the elbow-up branch
    /// is clamped into the limit box (`clamped` is set). The solver never
    /// fails: a teleoperation loop always gets a pose to move toward.
    pub fn solve(&self, target: &Point3<f64>) -> PlanarIkSolutions {
        let q1 = target.y.atan2(target.x);
        let r = target.x.hypot(target.y);
        let z_rel = target.z - self.d1;

        // Law of cosines; |D| > 1 means the planar distance is outside
        // [|a1 - a2|, a1 + a2] and the clamp projects onto the boundary.
        let d_raw = (r * r + z_rel * z_rel - self.a1 * self.a1 - self.a2 * self.a2)
            / (2.0 * self.a1 * self.a2);
        let projected = d_raw.abs() > 1.0;
        if projected {
            debug!(
                "target ({:.3}, {:.3}, {:.3}) is out of reach (D = {d_raw:.6}), \
                 projecting onto the workspace boundary",
                target.x, target.y, target.z
            );
        }
        let d = d_raw.clamp(-1.0, 1.0);
        let s = (1.0 - d * d).sqrt();
        let phi = z_rel.atan2(r);

        // Elbow-up first, elbow-down second.
        let mut candidates: Solutions = Vec::with_capacity(2);
        for q3 in [s.atan2(d), (-s).atan2(d)] {
            let psi = (self.a2 * q3.sin()).atan2(self.a1 + self.a2 * q3.cos());
            let q2 = phi - psi;
            let q4 = -(q2 + q3);
            candidates.push(wrap_to_pi(&dvector![q1, q2, q3, q4, 0.0]));
        }

        match &self.limits {
            Some(limits) => {
                let solutions: Solutions = candidates
                    .iter()
                    .filter(|candidate| limits.contains(candidate))
                    .cloned()
                    .collect();
                if solutions.is_empty() {
                    debug!(
                        "no in-limit solution for ({:.3}, {:.3}, {:.3}), \
                         clamping the elbow-up branch",
                        target.x, target.y, target.z
                    );
                    PlanarIkSolutions {
                        solutions: vec![limits.clamp(&candidates[0])],
                        projected,
                        clamped: true,
                    }
                } else {
                    PlanarIkSolutions {
                        solutions,
                        projected,
                        clamped: false,
                    }
                }
            }
            None => PlanarIkSolutions {
                solutions: candidates,
                projected,
                clamped: false,
            },
        }
    }
}
