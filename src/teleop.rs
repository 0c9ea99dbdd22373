//! Per-tick teleoperation: a jog controller that owns the joint vector and
//! advances it from a small Cartesian velocity command each control tick,
//! through whichever IK strategy the caller selected.

use crate::ik_analytic::PlanarArmIk;
use crate::ik_dls::DampedLeastSquares;
use crate::kinematic_traits::{Joints, Kinematics, KinematicsError};
use crate::kinematics_impl::DhKinematics;
use crate::model::RobotModel;
use nalgebra::{Point3, Vector3};

/// Fraction of the analytic solution blended into the current configuration
/// per tick. Snapping straight to the solution makes the arm vibrate between
/// nearby targets; the blend low-passes that out.
const ANALYTIC_BLEND: f64 = 0.3;

/// Which inverse kinematics drives the jog loop. Selected explicitly by the
/// caller; nothing is inferred from the robot itself beyond checking that the
/// choice is geometrically possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IkStrategy {
    /// One damped least squares step per tick. Works for any geometry.
    DampedLeastSquares,
    /// Closed-form solve of the absolute target each tick, blended into the
    /// current configuration. Needs the five axis planar-arm geometry.
    PlanarAnalytic,
}

enum JogSolver {
    Dls(DampedLeastSquares),
    Analytic { solver: PlanarArmIk, blend: f64 },
}

/// Owns the joint vector of one robot and moves it by small Cartesian
/// commands. Single writer: one instance per control loop.
pub struct JogController {
    robot: DhKinematics,
    solver: JogSolver,
    q: Joints,
}

impl JogController {
    /// Builds the controller for the given model and strategy, starting at
    /// the all-zero home configuration. In analytic mode an incompatible
    /// geometry is rejected here (`GeometryNotSupported`), not mid-loop.
    pub fn new(model: RobotModel, strategy: IkStrategy) -> Result<Self, KinematicsError> {
        let solver = match strategy {
            IkStrategy::DampedLeastSquares => JogSolver::Dls(DampedLeastSquares::default()),
            IkStrategy::PlanarAnalytic => JogSolver::Analytic {
                solver: PlanarArmIk::new(&model)?,
                blend: ANALYTIC_BLEND,
            },
        };
        let q = Joints::zeros(model.dof());
        Ok(JogController {
            robot: DhKinematics::new(model),
            solver,
            q,
        })
    }

    /// Advances the arm by one tick: moves the tool tip approximately by
    /// `dx` (model length units). A zero command leaves the configuration
    /// untouched.
    pub fn tick(&mut self, dx: &Vector3<f64>) -> Result<(), KinematicsError> {
        if dx.norm_squared() == 0.0 {
            return Ok(());
        }
        match &self.solver {
            JogSolver::Dls(dls) => {
                self.q = dls.step(&self.robot, &self.q, dx)?;
            }
            JogSolver::Analytic { solver, blend } => {
                let target = self.robot.tool_position(&self.q)? + dx;
                let result = solver.solve(&target);
                if let Some(best) = result.solutions.first() {
                    self.q += (best - &self.q) * *blend;
                }
            }
        }
        Ok(())
    }

    /// Live damping adjustment for the DLS strategy (a teleop front end maps
    /// a slider to this). No effect in analytic mode.
    pub fn set_damping(&mut self, lambda: f64) {
        if let JogSolver::Dls(dls) = &mut self.solver {
            dls.lambda = lambda;
        }
    }

    /// Returns the arm to the all-zero home configuration.
    pub fn home(&mut self) {
        self.q.fill(0.0);
    }

    /// Current joint configuration. Clone it before handing it to another
    /// thread; updates are not atomic across the components.
    pub fn joints(&self) -> &Joints {
        &self.q
    }

    /// Replaces the joint configuration, e.g. to resume from a recorded
    /// posture.
    pub fn set_joints(&mut self, qs: Joints) -> Result<(), KinematicsError> {
        if qs.len() != self.robot.dof() {
            return Err(KinematicsError::JointCountMismatch {
                expected: self.robot.dof(),
                found: qs.len(),
            });
        }
        self.q = qs;
        Ok(())
    }

    /// Cartesian position of the tool tip at the current configuration.
    pub fn tool_position(&self) -> Result<Point3<f64>, KinematicsError> {
        self.robot.tool_position(&self.q)
    }

    /// The underlying kinematics, for display and telemetry (e.g. drawing
    /// the chain via `forward_with_joint_positions`).
    pub fn kinematics(&self) -> &DhKinematics {
        &self.robot
    }
}
