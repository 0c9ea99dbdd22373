//! Forward and inverse kinematics for serial-link manipulators described by
//! Denavit-Hartenberg (DH) parameters, plus the control-loop pieces needed
//! for real-time Cartesian teleoperation.
//!
//! The crate was written around small five-axis arms of the Mitsubishi RV-M2
//! class, but the DH chain, the Jacobian machinery and the jog loop work for
//! any serial geometry; only the closed-form solver is specific to arms whose
//! shoulder and elbow form a planar two-link chain.
//!
//! # Features
//!
//! - Forward kinematics over an arbitrary DH table, returning the tool pose
//!   and the Cartesian position of every joint origin along the chain (the
//!   `dof + 2` points a display layer draws).
//! - Numerical inverse kinematics: finite difference position Jacobian plus
//!   a damped least squares step, with per-tick step clipping and joint
//!   limit clamping. Stays well behaved at kinematic singularities.
//! - Closed-form inverse kinematics for the five axis planar-arm geometry
//!   (base yaw, two planar links, level wrist): elbow-up and elbow-down
//!   branches, limit filtering with a clamped fallback, and out-of-reach
//!   targets projected onto the workspace boundary with the projection
//!   reported, never hidden.
//! - A jog controller advancing the joint vector from per-tick Cartesian
//!   velocity commands through either solver; the strategy is selected
//!   explicitly by the caller.
//! - A three axis PID controller with a filtered derivative term and output
//!   saturation, for turning a position error into a velocity command.
//! - Robot descriptions loaded from a directory of CSV files (DH table,
//!   base and tool transforms, joint limits; external degrees normalized to
//!   radians), behind the `allow_filesystem` feature, plus the built-in
//!   RV-M2 definition for use without any file I/O.
//!
//! ## Examples
//!
//! - **basic.rs**: forward kinematics and both IK solvers on the RV-M2.
//! - **jog.rs**: a teleoperation-style servo loop, PID position controller
//!   feeding per-tick displacements into the jog controller.

pub mod kinematic_traits;
pub mod model;
pub mod models_robots;
pub mod kinematics_impl;

pub mod jacobian;
pub mod ik_dls;
pub mod ik_analytic;

pub mod utils;
pub mod pid;
pub mod teleop;

#[cfg(feature = "allow_filesystem")]
pub mod model_from_csv;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[cfg(test)]
mod tests;
