//! Helper functions for joint vectors: angle wrapping, limit clipping,
//! degree conversions and console dumps.

use crate::kinematic_traits::{Joints, Solutions};
use nalgebra::DVector;
use std::f64::consts::PI;

/// Wraps a single angle to the range [-PI, PI).
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

/// Wraps every component of the joint vector to [-PI, PI). Idempotent.
pub fn wrap_to_pi(qs: &Joints) -> Joints {
    qs.map(wrap_angle)
}

/// Clamps the joint vector between the given bounds, element-wise. A missing
/// bound leaves that side unconstrained; with both bounds absent the vector
/// is returned unchanged.
pub fn clip_joints(
    qs: &Joints,
    q_min: Option<&DVector<f64>>,
    q_max: Option<&DVector<f64>>,
) -> Joints {
    let mut clipped = qs.clone();
    if let Some(min) = q_min {
        clipped = clipped.sup(min);
    }
    if let Some(max) = q_max {
        clipped = clipped.inf(max);
    }
    clipped
}

/// Allows to specify joint values in degrees (converts to radians).
pub fn joints_from_degrees(degrees: &[f64]) -> Joints {
    DVector::from_iterator(degrees.len(), degrees.iter().map(|deg| deg.to_radians()))
}

/// Converts a joint vector in radians to a plain degrees vector for display.
pub fn to_degrees(qs: &Joints) -> DVector<f64> {
    qs.map(|q| q.to_degrees())
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(qs: &Joints) {
    let mut row_str = String::new();
    for &q in qs.iter() {
        row_str.push_str(&format!("{:5.2} ", q.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print joint values for all solutions, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_solutions(solutions: &Solutions) {
    if solutions.is_empty() {
        println!("No solutions");
    }
    for qs in solutions {
        dump_joints(qs);
    }
}
