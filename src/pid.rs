//! Vectorial three axis PID controller with a filtered derivative term and
//! output saturation. The typical use is turning a persistent Cartesian
//! position error into a velocity command once per control tick, feeding the
//! result to an IK stage as the per-tick displacement.

use nalgebra::Vector3;

/// Per-axis PID controller over a 3-vector error. Gains are public so a
/// caller can retune between ticks; the accumulated state is private and
/// only changed by [`Pid3::step`] and [`Pid3::reset`].
#[derive(Debug, Clone)]
pub struct Pid3 {
    /// Proportional gain per axis.
    pub kp: Vector3<f64>,
    /// Integral gain per axis.
    pub ki: Vector3<f64>,
    /// Derivative gain per axis.
    pub kd: Vector3<f64>,
    /// Derivative low-pass time constant, seconds. The filter coefficient is
    /// `tau / (tau + dt)`, so `tau = 0` disables the filtering entirely.
    pub tau: f64,
    output_limits: Option<(Vector3<f64>, Vector3<f64>)>,
    integral: Vector3<f64>,
    filtered_derivative: Vector3<f64>,
    previous_error: Vector3<f64>,
}

impl Pid3 {
    /// Creates a controller with the same scalar gains on all three axes.
    pub fn new(kp: f64, ki: f64, kd: f64, tau: f64) -> Self {
        Pid3 {
            kp: Vector3::repeat(kp),
            ki: Vector3::repeat(ki),
            kd: Vector3::repeat(kd),
            tau,
            output_limits: None,
            integral: Vector3::zeros(),
            filtered_derivative: Vector3::zeros(),
            previous_error: Vector3::zeros(),
        }
    }

    /// Adds per-axis saturation bounds on the output. Only the final output
    /// is clamped; the integral keeps accumulating while the output sits on
    /// a bound, so a long saturated phase winds the integral up.
    pub fn with_output_limits(mut self, umin: Vector3<f64>, umax: Vector3<f64>) -> Self {
        self.output_limits = Some((umin, umax));
        self
    }

    /// One controller tick: integrate the error, differentiate it through
    /// the low-pass filter, and combine the three terms.
    ///
    /// `dt` is expected positive; a zero `dt` is defended by flooring the
    /// derivative denominator at 1e-6 s, a negative one is not.
    pub fn step(&mut self, error: &Vector3<f64>, dt: f64) -> Vector3<f64> {
        self.integral += error * dt;
        let de = (error - self.previous_error) / dt.max(1e-6);
        let alpha = self.tau / (self.tau + dt);
        self.filtered_derivative = self.filtered_derivative * alpha + de * (1.0 - alpha);
        self.previous_error = *error;

        let mut u = self.kp.component_mul(error)
            + self.ki.component_mul(&self.integral)
            + self.kd.component_mul(&self.filtered_derivative);
        if let Some((umin, umax)) = &self.output_limits {
            u = u.sup(umin).inf(umax);
        }
        u
    }

    /// Zeroes the integral, the filtered derivative and the remembered
    /// error. Gains and bounds stay as configured.
    pub fn reset(&mut self) {
        self.integral = Vector3::zeros();
        self.filtered_derivative = Vector3::zeros();
        self.previous_error = Vector3::zeros();
    }

    /// Accumulated integral term, exposed for telemetry.
    pub fn integral(&self) -> &Vector3<f64> {
        &self.integral
    }
}

impl Default for Pid3 {
    /// The jog-loop tuning: `kp = 0.6`, no integral action, `kd = 0.12`,
    /// `tau = 50` ms, no saturation.
    fn default() -> Self {
        Pid3::new(0.6, 0.0, 0.12, 0.05)
    }
}
