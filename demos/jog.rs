//! Teleoperation-style servo loop: a PID position controller (optional)
//! feeding per-tick Cartesian displacements into the jog controller.
//!
//! Run with `--strategy analytic` to watch the closed-form solver work, and
//! move the target out of reach (`--x 600`) to see the projection events the
//! solver traces.

use clap::{Parser, ValueEnum};
use nalgebra::Point3;
use rs_dh_kinematics::model::RobotModel;
use rs_dh_kinematics::pid::Pid3;
use rs_dh_kinematics::teleop::{IkStrategy, JogController};
use rs_dh_kinematics::utils::dump_joints;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Strategy {
    /// One damped least squares step per tick.
    Dls,
    /// Closed-form planar-arm solve, blended into the current posture.
    Analytic,
}

#[derive(Parser)]
#[command(about = "Servo the RV-M2 tool tip toward a Cartesian target")]
struct Args {
    /// Target x in millimeters.
    #[arg(long, default_value_t = 380.0)]
    x: f64,

    /// Target y in millimeters.
    #[arg(long, default_value_t = 40.0)]
    y: f64,

    /// Target z in millimeters.
    #[arg(long, default_value_t = 330.0)]
    z: f64,

    #[arg(long, value_enum, default_value = "dls")]
    strategy: Strategy,

    /// Control ticks to run (50 ms each).
    #[arg(long, default_value_t = 200)]
    ticks: usize,

    /// Shape the command with the PID controller instead of feeding the raw
    /// position error to the jog.
    #[arg(long)]
    pid: bool,
}

const DT: f64 = 0.05;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let strategy = match args.strategy {
        Strategy::Dls => IkStrategy::DampedLeastSquares,
        Strategy::Analytic => IkStrategy::PlanarAnalytic,
    };
    let mut controller = JogController::new(RobotModel::rv_m2(), strategy)?;
    let mut pid = args.pid.then(Pid3::default);
    let target = Point3::new(args.x, args.y, args.z);

    println!(
        "Servoing to ({:.1}, {:.1}, {:.1}) over {} ticks",
        target.x, target.y, target.z, args.ticks
    );
    for tick in 0..args.ticks {
        let error = target - controller.tool_position()?;
        let dx = match pid.as_mut() {
            Some(pid) => pid.step(&error, DT) * DT,
            None => error,
        };
        controller.tick(&dx)?;
        if tick % 20 == 0 {
            println!("tick {tick:4}: error {:8.3} mm", error.norm());
        }
    }

    let residual = (target - controller.tool_position()?).norm();
    println!("\nFinal error: {residual:.4} mm. Joints (degrees):");
    dump_joints(controller.joints());
    Ok(())
}
