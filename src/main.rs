use anyhow::Result;
use nalgebra::Point3;
use rs_dh_kinematics::ik_analytic::PlanarArmIk;
use rs_dh_kinematics::ik_dls::DampedLeastSquares;
use rs_dh_kinematics::kinematic_traits::{Joints, Kinematics};
use rs_dh_kinematics::kinematics_impl::DhKinematics;
use rs_dh_kinematics::model::RobotModel;
use rs_dh_kinematics::utils::{dump_joints, dump_solutions, joints_from_degrees};

/// Usage example.
fn main() -> Result<()> {
    let model = RobotModel::rv_m2();
    let robot = DhKinematics::new(model.clone());

    println!("Home configuration (joints in degrees):");
    let home: Joints = Joints::zeros(robot.dof()); // Joints is alias of DVector<f64>
    dump_joints(&home);
    let position = robot.tool_position(&home)?;
    println!(
        "Tool tip at home: ({:.1}, {:.1}, {:.1}) mm",
        position.x, position.y, position.z
    );

    println!("\nElbow bent by -30/+30 degrees:");
    let bent = joints_from_degrees(&[0.0, -30.0, 30.0, 0.0, 0.0]);
    dump_joints(&bent);
    let position = robot.tool_position(&bent)?;
    println!(
        "Tool tip: ({:.1}, {:.1}, {:.1}) mm",
        position.x, position.y, position.z
    );

    println!("\nClosed-form solutions for that position, elbow-up first:");
    let solver = PlanarArmIk::new(&model)?;
    let result = solver.solve(&position);
    dump_solutions(&result.solutions);

    println!("\nAn unreachable target is projected onto the workspace boundary:");
    let result = solver.solve(&Point3::new(500.0, 0.0, 300.0));
    println!("projected: {}", result.projected);
    dump_solutions(&result.solutions);

    println!("\nJogging numerically toward a nearby target:");
    let dls = DampedLeastSquares::default();
    let target = Point3::new(390.0, 30.0, 320.0);
    let mut q = home;
    for tick in 0..30 {
        let error = target - robot.tool_position(&q)?;
        if tick % 10 == 0 {
            println!("tick {:2}: error {:7.3} mm", tick, error.norm());
        }
        q = dls.step(&robot, &q, &error)?;
    }
    let error = target - robot.tool_position(&q)?;
    println!("final error: {:.4} mm, at joints:", error.norm());
    dump_joints(&q);

    #[cfg(feature = "allow_filesystem")]
    {
        // The same robot, assembled from a CSV bundle directory.
        println!("\nLoading the RV-M2 from its CSV bundle:");
        match RobotModel::from_csv_dir("src/tests/data/rv_m2") {
            Ok(loaded) => {
                let robot = DhKinematics::new(loaded);
                let tip = robot.tool_position(&Joints::zeros(5))?;
                println!(
                    "Home tool tip from the bundle: ({:.1}, {:.1}, {:.1}) mm",
                    tip.x, tip.y, tip.z
                );
            }
            Err(err) => println!("Bundle not readable from here: {err}"),
        }
    }

    Ok(())
}
