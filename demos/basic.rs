use nalgebra::Point3;
use rs_dh_kinematics::ik_analytic::PlanarArmIk;
use rs_dh_kinematics::kinematic_traits::{Joints, Kinematics};
use rs_dh_kinematics::kinematics_impl::DhKinematics;
use rs_dh_kinematics::model::RobotModel;
use rs_dh_kinematics::utils::{dump_joints, dump_solutions, joints_from_degrees};

fn main() -> anyhow::Result<()> {
    let robot = DhKinematics::new(RobotModel::rv_m2());
    let joints: Joints = joints_from_degrees(&[30.0, -20.0, 45.0, -25.0, 0.0]);
    println!("\nJoint configuration (degrees):");
    dump_joints(&joints);

    let pose = robot.forward(&joints)?; // Pose is an alias of nalgebra::Isometry3<f64>
    println!(
        "\nTool pose: x = {:.3}, y = {:.3}, z = {:.3} mm",
        pose.translation.x, pose.translation.y, pose.translation.z
    );

    println!("\nJoint origins along the chain (base, five joints, tool tip):");
    let (_, positions) = robot.forward_with_joint_positions(&joints)?;
    for (i, p) in positions.iter().enumerate() {
        println!("  {i}: ({:7.1}, {:7.1}, {:7.1})", p.x, p.y, p.z);
    }

    let solver = PlanarArmIk::new(robot.model())?;
    let tip = robot.tool_position(&joints)?;
    println!("\nClosed-form solutions for that tip position (elbow-up first):");
    let result = solver.solve(&tip);
    dump_solutions(&result.solutions);
    println!("projected: {}, clamped: {}", result.projected, result.clamped);

    println!("\nA target beyond the 410 mm reach is projected onto the boundary:");
    let result = solver.solve(&Point3::new(500.0, 0.0, 300.0));
    dump_solutions(&result.solutions);
    println!("projected: {}, clamped: {}", result.projected, result.clamped);

    Ok(())
}
