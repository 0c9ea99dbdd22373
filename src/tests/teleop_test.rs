use crate::kinematic_traits::Kinematics;
use crate::kinematics_impl::DhKinematics;
use crate::model::RobotModel;
use crate::pid::Pid3;
use crate::teleop::{IkStrategy, JogController};
use crate::tests::test_utils::assert_joints_near;
use nalgebra::Point3;

#[test]
fn test_dls_jog_tracks_a_reachable_target() {
    let mut controller = JogController::new(RobotModel::rv_m2(), IkStrategy::DampedLeastSquares)
        .expect("rv_m2 jogs fine");
    let target = Point3::new(380.0, 40.0, 330.0);

    // Command the full remaining error each tick; the step clip turns the
    // early ticks into a bounded crawl, the rest converge quadratically.
    for _ in 0..150 {
        let dx = target - controller.tool_position().expect("valid joints");
        controller.tick(&dx).expect("jog tick");
    }

    let residual = (target - controller.tool_position().unwrap()).norm();
    assert!(residual < 1e-2, "jog left a residual of {residual} mm");
}

#[test]
fn test_analytic_jog_settles_on_the_elbow_up_posture() {
    // The target is the tool position of a known elbow-up configuration, so
    // the blended analytic jog must converge to exactly that posture.
    let reference = crate::utils::joints_from_degrees(&[20.0, -10.0, 40.0, -30.0, 0.0]);
    let forward = DhKinematics::new(RobotModel::rv_m2());
    let target = forward.tool_position(&reference).expect("valid joints");

    let mut controller = JogController::new(RobotModel::rv_m2(), IkStrategy::PlanarAnalytic)
        .expect("rv_m2 fits the analytic solver");
    for _ in 0..120 {
        let dx = target - controller.tool_position().expect("valid joints");
        controller.tick(&dx).expect("jog tick");
    }

    assert_joints_near(controller.joints(), &reference, 1e-6);
    let residual = (target - controller.tool_position().unwrap()).norm();
    assert!(residual < 1e-3, "analytic jog left a residual of {residual} mm");
}

#[test]
fn test_pid_servo_through_the_jog_controller() {
    // Closed loop as a teleop front end would wire it: the PID turns the
    // position error into a velocity, the jog integrates it over the tick.
    let mut controller = JogController::new(RobotModel::rv_m2(), IkStrategy::DampedLeastSquares)
        .expect("rv_m2 jogs fine");
    let mut pid = Pid3::default();
    let target = Point3::new(380.0, 40.0, 330.0);
    let dt = 0.05;

    for _ in 0..400 {
        let error = target - controller.tool_position().expect("valid joints");
        let velocity = pid.step(&error, dt);
        controller.tick(&(velocity * dt)).expect("jog tick");
    }

    let residual = (target - controller.tool_position().unwrap()).norm();
    println!("PID servo residual after 20 s: {residual:.6} mm");
    assert!(residual < 0.5, "servo did not settle: residual {residual} mm");
}
