extern crate rand;

use crate::ik_analytic::PlanarArmIk;
use crate::kinematic_traits::{Joints, Kinematics};
use crate::kinematics_impl::DhKinematics;
use crate::model::RobotModel;
use crate::tests::test_utils::{assert_joints_near, assert_point_near};
use crate::utils::joints_from_degrees;
use nalgebra::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const POSITION_TOLERANCE: f64 = 1e-6; // millimeters

fn reproduces_target(robot: &DhKinematics, solutions: &[Joints], target: &Point3<f64>) -> bool {
    solutions.iter().any(|qs| {
        let tip = robot
            .tool_position(qs)
            .expect("the solver returns full joint vectors");
        (tip - target).norm() < POSITION_TOLERANCE
    })
}

#[test]
fn test_round_trip_fixed_cases() {
    let model = RobotModel::rv_m2();
    let robot = DhKinematics::new(model.clone());
    let solver = PlanarArmIk::new(&model).expect("rv_m2 fits the solver");

    // Interior configurations; the wrist values are arbitrary because they
    // do not move the tip on this geometry.
    let cases = [
        [0.0, -30.0, 30.0, 0.0, 0.0],
        [45.0, -20.0, 15.0, -10.0, 0.0],
        [-60.0, 10.0, 80.0, 20.0, 170.0],
        [120.0, 60.0, -40.0, 0.0, -90.0],
    ];
    for case in &cases {
        let qs = joints_from_degrees(case);
        let target = robot.tool_position(&qs).expect("interior configuration");
        let result = solver.solve(&target);
        assert!(!result.projected, "reachable target reported as projected: {case:?}");
        assert!(
            reproduces_target(&robot, &result.solutions, &target),
            "no candidate reproduces the target for joints {case:?}"
        );
    }
}

#[test]
fn test_round_trip_randomized_interior() {
    let seed = [0u8; 32];
    let mut rng = StdRng::from_seed(seed);
    let model = RobotModel::rv_m2();
    let robot = DhKinematics::new(model.clone());
    let solver = PlanarArmIk::new(&model).expect("rv_m2 fits the solver");

    let mut tested = 0;
    while tested < 200 {
        let q1: f64 = rng.gen_range(-145.0..145.0);
        let q2: f64 = rng.gen_range(-55.0..115.0);
        let q3: f64 = rng.gen_range(-40.0..130.0);
        // Keep the level-wrist joint inside its own range and stay away
        // from the folded posture where the azimuth flips.
        if (q2 + q3).abs() > 115.0 {
            continue;
        }
        let extension =
            250.0 * q2.to_radians().cos() + 160.0 * (q2 + q3).to_radians().cos();
        if extension < 50.0 {
            continue;
        }

        let qs = joints_from_degrees(&[q1, q2, q3, -(q2 + q3), 0.0]);
        let target = robot.tool_position(&qs).expect("interior configuration");
        let result = solver.solve(&target);
        assert!(
            !result.solutions.is_empty(),
            "no solutions for the interior configuration {qs:?}"
        );
        assert!(
            reproduces_target(&robot, &result.solutions, &target),
            "no candidate reproduces {target:?} for joints {qs:?}"
        );
        tested += 1;
    }
}

#[test]
fn test_solver_recovers_the_input_branch() {
    let model = RobotModel::rv_m2();
    let robot = DhKinematics::new(model.clone());
    let solver = PlanarArmIk::new(&model).expect("rv_m2 fits the solver");

    // Elbow-up input with the level wrist the solver itself would produce.
    let qs = joints_from_degrees(&[10.0, -25.0, 70.0, -45.0, 0.0]);
    let target = robot.tool_position(&qs).expect("interior configuration");
    let result = solver.solve(&target);

    let recovered = result
        .solutions
        .iter()
        .find(|candidate| candidate[2] > 0.0)
        .expect("the elbow-up branch must survive the limit filter");
    assert_joints_near(recovered, &qs, 1e-9);
}

#[test]
fn test_elbow_up_reported_first() {
    let model = RobotModel::rv_m2();
    let robot = DhKinematics::new(model.clone());
    let solver = PlanarArmIk::new(&model).expect("rv_m2 fits the solver");

    // Both branches of this target are inside the limits.
    let target = robot
        .tool_position(&joints_from_degrees(&[0.0, -30.0, 30.0, 0.0, 0.0]))
        .expect("interior configuration");
    let result = solver.solve(&target);

    assert_eq!(result.solutions.len(), 2);
    assert!(
        result.solutions[0][2] > 0.0,
        "first solution must be elbow-up, got q3 = {}",
        result.solutions[0][2]
    );
    assert!(
        result.solutions[1][2] < 0.0,
        "second solution must be elbow-down, got q3 = {}",
        result.solutions[1][2]
    );
    assert!(reproduces_target(&robot, &result.solutions[..1], &target));
    assert!(reproduces_target(&robot, &result.solutions[1..], &target));
}

#[test]
fn test_beyond_reach_lands_on_outer_boundary() {
    let model = RobotModel::rv_m2();
    let robot = DhKinematics::new(model.clone());
    let solver = PlanarArmIk::new(&model).expect("rv_m2 fits the solver");

    let result = solver.solve(&Point3::new(500.0, 0.0, 300.0));
    assert!(result.projected);
    assert!(!result.solutions.is_empty());
    let tip = robot
        .tool_position(&result.solutions[0])
        .expect("full joint vector");
    assert_point_near(&tip, (410.0, 0.0, 300.0), POSITION_TOLERANCE);

    // The same along a yawed direction.
    let result = solver.solve(&Point3::new(400.0, 400.0, 300.0));
    assert!(result.projected);
    let tip = robot
        .tool_position(&result.solutions[0])
        .expect("full joint vector");
    let reach = 410.0 / std::f64::consts::SQRT_2;
    assert_point_near(&tip, (reach, reach, 300.0), POSITION_TOLERANCE);
}

#[test]
fn test_inner_boundary_projection_without_limits() {
    // Too close to the base column: the planar distance is below |a1 - a2|
    // and the target projects onto the inner boundary of the annulus. Limits
    // are removed so the folded posture is not filtered away.
    let rv_m2 = RobotModel::rv_m2();
    let model = RobotModel::new(rv_m2.dh().to_vec(), *rv_m2.base(), *rv_m2.tool(), None)
        .expect("valid model");
    let robot = DhKinematics::new(model.clone());
    let solver = PlanarArmIk::new(&model).expect("geometry unchanged");

    let result = solver.solve(&Point3::new(30.0, 0.0, 300.0));
    assert!(result.projected);
    assert_eq!(result.solutions.len(), 2);
    let tip = robot
        .tool_position(&result.solutions[0])
        .expect("full joint vector");
    assert_point_near(&tip, (90.0, 0.0, 300.0), POSITION_TOLERANCE);
}

#[test]
fn test_unreachable_and_out_of_limits_sets_both_flags() {
    let solver = PlanarArmIk::new(&RobotModel::rv_m2()).expect("rv_m2 fits the solver");
    // Close to the base column: projected onto the folded posture, which the
    // elbow limit then rejects, leaving only the clamped fallback.
    let result = solver.solve(&Point3::new(30.0, 0.0, 300.0));
    assert!(result.projected);
    assert!(result.clamped);
    assert_eq!(result.solutions.len(), 1);
}
