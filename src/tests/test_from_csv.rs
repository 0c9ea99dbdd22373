use crate::kinematic_traits::{Joints, Kinematics};
use crate::kinematics_impl::DhKinematics;
use crate::model::RobotModel;
use crate::parameter_error::ParameterError;
use crate::tests::test_utils::{assert_joints_near, assert_near, assert_point_near};
use nalgebra::Matrix4;

#[test]
fn test_rv_m2_bundle_matches_the_builtin() {
    let loaded = RobotModel::from_csv_dir("src/tests/data/rv_m2").expect("valid bundle");
    let builtin = RobotModel::rv_m2();

    assert_eq!(loaded.dof(), builtin.dof());
    for (i, (l, b)) in loaded.dh().iter().zip(builtin.dh().iter()).enumerate() {
        assert_near(l.a, b.a, 1e-12, &format!("a of row {i}"));
        assert_near(l.alpha, b.alpha, 1e-12, &format!("alpha of row {i}"));
        assert_near(l.d, b.d, 1e-12, &format!("d of row {i}"));
        assert_near(l.theta0, b.theta0, 1e-12, &format!("theta0 of row {i}"));
    }

    let base_deviation = (loaded.base().to_homogeneous() - Matrix4::identity()).abs().max();
    let tool_deviation = (loaded.tool().to_homogeneous() - Matrix4::identity()).abs().max();
    assert!(base_deviation < 1e-12, "base should be identity: {base_deviation:e}");
    assert!(tool_deviation < 1e-12, "tool should be identity: {tool_deviation:e}");

    let loaded_limits = loaded.limits().expect("bundle carries limits");
    let builtin_limits = builtin.limits().expect("builtin carries limits");
    assert_joints_near(&loaded_limits.q_min, &builtin_limits.q_min, 1e-12);
    assert_joints_near(&loaded_limits.q_max, &builtin_limits.q_max, 1e-12);
    assert_joints_near(&loaded_limits.dq_max, &builtin_limits.dq_max, 1e-12);
    assert_joints_near(&loaded_limits.ddq_max, &builtin_limits.ddq_max, 1e-12);

    let kinematics = DhKinematics::new(loaded);
    let tip = kinematics.tool_position(&Joints::zeros(5)).expect("home pose");
    assert_point_near(&tip, (410.0, 0.0, 300.0), 1e-9);
}

#[test]
fn test_bench_cell_bundle_places_the_chain_in_the_cell() {
    // Same arm, but mounted 100 mm forward, 50 mm up, yawed 90 degrees and
    // carrying a 40 mm tool. The home tip position pins all three transforms.
    let loaded = RobotModel::from_csv_dir("src/tests/data/bench_cell").expect("valid bundle");
    assert_point_near(&loaded.base().translation.vector.into(), (100.0, 0.0, 50.0), 1e-12);
    assert_point_near(&loaded.tool().translation.vector.into(), (0.0, 0.0, 40.0), 1e-12);

    let kinematics = DhKinematics::new(loaded);
    let tip = kinematics.tool_position(&Joints::zeros(5)).expect("home pose");
    assert_point_near(&tip, (100.0, 410.0, 310.0), 1e-9);
}

#[test]
fn test_missing_directory_is_an_io_error() {
    let err = RobotModel::from_csv_dir("src/tests/data/no_such_robot").unwrap_err();
    assert!(matches!(err, ParameterError::IoError(_)), "{err}");
}

#[test]
fn test_dh_with_a_missing_column_is_a_parse_error() {
    let err = RobotModel::from_csv_dir("src/tests/data/invalid/dh_missing_column").unwrap_err();
    match err {
        ParameterError::ParseError(msg) => assert!(msg.contains("theta0_deg"), "{msg}"),
        other => panic!("expected ParseError, got {other}"),
    }
}

#[test]
fn test_transform_with_too_few_rows_is_rejected() {
    let err = RobotModel::from_csv_dir("src/tests/data/invalid/base_shape").unwrap_err();
    assert!(
        matches!(err, ParameterError::InvalidLength { expected: 4, found: 3 }),
        "{err}"
    );
}

#[test]
fn test_scaled_rotation_is_not_rigid() {
    let err = RobotModel::from_csv_dir("src/tests/data/invalid/base_not_rigid").unwrap_err();
    match err {
        ParameterError::NotRigidTransform(msg) => assert!(msg.contains("orthonormal"), "{msg}"),
        other => panic!("expected NotRigidTransform, got {other}"),
    }
}

#[test]
fn test_limits_file_missing_a_row_is_rejected() {
    let err = RobotModel::from_csv_dir("src/tests/data/invalid/limits_missing_row").unwrap_err();
    match err {
        ParameterError::MissingField(field) => assert_eq!(field, "ddq_max_deg_s2"),
        other => panic!("expected MissingField, got {other}"),
    }
}

#[test]
fn test_limits_out_of_order_is_a_configuration_error() {
    let err = RobotModel::from_csv_dir("src/tests/data/invalid/limits_out_of_order").unwrap_err();
    assert!(matches!(err, ParameterError::KinematicsConfigurationError(_)), "{err}");
}
