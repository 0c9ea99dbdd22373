
mod analytic_ik_test;
mod teleop_test;

#[cfg(feature = "allow_filesystem")]
mod test_from_csv;
