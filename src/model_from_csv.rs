//! Robot bundle loading from a directory of CSV files (optional)

use crate::kinematic_traits::Pose;
use crate::model::{DhRow, JointLimits, RobotModel};
use crate::parameter_error::ParameterError;
use nalgebra::{DVector, Matrix3, Matrix4, Rotation3, Translation3, UnitQuaternion};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// One row of `dh.csv`. External units: millimeters and degrees; angles are
/// converted to radians during assembly.
#[derive(Deserialize)]
struct DhRecord {
    a_mm: f64,
    alpha_deg: f64,
    d_mm: f64,
    theta0_deg: f64,
}

/// Deviation tolerance when validating a rigid transform read from a file.
const RIGID_TOLERANCE: f64 = 1e-6;

impl RobotModel {
    /// Reads a robot description from a directory holding the four-file CSV
    /// bundle. The directory layout is:
    ///
    /// ```text
    /// dh.csv      a_mm,alpha_deg,d_mm,theta0_deg     one row per joint
    /// base.csv    headerless 4x4 rigid transform, row per line
    /// tool.csv    headerless 4x4 rigid transform, row per line
    /// limits.csv  type,j1,...,jN with the rows q_min_deg, q_max_deg,
    ///             dq_max_deg_s, ddq_max_deg_s2
    /// ```
    ///
    /// Degrees are converted to radians on load. The base and tool matrices
    /// must carry the bottom row `[0, 0, 0, 1]` and an orthonormal,
    /// non-reflecting rotation block; anything else is rejected as
    /// `NotRigidTransform`. Limits that disagree with the DH table (wrong
    /// arity, lower bound above upper) surface as
    /// `KinematicsConfigurationError`.
    pub fn from_csv_dir<P: AsRef<Path>>(dir: P) -> Result<Self, ParameterError> {
        let dir = dir.as_ref();
        let dh = read_dh(&dir.join("dh.csv"))?;
        let base = read_transform(&dir.join("base.csv"))?;
        let tool = read_transform(&dir.join("tool.csv"))?;
        let limits = read_limits(&dir.join("limits.csv"))?;
        Ok(RobotModel::new(dh, base, tool, Some(limits))?)
    }
}

fn read_dh(path: &Path) -> Result<Vec<DhRow>, ParameterError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let record: DhRecord = record?;
        rows.push(DhRow {
            a: record.a_mm,
            alpha: record.alpha_deg.to_radians(),
            d: record.d_mm,
            theta0: record.theta0_deg.to_radians(),
        });
    }
    Ok(rows)
}

fn read_transform(path: &Path) -> Result<Pose, ParameterError> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(file);
    let mut values = Vec::with_capacity(16);
    let mut row_count = 0;
    for record in reader.records() {
        let record = record?;
        if record.len() != 4 {
            return Err(ParameterError::InvalidLength { expected: 4, found: record.len() });
        }
        for field in record.iter() {
            let value: f64 = field.trim().parse().map_err(|_| {
                ParameterError::ParseError(format!(
                    "{}: not a number: '{}'",
                    path.display(),
                    field
                ))
            })?;
            values.push(value);
        }
        row_count += 1;
    }
    if row_count != 4 {
        return Err(ParameterError::InvalidLength { expected: 4, found: row_count });
    }
    isometry_from_matrix(&Matrix4::from_row_slice(&values), path)
}

/// Validates the homogeneous matrix and converts it into an isometry. The
/// rotation block must satisfy `R * R^T = I` within [`RIGID_TOLERANCE`] and
/// must not be a reflection.
fn isometry_from_matrix(m: &Matrix4<f64>, path: &Path) -> Result<Pose, ParameterError> {
    let bottom = [0.0, 0.0, 0.0, 1.0];
    for (j, expected) in bottom.iter().enumerate() {
        if (m[(3, j)] - expected).abs() > RIGID_TOLERANCE {
            return Err(ParameterError::NotRigidTransform(format!(
                "{}: bottom row must be [0, 0, 0, 1]",
                path.display()
            )));
        }
    }

    let r = m.fixed_view::<3, 3>(0, 0).into_owned();
    let deviation = (r * r.transpose() - Matrix3::identity()).abs().max();
    if deviation > RIGID_TOLERANCE {
        return Err(ParameterError::NotRigidTransform(format!(
            "{}: rotation block is not orthonormal (deviation {:.2e})",
            path.display(),
            deviation
        )));
    }
    if r.determinant() < 0.0 {
        return Err(ParameterError::NotRigidTransform(format!(
            "{}: rotation block is a reflection",
            path.display()
        )));
    }

    let rotation = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(r));
    let translation = Translation3::new(m[(0, 3)], m[(1, 3)], m[(2, 3)]);
    Ok(Pose::from_parts(translation, rotation))
}

fn read_limits(path: &Path) -> Result<JointLimits, ParameterError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut rows: HashMap<String, DVector<f64>> = HashMap::new();
    for record in reader.records() {
        let record = record?;
        let label = record.get(0).unwrap_or("").trim().to_string();
        let mut values = Vec::with_capacity(record.len().saturating_sub(1));
        for field in record.iter().skip(1) {
            let value: f64 = field.trim().parse().map_err(|_| {
                ParameterError::ParseError(format!(
                    "{}: not a number in row '{}': '{}'",
                    path.display(),
                    label,
                    field
                ))
            })?;
            values.push(value.to_radians());
        }
        rows.insert(label, DVector::from_vec(values));
    }

    let mut take = |label: &str| -> Result<DVector<f64>, ParameterError> {
        rows.remove(label)
            .ok_or_else(|| ParameterError::MissingField(label.to_string()))
    };
    Ok(JointLimits::new(
        take("q_min_deg")?,
        take("q_max_deg")?,
        take("dq_max_deg_s")?,
        take("ddq_max_deg_s2")?,
    )?)
}
