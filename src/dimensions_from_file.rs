//! Supports saving and loading mechanism dimensions as TOML files (optional)

use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::Deserialize;
use std::path::Path;

use crate::dimension_error::DimensionError;
use crate::dimensions::pppsr_kinematics::Dimensions;

#[derive(Deserialize)]
struct Document {
    /// Mount position per leg
    u_i: Vec<[f64; 3]>,
    /// Mount orientation per leg, quaternion (x, y, z, w)
    #[serde(rename = "O_i")]
    o_i: Vec<[f64; 4]>,
    /// Effector offset per leg
    b_i: Vec<[f64; 3]>,
    /// Link length per leg
    l_i: Vec<f64>,
}

impl Dimensions {
    /// Read the mechanism dimensions from a TOML file. TOML file like this is
    /// supported:
    /// ```toml
    /// u_i = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
    /// O_i = [[0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 0.0, 1.0], [0.0, 0.0, 0.0, 1.0]]
    /// b_i = [[0.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]
    /// l_i = [85.0, 85.0, 85.0]
    /// ```
    /// All four arrays must have one entry per leg. Quaternions are read in
    /// (x, y, z, w) component order and normalized.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, DimensionError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Reconstruct the dimensions from a TOML document, as produced by
    /// [Dimensions::to_toml]. A structurally malformed document (missing key,
    /// wrong vector or quaternion arity, non-numeric data) fails with
    /// [DimensionError::ParseError]; arrays of unequal length fail with
    /// [DimensionError::ShapeMismatch].
    pub fn from_toml(document: &str) -> Result<Self, DimensionError> {
        let document: Document = toml::from_str(document)
            .map_err(|e| DimensionError::ParseError(format!("{}", e)))?;

        Dimensions::from_parts(
            document.u_i.into_iter().map(Vector3::from).collect(),
            document
                .o_i
                .into_iter()
                .map(|[x, y, z, w]| UnitQuaternion::from_quaternion(Quaternion::new(w, x, y, z)))
                .collect(),
            document.b_i.into_iter().map(Vector3::from).collect(),
            document.l_i,
        )
    }

    /// Serialize and save to a TOML file, overwriting it if present.
    pub fn save_to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<(), DimensionError> {
        std::fs::write(path, self.to_toml())?;
        Ok(())
    }
}
