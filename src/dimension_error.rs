//! Error handling for dimension construction and file parsing

use std::io;

/// Unified error to report failures when constructing mechanism dimensions
/// or reading them from a TOML file.
#[derive(Debug)]
pub enum DimensionError {
    IoError(io::Error),
    ParseError(String),
    ShapeMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for DimensionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            DimensionError::IoError(ref err) =>
                write!(f, "IO Error: {}", err),
            DimensionError::ParseError(ref msg) =>
                write!(f, "Parse Error: {}", msg),
            DimensionError::ShapeMismatch { expected, found } =>
                write!(f, "Shape Mismatch: expected {} legs, found {}", expected, found),
        }
    }
}

impl std::error::Error for DimensionError {}

impl From<io::Error> for DimensionError {
    fn from(err: io::Error) -> Self {
        DimensionError::IoError(err)
    }
}
