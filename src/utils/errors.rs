use thiserror::Error;

/// Errors raised while building or querying surface geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Degenerate geometry: section {index} and its successor share spanwise coordinate {coordinate}")]
    DegenerateGeometry { index: usize, coordinate: f64 },

    #[error("Spanwise coordinate {coordinate} outside defined range [{min}, {max}]")]
    OutOfRange { coordinate: f64, min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, GeometryError>;
