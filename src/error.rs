use thiserror::Error;

/// Errors reported by the fallible hull entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum HullError {
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    NonFiniteCoordinate { x: f64, y: f64 },
}

/// Convenience type alias for results using [`HullError`].
pub type Result<T> = std::result::Result<T, HullError>;
