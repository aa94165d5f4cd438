pub mod polygon_2d;
pub mod predicates;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Tolerance for approximate floating-point comparisons of derived
/// quantities. The hull predicates themselves are exact.
pub const TOLERANCE: f64 = 1e-10;
