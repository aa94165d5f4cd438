pub mod error;
pub mod hull;
pub mod math;

pub use error::{HullError, Result};
pub use hull::{Hull, Polygon};
pub use math::Point2;
