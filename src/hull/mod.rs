//! Online convex hull of a growing point set.
//!
//! [`Hull`] is a small state machine over the degenerate figures a point set
//! passes through before it spans an area: nothing, a single point, a
//! segment, and finally a convex [`Polygon`] that is updated in place.
//!
//! ```
//! use onhull::{Hull, Point2};
//!
//! let hull = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)]
//!     .into_iter()
//!     .map(|(x, y)| Point2::new(x, y))
//!     .collect::<Hull>();
//! assert_eq!(hull.vertex_count(), 4);
//! assert!((hull.area() - 1.0).abs() < 1e-12);
//! ```

pub mod polygon;
pub mod ring;

pub use polygon::Polygon;
pub use ring::{VertexKey, VertexRing};

use tracing::debug;

use crate::error::{HullError, Result};
use crate::math::predicates::{distance, is_between};
use crate::math::Point2;

/// Convex hull of every point added so far.
#[derive(Debug, Clone, Default)]
pub enum Hull {
    /// No points yet.
    #[default]
    Empty,
    /// All points coincide.
    Single(Point2),
    /// All points are collinear; the two extreme points.
    Segment(Point2, Point2),
    /// The points span an area.
    Polygon(Polygon),
}

impl Hull {
    /// Creates an empty hull.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the hull after adding `p`.
    #[must_use]
    pub fn add(mut self, p: Point2) -> Self {
        self.add_mut(p);
        self
    }

    /// Adds `p` in place. Returns `true` if the figure changed.
    pub fn add_mut(&mut self, p: Point2) -> bool {
        let next = match self {
            Self::Empty => Self::Single(p),
            Self::Single(q) => {
                if *q == p {
                    return false;
                }
                Self::Segment(*q, p)
            }
            Self::Segment(a, b) => {
                let (a, b) = (*a, *b);
                if let Some(polygon) = Polygon::new(a, b, p) {
                    Self::Polygon(polygon)
                } else if is_between(&p, &a, &b) {
                    return false;
                } else if is_between(&a, &p, &b) {
                    Self::Segment(p, b)
                } else {
                    Self::Segment(a, p)
                }
            }
            Self::Polygon(polygon) => return polygon.add(p),
        };
        debug!(from = self.kind(), to = next.kind(), "hull transition");
        *self = next;
        true
    }

    /// Like [`Hull::add_mut`], but rejects points with NaN or infinite
    /// coordinates, which would break the orientation predicates.
    ///
    /// # Errors
    ///
    /// Returns [`HullError::NonFiniteCoordinate`] if either coordinate of `p`
    /// is not finite. The hull is left untouched.
    pub fn try_add(&mut self, p: Point2) -> Result<bool> {
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(HullError::NonFiniteCoordinate { x: p.x, y: p.y });
        }
        Ok(self.add_mut(p))
    }

    /// Perimeter of the hull. A segment counts both directions.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        match self {
            Self::Empty | Self::Single(_) => 0.0,
            Self::Segment(a, b) => 2.0 * distance(a, b),
            Self::Polygon(polygon) => polygon.perimeter(),
        }
    }

    /// Area enclosed by the hull.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Polygon(polygon) => polygon.area(),
            _ => 0.0,
        }
    }

    /// Number of hull vertices with a strictly acute interior angle.
    #[must_use]
    pub fn acute_angle_count(&self) -> usize {
        match self {
            Self::Polygon(polygon) => polygon.acute_count(),
            _ => 0,
        }
    }

    /// Number of hull vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) => 1,
            Self::Segment(..) => 2,
            Self::Polygon(polygon) => polygon.len(),
        }
    }

    /// Hull vertices; counter-clockwise for a polygon.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(p) => vec![*p],
            Self::Segment(a, b) => vec![*a, *b],
            Self::Polygon(polygon) => polygon.vertices(),
        }
    }

    /// Short name of the current figure.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Single(_) => "single",
            Self::Segment(..) => "segment",
            Self::Polygon(_) => "polygon",
        }
    }
}

impl Extend<Point2> for Hull {
    fn extend<I: IntoIterator<Item = Point2>>(&mut self, iter: I) {
        for p in iter {
            self.add_mut(p);
        }
    }
}

impl FromIterator<Point2> for Hull {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        let mut hull = Self::new();
        hull.extend(iter);
        hull
    }
}
