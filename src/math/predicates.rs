//! Exact orientation and distance predicates on 2D points.
//!
//! The hull is kept in counter-clockwise order, so the outer side of a
//! directed edge `a → b` is its right-hand side.

use super::{Point2, Vector2};

/// Euclidean distance between `a` and `b`.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Doubled signed area of the triangle `a, b, c`.
///
/// Positive when `a → b → c` winds counter-clockwise, negative when
/// clockwise, zero when the points are collinear.
#[must_use]
pub fn signed_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    cross(&(b - a), &(c - a))
}

/// Returns `true` if `a`, `b` and `c` are not collinear.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn forms_triangle(a: &Point2, b: &Point2, c: &Point2) -> bool {
    signed_area(a, b, c) != 0.0
}

/// Returns `true` if `p` lies within the closed segment `[a, b]`.
///
/// Only meaningful when the three points are already known to be collinear:
/// the test is a bounding-box check.
#[must_use]
pub fn is_between(p: &Point2, a: &Point2, b: &Point2) -> bool {
    a.x.min(b.x) <= p.x && p.x <= a.x.max(b.x) && a.y.min(b.y) <= p.y && p.y <= a.y.max(b.y)
}

/// Returns `true` if the directed edge `a → b` is illuminated by `t`,
/// i.e. `t` lies strictly on its outer (right-hand) side.
#[must_use]
pub fn is_light(t: &Point2, a: &Point2, b: &Point2) -> bool {
    signed_area(a, b, t) < 0.0
}

/// Returns `true` if the angle at `b` between the rays `b → a` and `b → c`
/// is strictly less than 90°.
#[must_use]
pub fn is_acute(a: &Point2, b: &Point2, c: &Point2) -> bool {
    (a - b).dot(&(c - b)) > 0.0
}

/// z-component of the cross product of two plane vectors.
#[must_use]
pub fn cross(u: &Vector2, v: &Vector2) -> f64 {
    u.x * v.y - u.y * v.x
}
