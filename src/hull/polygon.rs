use slotmap::SecondaryMap;
use tracing::trace;

use crate::math::polygon_2d::{acute_vertex_count, is_convex_ccw, perimeter_2d, signed_area_2d};
use crate::math::predicates::{distance, forms_triangle, is_acute, is_light, signed_area};
use crate::math::{Point2, TOLERANCE};

use super::ring::{VertexKey, VertexRing};

/// A convex polygon with at least three vertices, kept counter-clockwise.
///
/// Perimeter, area and the number of acute interior angles are cached and
/// updated by the exact deltas of each insertion.
#[derive(Debug, Clone)]
pub struct Polygon {
    ring: VertexRing,
    /// Acute flag of each vertex, computed against its current neighbours.
    acute: SecondaryMap<VertexKey, bool>,
    perimeter: f64,
    area: f64,
    acute_count: usize,
}

impl Polygon {
    /// Creates a triangle from three points, or `None` if they are collinear.
    #[must_use]
    pub fn new(a: Point2, b: Point2, c: Point2) -> Option<Self> {
        if !forms_triangle(&a, &b, &c) {
            return None;
        }
        let mut ring = VertexRing::new();
        let order = if is_light(&b, &a, &c) {
            [a, b, c]
        } else {
            [c, b, a]
        };
        for p in order {
            ring.push_last(p);
        }

        let mut polygon = Self {
            ring,
            acute: SecondaryMap::new(),
            perimeter: distance(&a, &b) + distance(&b, &c) + distance(&c, &a),
            area: triangle_area(&a, &b, &c),
            acute_count: 0,
        };
        let keys: Vec<VertexKey> = polygon.ring.keys().collect();
        for key in keys {
            polygon.acute_count += polygon.set_is_acute(key);
        }
        Some(polygon)
    }

    /// Cached perimeter.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    /// Cached area.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Number of vertices whose interior angle is strictly acute.
    #[must_use]
    pub fn acute_count(&self) -> usize {
        self.acute_count
    }

    /// Number of hull vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Always `false`: a polygon keeps at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Vertices in counter-clockwise order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        self.ring.iter().collect()
    }

    /// Recomputes every cached quantity from the vertex cycle and compares
    /// it with the incrementally maintained value.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let vertices = self.vertices();
        let scale = 1.0 + self.perimeter * self.perimeter;
        vertices.len() >= 3
            && is_convex_ccw(&vertices)
            && (perimeter_2d(&vertices) - self.perimeter).abs() <= TOLERANCE * scale
            && (signed_area_2d(&vertices) - self.area).abs() <= TOLERANCE * scale
            && acute_vertex_count(&vertices) == self.acute_count
    }

    /// Adds `t` to the hull. Returns `false` if `t` lies inside or on the
    /// boundary, in which case nothing is modified.
    pub fn add(&mut self, t: Point2) -> bool {
        if !self.seek_lit_edge(&t) {
            trace!(x = t.x, y = t.y, "point absorbed by hull");
            return false;
        }

        // The edge closing the cycle (last → first) is lit.
        let first = self.first_key();
        let last = self.last_key();
        let (p, q) = (self.ring.point(first), self.ring.point(last));
        self.perimeter -= distance(&q, &p);
        self.area += triangle_area(&t, &q, &p);

        let mut removed = 0;
        loop {
            let p_key = self.first_key();
            let p = self.ring.point(p_key);
            let next = self.ring.point(self.ring.next(p_key));
            if self.ring.len() <= 2 || !is_light(&t, &p, &next) {
                break;
            }
            self.perimeter -= distance(&p, &next);
            self.area += triangle_area(&t, &p, &next);
            self.drop_first();
            removed += 1;
        }

        loop {
            let q_key = self.last_key();
            let q = self.ring.point(q_key);
            let prev = self.ring.point(self.ring.prev(q_key));
            if self.ring.len() <= 2 || !is_light(&t, &prev, &q) {
                break;
            }
            self.perimeter -= distance(&prev, &q);
            self.area += triangle_area(&t, &prev, &q);
            self.drop_last();
            removed += 1;
        }

        let front = self.first_key();
        let back = self.last_key();
        self.perimeter +=
            distance(&t, &self.ring.point(front)) + distance(&t, &self.ring.point(back));
        let t_key = self.ring.push_first(t);

        for key in [front, back] {
            self.acute_count -= usize::from(self.is_vertex_acute(key));
            self.acute_count += self.set_is_acute(key);
        }
        self.acute_count += self.set_is_acute(t_key);

        trace!(
            x = t.x,
            y = t.y,
            removed,
            vertices = self.ring.len(),
            "point added to hull"
        );
        true
    }

    /// Rotates the ring until the edge (last → first) is illuminated by `t`.
    /// When no edge is lit the ring completes a full turn and is left as it
    /// was.
    fn seek_lit_edge(&mut self, t: &Point2) -> bool {
        for _ in 0..self.ring.len() {
            if is_light(t, &self.ring.point(self.last_key()), &self.ring.point(self.first_key())) {
                return true;
            }
            self.ring.rotate();
        }
        false
    }

    /// Stores the acute flag of vertex `key` against its current neighbours
    /// and returns it as a count contribution.
    fn set_is_acute(&mut self, key: VertexKey) -> usize {
        let prev = self.ring.point(self.ring.prev(key));
        let next = self.ring.point(self.ring.next(key));
        let flag = is_acute(&prev, &self.ring.point(key), &next);
        self.acute.insert(key, flag);
        usize::from(flag)
    }

    fn is_vertex_acute(&self, key: VertexKey) -> bool {
        self.acute.get(key).copied().unwrap_or(false)
    }

    fn drop_first(&mut self) {
        let (key, _) = self
            .ring
            .pop_first()
            .unwrap_or_else(|| unreachable!("polygon ring is never empty"));
        self.forget_vertex(key);
    }

    fn drop_last(&mut self) {
        let (key, _) = self
            .ring
            .pop_last()
            .unwrap_or_else(|| unreachable!("polygon ring is never empty"));
        self.forget_vertex(key);
    }

    fn forget_vertex(&mut self, key: VertexKey) {
        if self.acute.remove(key) == Some(true) {
            self.acute_count -= 1;
        }
    }

    fn first_key(&self) -> VertexKey {
        self.ring
            .first_key()
            .unwrap_or_else(|| unreachable!("polygon ring is never empty"))
    }

    fn last_key(&self) -> VertexKey {
        self.ring
            .last_key()
            .unwrap_or_else(|| unreachable!("polygon ring is never empty"))
    }
}

/// Unsigned area of the triangle `a, b, c`.
fn triangle_area(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    signed_area(a, b, c).abs() * 0.5
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn unit_triangle() -> Polygon {
        Polygon::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)).unwrap()
    }

    #[test]
    fn collinear_points_do_not_form_polygon() {
        assert!(Polygon::new(p(0.0, 0.0), p(1.0, 1.0), p(3.0, 3.0)).is_none());
        assert!(Polygon::new(p(0.0, 0.0), p(0.0, 0.0), p(3.0, 3.0)).is_none());
    }

    #[test]
    fn triangle_is_counter_clockwise_for_either_input_order() {
        let ccw = Polygon::new(p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)).unwrap();
        let cw = Polygon::new(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0)).unwrap();
        for poly in [ccw, cw] {
            assert!(signed_area_2d(&poly.vertices()) > 0.0);
            assert!(poly.is_consistent());
        }
    }

    #[test]
    fn triangle_cached_quantities() {
        let poly = unit_triangle();
        assert_eq!(poly.len(), 3);
        assert_relative_eq!(poly.perimeter(), 2.0 + 2.0_f64.sqrt());
        assert_relative_eq!(poly.area(), 0.5);
        // Right angle at the origin, two 45° angles.
        assert_eq!(poly.acute_count(), 2);
    }

    #[test]
    fn inside_point_changes_nothing() {
        let mut poly = unit_triangle();
        let before = poly.vertices();
        let (perimeter, area) = (poly.perimeter(), poly.area());
        assert!(!poly.add(p(0.1, 0.1)));
        assert_eq!(poly.vertices(), before);
        assert_eq!(poly.perimeter().to_bits(), perimeter.to_bits());
        assert_eq!(poly.area().to_bits(), area.to_bits());
    }

    #[test]
    fn boundary_and_vertex_points_change_nothing() {
        let mut poly = unit_triangle();
        for t in [p(0.5, 0.0), p(0.5, 0.5), p(0.0, 0.0), p(0.0, 1.0)] {
            assert!(!poly.add(t), "({}, {})", t.x, t.y);
        }
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn corner_point_makes_square() {
        let mut poly = unit_triangle();
        assert!(poly.add(p(1.0, 1.0)));
        assert_eq!(poly.len(), 4);
        assert_relative_eq!(poly.perimeter(), 4.0);
        assert_relative_eq!(poly.area(), 1.0);
        assert_eq!(poly.acute_count(), 0);
        assert!(poly.is_consistent());
    }

    #[test]
    fn far_point_removes_swallowed_vertices() {
        let mut poly = unit_triangle();
        for t in [p(0.4, 1.0), p(1.0, 0.4), p(0.8, 0.9), p(0.9, 0.8)] {
            assert!(poly.add(t));
            assert!(poly.is_consistent());
        }
        assert_eq!(poly.len(), 7);
        assert!(poly.add(p(2.0, 2.0)));
        assert_eq!(poly.len(), 4);
        assert_relative_eq!(poly.area(), 2.0);
        assert!(poly.is_consistent());
    }

    #[test]
    fn point_beyond_an_edge_line_keeps_collinear_vertex() {
        let mut poly = unit_triangle();
        assert!(poly.add(p(2.0, 0.0)));
        assert_eq!(poly.len(), 4);
        assert!(poly.vertices().contains(&p(1.0, 0.0)));
        assert_relative_eq!(poly.area(), 1.0);
        assert!(poly.is_consistent());
    }

    #[test]
    fn acute_flags_follow_neighbour_changes() {
        let mut poly = unit_triangle();
        poly.add(p(1.0, 1.0));
        poly.add(p(0.5, -10.0));
        assert!(poly.is_consistent());
        poly.add(p(-10.0, 0.5));
        assert!(poly.is_consistent());
    }
}
