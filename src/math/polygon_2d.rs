use super::predicates::{cross, distance, is_acute};
use super::{Point2, TOLERANCE};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Sum of the edge lengths of a closed polygon, including the closing edge.
#[must_use]
pub fn perimeter_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| distance(&points[i], &points[(i + 1) % n]))
        .sum()
}

/// Counts the vertices whose interior angle is strictly acute, recomputed
/// from scratch over the whole cycle.
#[must_use]
pub fn acute_vertex_count(points: &[Point2]) -> usize {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    (0..n)
        .filter(|&i| is_acute(&points[(i + n - 1) % n], &points[i], &points[(i + 1) % n]))
        .count()
}

/// Returns `true` if no three consecutive vertices of the cycle turn
/// clockwise. Collinear runs are accepted.
#[must_use]
pub fn is_convex_ccw(points: &[Point2]) -> bool {
    let n = points.len();
    (0..n).all(|i| {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];
        cross(&(b - a), &(c - b)) >= 0.0
    })
}

/// Rotates a closed polygon so it starts at the leftmost vertex (smallest x),
/// breaking ties by smallest y. Ensures deterministic output for tests.
#[must_use]
pub fn rotate_to_canonical_start(points: &[Point2]) -> Vec<Point2> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let best = points
        .iter()
        .enumerate()
        .skip(1)
        .fold(0, |best, (i, pt)| {
            let b = &points[best];
            if pt.x < b.x - TOLERANCE || (pt.x - b.x).abs() < TOLERANCE && pt.y < b.y {
                i
            } else {
                best
            }
        });
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Returns the leftmost-bottommost vertex of a polygon, or `None` when empty.
#[must_use]
pub fn leftmost_bottom(points: &[Point2]) -> Option<Point2> {
    rotate_to_canonical_start(points).first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_closes_the_cycle() {
        assert!((perimeter_2d(&unit_square()) - 4.0).abs() < TOLERANCE);
        assert!(perimeter_2d(&[Point2::new(3.0, 3.0)]).abs() < TOLERANCE);
    }

    #[test]
    fn acute_count_triangle_and_square() {
        let tri = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ];
        // Right angle at the origin is not acute.
        assert_eq!(acute_vertex_count(&tri), 2);
        assert_eq!(acute_vertex_count(&unit_square()), 0);
    }

    #[test]
    fn convexity_detects_reflex_vertex() {
        assert!(is_convex_ccw(&unit_square()));
        let dart = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 0.5),
            Point2::new(1.0, 2.0),
        ];
        assert!(!is_convex_ccw(&dart));
        let mut cw = unit_square();
        cw.reverse();
        assert!(!is_convex_ccw(&cw));
    }

    #[test]
    fn convexity_accepts_collinear_run() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ];
        assert!(is_convex_ccw(&pts));
    }

    #[test]
    fn canonical_start_already_leftmost() {
        let rotated = rotate_to_canonical_start(&unit_square());
        assert_eq!(rotated, unit_square());
    }

    #[test]
    fn canonical_start_rotation() {
        let pts = vec![
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ];
        let rotated = rotate_to_canonical_start(&pts);
        assert_eq!(rotated, unit_square());
    }

    #[test]
    fn leftmost_bottom_basic() {
        let pts = vec![
            Point2::new(1.0, 2.0),
            Point2::new(0.5, 1.0),
            Point2::new(0.5, 0.5),
            Point2::new(2.0, 0.0),
        ];
        let lb = leftmost_bottom(&pts);
        assert_eq!(lb, Some(Point2::new(0.5, 0.5)));
        assert_eq!(leftmost_bottom(&[]), None);
    }
}
