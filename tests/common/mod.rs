#![allow(dead_code)]

use onhull::math::polygon_2d::rotate_to_canonical_start;
use onhull::{Hull, Point2};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber honouring `RUST_LOG`. Safe to call from
/// every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

pub fn hull_of(points: &[Point2]) -> Hull {
    points.iter().copied().collect()
}

/// Hull vertices rotated to start at the leftmost-bottom vertex.
pub fn canonical_vertices(hull: &Hull) -> Vec<Point2> {
    rotate_to_canonical_start(&hull.vertices())
}
