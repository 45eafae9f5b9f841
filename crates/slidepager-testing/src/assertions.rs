//! Assertion helpers for pager geometry.

use slidepager_geometry::Point;

/// Tolerance used by the `*_near` helpers.
pub const GEOMETRY_TOLERANCE: f32 = 0.01;

/// Assert that a value is within an expected range.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a point is approximately equal to another.
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f32, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// [`assert_approx_eq`] with [`GEOMETRY_TOLERANCE`].
pub fn assert_near(actual: f32, expected: f32, msg: &str) {
    assert_approx_eq(actual, expected, GEOMETRY_TOLERANCE, msg);
}
