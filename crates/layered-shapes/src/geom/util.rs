//! Point-set helpers shared by the vertex-based primitives.

use nalgebra::Rotation2;

use super::types::{BoundingRect, Point};

/// Counter-clockwise rotation by `angle_deg` degrees.
#[inline]
pub(crate) fn rotation_deg(angle_deg: f64) -> Rotation2<f64> {
    Rotation2::new(angle_deg.to_radians())
}

/// Rotate every point about `pivot`.
pub(crate) fn rotate_about(points: &mut [Point], pivot: Point, angle_deg: f64) {
    let rot = rotation_deg(angle_deg);
    for p in points.iter_mut() {
        *p = pivot + rot * (*p - pivot);
    }
}

/// Move every point radially away from (k > 1) or towards (k < 1) `pivot`.
pub(crate) fn scale_about(points: &mut [Point], pivot: Point, k: f64) {
    for p in points.iter_mut() {
        *p = pivot + (*p - pivot) * k;
    }
}

/// Arithmetic mean of the points. Callers guarantee a non-empty slice.
pub(crate) fn vertex_mean(points: &[Point]) -> Point {
    let sum = points
        .iter()
        .fold(nalgebra::Vector2::<f64>::zeros(), |acc, p| acc + p.coords);
    Point::from(sum / points.len() as f64)
}

/// Tight axis-aligned frame, centered at its own midpoint.
pub(crate) fn frame_of(points: &[Point]) -> BoundingRect {
    let (mut lo_x, mut hi_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut lo_y, mut hi_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for p in points {
        lo_x = lo_x.min(p.x);
        hi_x = hi_x.max(p.x);
        lo_y = lo_y.min(p.y);
        hi_y = hi_y.max(p.y);
    }
    BoundingRect::from_extents(lo_x, hi_x, lo_y, hi_y)
}

/// Shoelace signed area; positive for counter-clockwise vertex order.
pub(crate) fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    let twice: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            a.x * b.y - a.y * b.x
        })
        .sum();
    twice / 2.0
}
