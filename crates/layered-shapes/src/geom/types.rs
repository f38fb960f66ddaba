use nalgebra::{Point2, Vector2};

use super::cfg::APPROX_EPS;

/// Position in the plane.
pub type Point = Point2<f64>;
/// Translation `(dx, dy)`.
pub type Delta = Vector2<f64>;

/// Axis-aligned frame of a shape: `width × height` around `center`.
///
/// Invariants (for frames produced by valid shapes):
/// - `width > 0` and `height > 0`, except for a degenerate axis of a rotated
///   rectangle/triangle whose extent collapses numerically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingRect {
    pub width: f64,
    pub height: f64,
    pub center: Point,
}

impl BoundingRect {
    #[inline]
    pub fn new(width: f64, height: f64, center: Point) -> Self {
        Self {
            width,
            height,
            center,
        }
    }

    /// Frame spanning `[left, right] × [bottom, top]`, centered at its midpoint.
    #[inline]
    pub fn from_extents(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            width: right - left,
            height: top - bottom,
            center: Point::new((left + right) / 2.0, (bottom + top) / 2.0),
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.center.x - self.width / 2.0
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.center.x + self.width / 2.0
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.center.y - self.height / 2.0
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    /// Smallest frame covering both `self` and `other`.
    pub fn union(&self, other: &BoundingRect) -> BoundingRect {
        BoundingRect::from_extents(
            self.left().min(other.left()),
            self.right().max(other.right()),
            self.bottom().min(other.bottom()),
            self.top().max(other.top()),
        )
    }

    /// Componentwise comparison with absolute slack `eps`.
    pub fn approx_eq_eps(&self, other: &BoundingRect, eps: f64) -> bool {
        (self.width - other.width).abs() <= eps
            && (self.height - other.height).abs() <= eps
            && (self.center - other.center).norm() <= eps
    }

    /// Shorthand for `approx_eq_eps(other, APPROX_EPS)`.
    #[inline]
    pub fn approx_eq(&self, other: &BoundingRect) -> bool {
        self.approx_eq_eps(other, APPROX_EPS)
    }
}

/// Closed overlap test on half-extents; touching edges intersect.
///
/// Conservative for non-rectangular shapes: overlapping frames count even if
/// the outlines themselves are disjoint.
#[inline]
pub fn intersects(a: &BoundingRect, b: &BoundingRect) -> bool {
    (a.center.x - b.center.x).abs() <= a.width / 2.0 + b.width / 2.0
        && (a.center.y - b.center.y).abs() <= a.height / 2.0 + b.height / 2.0
}
