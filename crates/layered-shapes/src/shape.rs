//! Capability contract shared by every shape, and the shared handle type.
//!
//! Invariants every implementor keeps:
//! - `area() > 0` at all times (checked at construction and by `scale`).
//! - `move_by` is purely additive; `move_to(p)` leaves `centre() == p`.
//! - `scale(k)` and `rotate(a)` keep `centre()` fixed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::geom::{BoundingRect, Point};

/// Shared, mutable handle to any shape. Aliases observe each other's edits.
pub type ShapePtr = Rc<RefCell<dyn Shape>>;

/// Wrap a concrete shape into a shared handle.
#[inline]
pub fn shared<S: Shape + 'static>(shape: S) -> ShapePtr {
    Rc::new(RefCell::new(shape))
}

pub trait Shape: fmt::Debug {
    /// Short variant name used in logs.
    fn name(&self) -> &'static str;

    fn area(&self) -> f64;

    /// Axis-aligned frame enclosing the shape.
    fn bounding_rect(&self) -> BoundingRect;

    /// Reference point that `move_to`, `scale` and `rotate` are anchored at.
    fn centre(&self) -> Point;

    /// Translate every defining point by `(dx, dy)`.
    fn move_by(&mut self, dx: f64, dy: f64);

    /// Translate so that `centre()` becomes `p`.
    fn move_to(&mut self, p: Point) {
        let d = p - self.centre();
        self.move_by(d.x, d.y);
    }

    /// Scale about `centre()`; fails with `InvalidArgument` when `k <= 0`.
    fn scale(&mut self, k: f64) -> Result<()>;

    /// Rotate counter-clockwise about `centre()` by `angle_deg` degrees.
    fn rotate(&mut self, angle_deg: f64);
}

/// `InvalidArgument(msg)` unless `value` is strictly positive (NaN fails).
#[inline]
pub(crate) fn check_positive(value: f64, msg: &'static str) -> Result<()> {
    if value <= 0.0 || value.is_nan() {
        Err(crate::ShapeError::InvalidArgument(msg))
    } else {
        Ok(())
    }
}

/// Shared coefficient check for `Shape::scale`.
#[inline]
pub(crate) fn check_coefficient(k: f64) -> Result<()> {
    check_positive(k, "scale coefficient must be positive")
}
