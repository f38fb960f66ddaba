use std::f64::consts::PI;

use crate::error::Result;
use crate::geom::{BoundingRect, Delta, Point};
use crate::shape::{check_coefficient, check_positive, Shape};

/// Disk of `radius` around `centre`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    centre: Point,
    radius: f64,
}

impl Circle {
    /// Fails with `InvalidArgument` unless `radius > 0`.
    pub fn new(centre: Point, radius: f64) -> Result<Self> {
        check_positive(radius, "circle radius must be positive")?;
        Ok(Self { centre, radius })
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn bounding_rect(&self) -> BoundingRect {
        let d = 2.0 * self.radius;
        BoundingRect::new(d, d, self.centre)
    }

    fn centre(&self) -> Point {
        self.centre
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        self.centre += Delta::new(dx, dy);
    }

    fn move_to(&mut self, p: Point) {
        self.centre = p;
    }

    fn scale(&mut self, k: f64) -> Result<()> {
        check_coefficient(k)?;
        self.radius *= k;
        Ok(())
    }

    // Rotation about its own centre leaves a disk unchanged.
    fn rotate(&mut self, _angle_deg: f64) {}
}
