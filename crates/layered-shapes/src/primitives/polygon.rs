use crate::error::{Result, ShapeError};
use crate::geom::util::{frame_of, rotate_about, scale_about, signed_area, vertex_mean};
use crate::geom::{BoundingRect, Delta, Point};
use crate::shape::{check_coefficient, Shape};

/// Simple polygon given by its vertices in boundary order.
///
/// Invariants:
/// - At least 3 vertices.
/// - Shoelace area is non-zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Fails with `LengthError` for fewer than 3 points and with
    /// `InvalidArgument` when the signed area is exactly zero.
    pub fn new(vertices: impl Into<Vec<Point>>) -> Result<Self> {
        let vertices = vertices.into();
        if vertices.len() < 3 {
            return Err(ShapeError::LengthError("polygon needs at least 3 points"));
        }
        if signed_area(&vertices) == 0.0 {
            return Err(ShapeError::InvalidArgument("polygon area must be non-zero"));
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, index: usize) -> Result<Point> {
        ShapeError::check_index(index, self.vertices.len())?;
        Ok(self.vertices[index])
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
}

impl Shape for Polygon {
    fn name(&self) -> &'static str {
        "polygon"
    }

    fn area(&self) -> f64 {
        signed_area(&self.vertices).abs()
    }

    fn bounding_rect(&self) -> BoundingRect {
        BoundingRect {
            center: self.centre(),
            ..frame_of(&self.vertices)
        }
    }

    fn centre(&self) -> Point {
        vertex_mean(&self.vertices)
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        let d = Delta::new(dx, dy);
        for v in self.vertices.iter_mut() {
            *v += d;
        }
    }

    fn scale(&mut self, k: f64) -> Result<()> {
        check_coefficient(k)?;
        let centre = self.centre();
        scale_about(&mut self.vertices, centre, k);
        Ok(())
    }

    fn rotate(&mut self, angle_deg: f64) {
        let centre = self.centre();
        rotate_about(&mut self.vertices, centre, angle_deg);
    }
}
