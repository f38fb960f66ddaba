use crate::error::{Result, ShapeError};
use crate::geom::util::{frame_of, rotate_about, scale_about, signed_area, vertex_mean};
use crate::geom::{BoundingRect, Delta, Point};
use crate::shape::{check_coefficient, Shape};

/// Triangle given by three vertices; centre is the vertex mean.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    /// Fails with `InvalidArgument` when the points are collinear or two
    /// coincide: some side is not shorter than the sum of the other two, or
    /// the shoelace area is exactly zero (collinear points whose side lengths
    /// round past the triangle inequality).
    pub fn new(a: Point, b: Point, c: Point) -> Result<Self> {
        let ab = (b - a).norm();
        let bc = (c - b).norm();
        let ca = (a - c).norm();
        if ab + bc <= ca || ab + ca <= bc || bc + ca <= ab {
            return Err(ShapeError::InvalidArgument("degenerate triangle"));
        }
        let vertices = [a, b, c];
        if signed_area(&vertices) == 0.0 {
            return Err(ShapeError::InvalidArgument("degenerate triangle"));
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }
}

impl Shape for Triangle {
    fn name(&self) -> &'static str {
        "triangle"
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
