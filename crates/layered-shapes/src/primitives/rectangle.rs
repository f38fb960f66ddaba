use crate::error::Result;
use crate::geom::util::{frame_of, rotate_about, scale_about};
use crate::geom::{BoundingRect, Delta, Point};
use crate::shape::{check_coefficient, check_positive, Shape};

/// Rectangle stored by its four corners so that rotation is exact.
///
/// Corner order: top-left, top-right, bottom-right, bottom-left (before any
/// rotation). Width is `|c1 - c0|`, height is `|c1 - c2|`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    corners: [Point; 4],
}

impl Rectangle {
    /// Axis-aligned `width × height` rectangle centered at `centre`.
    pub fn new(width: f64, height: f64, centre: Point) -> Result<Self> {
        check_positive(width, "rectangle width must be positive")?;
        check_positive(height, "rectangle height must be positive")?;
        let (hw, hh) = (width / 2.0, height / 2.0);
        Ok(Self {
            corners: [
                centre + Delta::new(-hw, hh),
                centre + Delta::new(hw, hh),
                centre + Delta::new(hw, -hh),
                centre + Delta::new(-hw, -hh),
            ],
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.corners[1] - self.corners[0]).norm()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.corners[1] - self.corners[2]).norm()
    }

    #[inline]
    pub fn corners(&self) -> &[Point; 4] {
        &self.corners
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "rectangle"
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn bounding_rect(&self) -> BoundingRect {
        frame_of(&self.corners)
    }

    fn centre(&self) -> Point {
        self.bounding_rect().center
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        let d = Delta::new(dx, dy);
        for c in self.corners.iter_mut() {
            *c += d;
        }
    }

    fn scale(&mut self, k: f64) -> Result<()> {
        check_coefficient(k)?;
        let centre = self.centre();
        scale_about(&mut self.corners, centre, k);
        Ok(())
    }

    fn rotate(&mut self, angle_deg: f64) {
        let centre = self.centre();
        rotate_about(&mut self.corners, centre, angle_deg);
    }
}
