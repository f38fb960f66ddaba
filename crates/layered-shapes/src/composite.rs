//! Composite shape: an ordered, never-empty group of shared shapes.
//!
//! Semantics
//! - Members are `ShapePtr` handles; `Clone` copies the sequence but shares the
//!   shapes (editing a member through one copy is visible in the other).
//! - `centre()` is the center of the union frame, not a mean of member centres.
//! - `scale(k)` relocates every member centre radially about the composite
//!   centre by `k`, then scales the member itself by `k`.
//! - `rotate(a)` rotates every member centre about the composite centre, moves
//!   the member there, then rotates the member about its own centre.

use std::slice;

use crate::error::{Result, ShapeError};
use crate::geom::util::rotation_deg;
use crate::geom::{BoundingRect, Point};
use crate::shape::{check_coefficient, Shape, ShapePtr};

#[derive(Clone, Debug)]
pub struct CompositeShape {
    shapes: Vec<ShapePtr>,
}

impl CompositeShape {
    /// One-element composite.
    pub fn new(shape: ShapePtr) -> Self {
        Self {
            shapes: vec![shape],
        }
    }

    /// Composite from an ordered collection; fails with `InvalidArgument` when
    /// the collection is empty.
    pub fn from_shapes<I>(shapes: I) -> Result<Self>
    where
        I: IntoIterator<Item = ShapePtr>,
    {
        let shapes: Vec<ShapePtr> = shapes.into_iter().collect();
        if shapes.is_empty() {
            return Err(ShapeError::InvalidArgument(
                "composite shape needs at least one shape",
            ));
        }
        Ok(Self { shapes })
    }

    /// Append at the end.
    pub fn add(&mut self, shape: ShapePtr) {
        tracing::trace!(
            shape = shape.borrow().name(),
            len = self.shapes.len() + 1,
            "composite_add"
        );
        self.shapes.push(shape);
    }

    /// `add` for possibly absent handles; `None` fails with `InvalidArgument`.
    pub fn try_add(&mut self, shape: Option<ShapePtr>) -> Result<()> {
        let shape = shape.ok_or(ShapeError::InvalidArgument("cannot add an absent shape"))?;
        self.add(shape);
        Ok(())
    }

    /// Remove the member at `index`, keeping the order of the rest.
    ///
    /// Fails with `OutOfRange` for a bad index and with `LengthError` when the
    /// composite holds a single member.
    pub fn remove(&mut self, index: usize) -> Result<ShapePtr> {
        ShapeError::check_index(index, self.shapes.len())?;
        if self.shapes.len() == 1 {
            return Err(ShapeError::LengthError(
                "cannot remove the last shape of a composite",
            ));
        }
        let removed = self.shapes.remove(index);
        tracing::trace!(index, len = self.shapes.len(), "composite_remove");
        Ok(removed)
    }

    pub fn get(&self, index: usize) -> Result<ShapePtr> {
        ShapeError::check_index(index, self.shapes.len())?;
        Ok(self.shapes[index].clone())
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the composite holds no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, ShapePtr> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a CompositeShape {
    type Item = &'a ShapePtr;
    type IntoIter = slice::Iter<'a, ShapePtr>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl Shape for CompositeShape {
    fn name(&self) -> &'static str {
        "composite"
    }

    fn area(&self) -> f64 {
        self.shapes.iter().map(|s| s.borrow().area()).sum()
    }

    fn bounding_rect(&self) -> BoundingRect {
        let first = self.shapes[0].borrow().bounding_rect();
        self.shapes[1..]
            .iter()
            .fold(first, |acc, s| acc.union(&s.borrow().bounding_rect()))
    }

    fn centre(&self) -> Point {
        self.bounding_rect().center
    }

    fn move_by(&mut self, dx: f64, dy: f64) {
        for s in &self.shapes {
            s.borrow_mut().move_by(dx, dy);
        }
    }

    fn scale(&mut self, k: f64) -> Result<()> {
        check_coefficient(k)?;
        let centre = self.centre();
        for s in &self.shapes {
            let mut s = s.borrow_mut();
            let member = s.centre();
            s.move_to(centre + (member - centre) * k);
            s.scale(k)?;
        }
        Ok(())
    }

    fn rotate(&mut self, angle_deg: f64) {
        let rot = rotation_deg(angle_deg);
        let centre = self.centre();
        for s in &self.shapes {
            let mut s = s.borrow_mut();
            let member = s.centre();
            s.move_to(centre + rot * (member - centre));
            s.rotate(angle_deg);
        }
    }
}

#[cfg(test)]
mod tests;
