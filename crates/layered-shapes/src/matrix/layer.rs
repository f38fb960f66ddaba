use std::slice;

use crate::error::{Result, ShapeError};
use crate::shape::ShapePtr;

/// Read-only view of one matrix row.
#[derive(Clone, Copy, Debug)]
pub struct Layer<'a> {
    shapes: &'a [ShapePtr],
}

impl<'a> Layer<'a> {
    #[inline]
    pub(super) fn new(shapes: &'a [ShapePtr]) -> Self {
        Self { shapes }
    }

    /// Fails with `OutOfRange` when `col >= len()`.
    pub fn get(&self, col: usize) -> Result<ShapePtr> {
        ShapeError::check_index(col, self.shapes.len())?;
        Ok(self.shapes[col].clone())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'a, ShapePtr> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for Layer<'a> {
    type Item = &'a ShapePtr;
    type IntoIter = slice::Iter<'a, ShapePtr>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
