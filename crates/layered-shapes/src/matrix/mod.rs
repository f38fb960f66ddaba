//! Layered placement of shapes: rows whose frames do not overlap.
//!
//! Layout
//! - One flat `Vec<ShapePtr>` holds every shape; row `r` is the contiguous
//!   slice starting at `layer_start(r)` with `layer_sizes[r]` elements.
//! - `add` computes the target row with `target_layer` (see `placement.rs`),
//!   then either appends a new row or inserts at the end of that row's slice,
//!   shifting later rows right by one.
//!
//! Invariants:
//! - `layer_sizes.iter().sum() == shapes.len()`, and every row size is >= 1.
//! - Within a row, frames did not overlap at the time each shape was added.
//!   Later edits through shared handles are not re-checked.

mod layer;
mod placement;

pub use layer::Layer;

use std::mem;

use crate::error::{Result, ShapeError};
use crate::shape::ShapePtr;

#[derive(Clone, Debug, Default)]
pub struct Matrix {
    shapes: Vec<ShapePtr>,
    layer_sizes: Vec<usize>,
}

impl Matrix {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `shape` into the row picked by the sequential first-gap scan.
    pub fn add(&mut self, shape: ShapePtr) {
        let frame = shape.borrow().bounding_rect();
        let layer = self.target_layer(&frame);
        if layer < self.layer_sizes.len() {
            let at = self.insertion_index(layer);
            self.shapes.insert(at, shape);
            self.layer_sizes[layer] += 1;
            tracing::debug!(layer, at, total = self.shapes.len(), "matrix_add_existing_layer");
        } else {
            self.shapes.push(shape);
            self.layer_sizes.push(1);
            tracing::debug!(layer, total = self.shapes.len(), "matrix_add_new_layer");
        }
    }

    /// `add` for possibly absent handles; `None` fails with `InvalidArgument`.
    pub fn try_add(&mut self, shape: Option<ShapePtr>) -> Result<()> {
        let shape = shape.ok_or(ShapeError::InvalidArgument("cannot add an absent shape"))?;
        self.add(shape);
        Ok(())
    }

    /// Borrowed view of row `row`.
    ///
    /// Fails with `DomainError` on an empty matrix and `OutOfRange` past the
    /// last row.
    pub fn get(&self, row: usize) -> Result<Layer<'_>> {
        if self.shapes.is_empty() {
            return Err(ShapeError::DomainError("matrix is empty"));
        }
        let start = self.layer_start(row)?;
        Ok(Layer::new(&self.shapes[start..start + self.layer_sizes[row]]))
    }

    /// Shorthand for `get(row)?.get(col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<ShapePtr> {
        self.get(row)?.get(col)
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.layer_sizes.len()
    }

    #[inline]
    pub fn total_count(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn row_size(&self, row: usize) -> Result<usize> {
        ShapeError::check_index(row, self.layer_sizes.len())?;
        Ok(self.layer_sizes[row])
    }

    /// Flat index of the first shape in `row`.
    pub fn layer_start(&self, row: usize) -> Result<usize> {
        ShapeError::check_index(row, self.layer_sizes.len())?;
        Ok(self.layer_sizes[..row].iter().sum())
    }

    /// Row that holds the shape at flat index `index`.
    pub fn layer_of(&self, index: usize) -> Result<usize> {
        ShapeError::check_index(index, self.shapes.len())?;
        let mut end = 0;
        self.layer_sizes
            .iter()
            .position(|&n| {
                end += n;
                index < end
            })
            .ok_or(ShapeError::OutOfRange {
                index,
                len: self.shapes.len(),
            })
    }

    /// Rows in order.
    pub fn layers(&self) -> impl Iterator<Item = Layer<'_>> + '_ {
        let mut start = 0;
        self.layer_sizes.iter().map(move |&n| {
            let layer = Layer::new(&self.shapes[start..start + n]);
            start += n;
            layer
        })
    }

    /// Move the contents out, leaving `self` empty.
    pub fn take(&mut self) -> Matrix {
        mem::take(self)
    }

    /// Flat index one past the end of `row` (where `add` inserts).
    /// Callers pass an existing row.
    fn insertion_index(&self, row: usize) -> usize {
        self.layer_sizes[..=row].iter().sum()
    }
}
