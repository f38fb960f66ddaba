//! Row assignment for `Matrix::add`.
//!
//! Scan order is the flat storage order. Each shape whose frame intersects the
//! candidate's pushes the target to that shape's row + 1; the first shape that
//! does not intersect fixes the target to its own row and ends the scan.
//! This is a first-gap policy, not a search for the lowest conflict-free row:
//! a non-intersecting shape in row r ends the scan even if another shape of
//! row r, later in storage, does intersect.

use std::iter;

use super::Matrix;
use crate::geom::{intersects, BoundingRect};

impl Matrix {
    /// Row that a shape with frame `frame` would be placed in.
    /// `row_count()` means "open a new row".
    pub fn target_layer(&self, frame: &BoundingRect) -> usize {
        let rows = self
            .layer_sizes
            .iter()
            .enumerate()
            .flat_map(|(row, &n)| iter::repeat(row).take(n));
        let mut target = 0;
        for (shape, row) in self.shapes.iter().zip(rows) {
            if intersects(&shape.borrow().bounding_rect(), frame) {
                target = row + 1;
            } else {
                target = row;
                break;
            }
        }
        target
    }
}
