//! Planar value types and the axis-aligned overlap test.
//!
//! - `Point`/`Delta`: nalgebra points and vectors in R².
//! - `BoundingRect`: width, height and a center; the only spatial summary the
//!   containers look at.
//! - `intersects`: closed (touching counts) overlap of two bounding rects.

pub mod cfg;
mod types;
pub(crate) mod util;

pub use types::{intersects, BoundingRect, Delta, Point};
