//! Closed-form primitives implementing `Shape`.
//!
//! Centre conventions
//! - `Circle`, `Rectangle`: geometric center; frame center coincides with it.
//! - `Triangle`, `Polygon`: arithmetic mean of the vertices, also reported as
//!   the frame center (width/height stay the tight vertex extents).

mod circle;
mod polygon;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use triangle::Triangle;
