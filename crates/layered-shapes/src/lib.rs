//! Planar shapes behind one capability trait, plus two aggregates.
//!
//! - `primitives`: circle, rectangle, triangle, polygon.
//! - `CompositeShape`: an ordered group of shared shapes acting as one shape.
//! - `Matrix`: shapes placed into rows so that bounding boxes inside a row do
//!   not overlap at insertion time.
//!
//! Shapes are shared through `ShapePtr` (`Rc<RefCell<dyn Shape>>`). Mutating a
//! shape through any handle is visible through every container holding it.
//!
//! Single-threaded only: handles are neither `Send` nor `Sync`.

pub mod composite;
pub mod error;
pub mod geom;
pub mod matrix;
pub mod primitives;
pub mod shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use composite::CompositeShape;
pub use error::{Result, ShapeError};
pub use geom::{intersects, BoundingRect, Delta, Point};
pub use matrix::{Layer, Matrix};
pub use primitives::{Circle, Polygon, Rectangle, Triangle};
pub use shape::{shared, Shape, ShapePtr};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::composite::CompositeShape;
    pub use crate::error::{Result, ShapeError};
    pub use crate::geom::{intersects, BoundingRect, Point};
    pub use crate::matrix::{Layer, Matrix};
    pub use crate::primitives::{Circle, Polygon, Rectangle, Triangle};
    pub use crate::shape::{shared, Shape, ShapePtr};
    pub use nalgebra::{point, vector, Vector2 as Vec2};
}
