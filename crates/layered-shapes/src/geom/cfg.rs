//! Tolerance defaults (internal).
//!
//! Policy
//! - Fixed constants; construction checks are exact (`<= 0`, `== 0`) and only
//!   approximate comparisons in helpers and tests go through these values.

/// Absolute tolerance used by `BoundingRect::approx_eq` and property tests.
pub const APPROX_EPS: f64 = 1e-9;
