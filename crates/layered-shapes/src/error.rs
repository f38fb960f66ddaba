//! Error taxonomy shared by shapes and containers.
//!
//! All failures are precondition violations reported at the offending call;
//! nothing is retried or deferred.

/// Errors surfaced by shape construction, transforms and container access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// Non-positive size or coefficient, degenerate outline, or absent shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Too few points, or a removal that would leave a container empty.
    #[error("length error: {0}")]
    LengthError(&'static str),
    /// Index outside `0..len`.
    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },
    /// Operation requires a non-empty container.
    #[error("domain error: {0}")]
    DomainError(&'static str),
}

pub type Result<T> = std::result::Result<T, ShapeError>;

impl ShapeError {
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
        if index >= len {
            Err(ShapeError::OutOfRange { index, len })
        } else {
            Ok(())
        }
    }
}
