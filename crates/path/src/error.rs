use thiserror::Error;

/// An error that can happen while building or querying a path.
#[derive(Error, Copy, Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum PathError {
    #[error("The path has no vertices.")]
    EmptyPath,
    #[error("The query argument is NaN.")]
    QueryIsNaN,
    #[error("Control point {index} has a non-finite position.")]
    PositionIsNaN { index: usize },
    #[error("Invalid expected length {0}, expected a finite positive value.")]
    InvalidExpectedLength(f64),
    #[error("Invalid tolerance {0}, expected a finite positive value.")]
    InvalidTolerance(f64),
    #[error("The length of the approximated path is not finite.")]
    LengthOverflow,
}
