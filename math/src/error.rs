use std::num::ParseFloatError;

use thiserror::Error;

pub mod interpolation {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("zero points")]
        ZeroPoints,
        #[error("value {0} is not unique: non distinct x")]
        NonDistinctX(f64),
    }
}

pub use interpolation::Error as InterpolationError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
    #[error(transparent)]
    ParsePoint(#[from] ParsePointError),
}

pub type Error = MathError;

/// Errors returned when reading a [`Point`](crate::point::Point) from `x,y`
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParsePointError {
    #[error("failed to parse float: {text}")]
    InvalidCoordinate {
        text: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("expected 2 elements per coordinate got: {0}")]
    WrongArity(usize),
}
