#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<SomError> for GenericError {
    fn from(value: SomError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

/// Specifies violations of map operation contracts. None of them is recoverable: they are
/// returned to the caller as is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SomError {
    /// Input vector length does not match the declared dimensionality.
    DimensionMismatch {
        /// An expected length.
        expected: usize,
        /// An actual length.
        actual: usize,
    },

    /// An operation requires at least one sample.
    EmptyDataset,

    /// An operation requires at least one prototype.
    EmptyMap,

    /// Neighbour count is outside of the supported range.
    InvalidK {
        /// A requested amount of neighbours.
        k: usize,
        /// Amount of prototypes in the map.
        size: usize,
    },

    /// Trajectory should have at least two steps.
    InvalidStepCount(usize),
}

/// A type alias for result type with `SomError`.
pub type SomResult<T> = Result<T, SomError>;

impl Display for SomError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SomError::DimensionMismatch { expected, actual } => {
                write!(f, "dimension mismatch: expected {expected}, got {actual}")
            }
            SomError::EmptyDataset => write!(f, "dataset has no samples"),
            SomError::EmptyMap => write!(f, "map has no prototypes"),
            SomError::InvalidK { k, size } => write!(f, "invalid amount of neighbours: {k}, map size: {size}"),
            SomError::InvalidStepCount(count) => write!(f, "invalid step count: {count}, expected at least 2"),
        }
    }
}

impl std::error::Error for SomError {}

/// Checks that given vector has expected length.
pub(crate) fn check_dimension(expected: usize, actual: usize) -> SomResult<()> {
    if expected == actual { Ok(()) } else { Err(SomError::DimensionMismatch { expected, actual }) }
}
