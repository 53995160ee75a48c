//! Error taxonomy shared by the connectivity core and the simulation driver.
//!
//! Every variant is a precondition violation. Nothing here is transient, so
//! callers are expected to surface these rather than retry.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercolationError {
    /// A size or count that is not positive, or too large to allocate.
    #[error("invalid argument: {what} = {value}")]
    InvalidArgument { what: &'static str, value: i64 },

    /// A 1-indexed site coordinate fell outside `[1, n]`.
    #[error("site ({row}, {col}) is outside the {n}x{n} grid")]
    OutOfRange { row: usize, col: usize, n: usize },

    /// A union-find element id fell outside `[0, size)`.
    #[error("element {element} is outside the universe of size {size}")]
    ElementOutOfRange { element: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, PercolationError>;

impl PercolationError {
    pub(crate) fn invalid(what: &'static str, value: impl TryInto<i64>) -> Self {
        PercolationError::InvalidArgument {
            what,
            value: value.try_into().unwrap_or(i64::MAX),
        }
    }
}
