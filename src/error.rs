//! Error types for pairspace

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error type
///
/// Indexing and partitioning errors are deterministic; none of these are
/// worth retrying. `IndexOutOfRange` and `ConsistencyMismatch` signal a broken
/// internal invariant rather than bad input, and callers treat them as fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Both members of a pair refer to the same index
    #[error("invalid pair: indices are equal ({0}, {0})")]
    InvalidPair(usize),

    /// A row, column, or linear offset fell outside its valid interval
    #[error("{what} {value} out of range [0, {limit})")]
    IndexOutOfRange {
        what: &'static str,
        value: usize,
        limit: usize,
    },

    /// A positive worker count is required
    #[error("worker count must be at least 1 (requested {requested})")]
    InvalidWorkerCount { requested: usize },

    /// A walker-assigned offset disagrees with an independent recomputation
    #[error(
        "offset mismatch at pair ({row}, {col}): walker assigned {walker_offset}, \
         recomputed {recomputed}"
    )]
    ConsistencyMismatch {
        row: usize,
        col: usize,
        walker_offset: usize,
        recomputed: usize,
    },
}

impl Error {
    /// Create an out-of-range error for a row index
    pub fn row_out_of_range(value: usize, limit: usize) -> Self {
        Error::IndexOutOfRange {
            what: "row index",
            value,
            limit,
        }
    }

    /// Create an out-of-range error for a column index
    pub fn col_out_of_range(value: usize, limit: usize) -> Self {
        Error::IndexOutOfRange {
            what: "column index",
            value,
            limit,
        }
    }

    /// Create an out-of-range error for a linear offset
    pub fn offset_out_of_range(value: usize, limit: usize) -> Self {
        Error::IndexOutOfRange {
            what: "linear offset",
            value,
            limit,
        }
    }
}
