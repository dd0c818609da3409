//! Error types for GF(256) linear algebra.

/// Errors that can occur while manipulating GF(256) matrices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GfError {
    /// Gauss–Jordan elimination found no nonzero pivot.
    #[error("singular matrix: no pivot found while eliminating column {column}")]
    SingularMatrix {
        /// Elimination step at which the search failed.
        column: usize,
    },

    /// A flattened matrix did not have the expected number of entries.
    #[error("matrix dimension mismatch: expected {expected} entries, got {got}")]
    DimensionMismatch {
        /// Entries required by the stated dimensions.
        expected: usize,
        /// Entries actually supplied.
        got: usize,
    },
}
