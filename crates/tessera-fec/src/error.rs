//! Error types for erasure encoding and decoding.

use tessera_gf::GfError;

/// Errors that can occur while building a code or encoding/decoding with it.
#[derive(Debug, thiserror::Error)]
pub enum FecError {
    /// The `(k, n)` pair is outside `1 <= k <= n <= 256`.
    #[error("invalid code parameters k={k}, n={n}: require 1 <= k <= n <= {max}", max = crate::MAX_SHARES)]
    InvalidParameters {
        /// Requested number of data blocks.
        k: usize,
        /// Requested total number of shares.
        n: usize,
    },

    /// The encode input cannot be split into `k` equal blocks.
    #[error("input length {len} is not a multiple of k={k}")]
    SizeMismatch {
        /// Length of the input buffer.
        len: usize,
        /// Number of data blocks.
        k: usize,
    },

    /// Shares passed to one decode call differ in length.
    #[error("share {index} is {got} bytes, expected {expected}")]
    ShareSizeMismatch {
        /// Index of the offending share.
        index: usize,
        /// Length of the first share supplied.
        expected: usize,
        /// Length of the offending share.
        got: usize,
    },

    /// Fewer than `k` shares were supplied to decode.
    #[error("not enough shares: need {needed}, got {got}")]
    InsufficientShares {
        /// Minimum shares required (k).
        needed: usize,
        /// Shares actually provided.
        got: usize,
    },

    /// A share index is outside `[0, n)`.
    #[error("share index {index} out of range for n={n}")]
    InvalidIndex {
        /// The offending index.
        index: usize,
        /// Total number of shares in the code.
        n: usize,
    },

    /// The same share index was supplied twice.
    #[error("share index {index} supplied more than once")]
    DuplicateShare {
        /// The repeated index.
        index: usize,
    },

    /// Inverting the decode matrix failed. With a valid code and distinct
    /// in-range indices this indicates an internal fault.
    #[error("decode matrix error: {0}")]
    Matrix(#[from] GfError),

    /// The code configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
