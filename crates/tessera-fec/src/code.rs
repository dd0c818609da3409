//! Code configuration and its systematic encoding matrix.

use tessera_gf::{exp, inverted_vandermonde, matrix_mul};
use tracing::debug;

use crate::config::FecConfig;
use crate::error::FecError;

/// Largest supported `n` (and `k`): one share per field element.
pub const MAX_SHARES: usize = 256;

/// A `(k, n)` erasure code with its precomputed `n × k` encoding matrix.
///
/// The top `k` rows of the matrix are the identity, so shares `0..k` are
/// the input blocks themselves. The code is immutable after construction
/// and can be shared across threads; encode and decode take `&self`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FecCode {
    /// Number of data blocks.
    k: usize,
    /// Total number of shares.
    n: usize,
    /// Row-major `n × k` encoding matrix.
    enc_matrix: Vec<u8>,
}

impl FecCode {
    /// Build the code for `k` data blocks and `n` total shares.
    ///
    /// # Errors
    ///
    /// Returns [`FecError::InvalidParameters`] unless `1 <= k <= n <= 256`.
    pub fn new(k: usize, n: usize) -> Result<Self, FecError> {
        if k == 0 || k > MAX_SHARES || n > MAX_SHARES || k > n {
            return Err(FecError::InvalidParameters { k, n });
        }

        // Build the multiplication table now rather than on the first encode.
        tessera_gf::field::init();
        let enc_matrix = build_encoding_matrix(k, n);
        debug!(k, n, "built systematic encoding matrix");

        Ok(Self { k, n, enc_matrix })
    }

    /// Build the code described by a [`FecConfig`].
    pub fn from_config(config: &FecConfig) -> Result<Self, FecError> {
        Self::new(usize::from(config.k), usize::from(config.n))
    }

    /// Number of data blocks.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Total number of shares.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The full `n × k` encoding matrix, row-major.
    pub fn encoding_matrix(&self) -> &[u8] {
        &self.enc_matrix
    }

    /// Row `index` of the encoding matrix, or `None` if `index >= n`.
    pub fn encoding_row(&self, index: usize) -> Option<&[u8]> {
        (index < self.n).then(|| self.row(index))
    }

    pub(crate) fn row(&self, index: usize) -> &[u8] {
        &self.enc_matrix[index * self.k..(index + 1) * self.k]
    }
}

/// Assemble the systematic `n × k` matrix.
///
/// Rows `k..n` start as `α^(row·col)` and are right-multiplied by the
/// inverted `k × k` Vandermonde block. Rows `0..k` are the identity.
fn build_encoding_matrix(k: usize, n: usize) -> Vec<u8> {
    let vdm_inv = inverted_vandermonde(k);

    let parity_rows = n - k;
    let mut powers = vec![0u8; parity_rows * k];
    for (i, entry) in powers.iter_mut().enumerate() {
        let row = k + i / k;
        let col = i % k;
        *entry = exp(row * col);
    }
    let parity = matrix_mul(&powers, &vdm_inv, parity_rows, k, k);

    let mut matrix = vec![0u8; n * k];
    for i in 0..k {
        matrix[i * k + i] = 1;
    }
    matrix[k * k..].copy_from_slice(&parity);
    matrix
}
