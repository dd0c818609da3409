//! Fused multiply-XOR kernels and GF(256) matrix operations.
//!
//! [`addmul`] is the hot loop of both encoding and reconstruction; every
//! redundancy byte and every recovered byte goes through it.

use tracing::debug;

use crate::error::GfError;
use crate::field::{inv, mul_row};

/// Bytes processed per unrolled step of [`addmul`].
const UNROLL: usize = 16;

/// Compute `dst[j] ^= c * src[j]` for every byte.
///
/// A zero coefficient leaves `dst` untouched. Both slices are expected to
/// have the same length; only the common prefix is processed otherwise.
pub fn addmul(dst: &mut [u8], src: &[u8], c: u8) {
    if c == 0 {
        return;
    }
    debug_assert_eq!(dst.len(), src.len(), "addmul operands differ in length");

    let len = dst.len().min(src.len());
    let (dst, src) = (&mut dst[..len], &src[..len]);
    let row = mul_row(c);

    let mut dst_blocks = dst.chunks_exact_mut(UNROLL);
    let mut src_blocks = src.chunks_exact(UNROLL);
    for (d, s) in (&mut dst_blocks).zip(&mut src_blocks) {
        for (d, s) in d.iter_mut().zip(s) {
            *d ^= row[*s as usize];
        }
    }
    for (d, s) in dst_blocks
        .into_remainder()
        .iter_mut()
        .zip(src_blocks.remainder())
    {
        *d ^= row[*s as usize];
    }
}

/// Accumulate `dst ^= Σ coeffs[i] * srcs[i]`.
///
/// Equivalent to one [`addmul`] per source; zero coefficients are skipped.
pub fn addmul_many<S: AsRef<[u8]>>(dst: &mut [u8], srcs: &[S], coeffs: &[u8]) {
    debug_assert_eq!(srcs.len(), coeffs.len());
    for (src, &c) in srcs.iter().zip(coeffs) {
        addmul(dst, src.as_ref(), c);
    }
}

/// Multiply a `rows × inner` matrix by an `inner × cols` matrix.
///
/// Both inputs and the result are flattened row-major.
pub fn matrix_mul(a: &[u8], b: &[u8], rows: usize, inner: usize, cols: usize) -> Vec<u8> {
    debug_assert_eq!(a.len(), rows * inner);
    debug_assert_eq!(b.len(), inner * cols);

    let mut out = vec![0u8; rows * cols];
    if inner == 0 || cols == 0 {
        return out;
    }
    // Row r of the product is the combination of b's rows weighted by a's row r.
    for (a_row, out_row) in a.chunks_exact(inner).zip(out.chunks_exact_mut(cols)) {
        for (&coeff, b_row) in a_row.iter().zip(b.chunks_exact(cols)) {
            addmul(out_row, b_row, coeff);
        }
    }
    out
}

/// Tracks which rows/columns have already supplied a pivot.
struct PivotSearch {
    used: Vec<bool>,
}

impl PivotSearch {
    fn new(k: usize) -> Self {
        Self {
            used: vec![false; k],
        }
    }

    /// Find the pivot for elimination step `col`, returning `(row, column)`.
    ///
    /// The diagonal is preferred; otherwise the first nonzero entry in an
    /// unused row and unused column is taken.
    fn find(&mut self, col: usize, matrix: &[u8]) -> Option<(usize, usize)> {
        let k = self.used.len();

        if !self.used[col] && matrix[col * k + col] != 0 {
            self.used[col] = true;
            return Some((col, col));
        }

        for row in 0..k {
            if self.used[row] {
                continue;
            }
            for i in 0..k {
                if !self.used[i] && matrix[row * k + i] != 0 {
                    self.used[i] = true;
                    return Some((row, i));
                }
            }
        }

        None
    }
}

fn swap_rows(matrix: &mut [u8], k: usize, a: usize, b: usize) {
    for i in 0..k {
        matrix.swap(a * k + i, b * k + i);
    }
}

fn is_unit_row(row: &[u8], one_at: usize) -> bool {
    row.iter()
        .enumerate()
        .all(|(i, &v)| v == u8::from(i == one_at))
}

/// Invert a `k × k` matrix in place by Gauss–Jordan elimination with full
/// pivoting.
///
/// Each pivot found at `(irow, icol)` is swapped onto the diagonal at
/// `(icol, icol)`; the swaps are recorded and the corresponding column
/// permutation is undone once every column has been eliminated.
///
/// # Errors
///
/// Returns [`GfError::SingularMatrix`] if the matrix has no inverse, or
/// [`GfError::DimensionMismatch`] if `matrix.len() != k * k`. On error the
/// matrix contents are unspecified.
pub fn invert_matrix(matrix: &mut [u8], k: usize) -> Result<(), GfError> {
    if matrix.len() != k * k {
        return Err(GfError::DimensionMismatch {
            expected: k * k,
            got: matrix.len(),
        });
    }

    let mut search = PivotSearch::new(k);
    let mut indxr = vec![0usize; k];
    let mut indxc = vec![0usize; k];
    let mut pivot_row = vec![0u8; k];

    for col in 0..k {
        let Some((irow, icol)) = search.find(col, matrix) else {
            debug!(k, column = col, "no pivot found, matrix is singular");
            return Err(GfError::SingularMatrix { column: col });
        };

        if irow != icol {
            swap_rows(matrix, k, irow, icol);
        }
        indxr[col] = irow;
        indxc[col] = icol;

        let row = &mut matrix[icol * k..(icol + 1) * k];
        let c = row[icol];
        if c != 1 {
            // The pivot slot ends up holding c^-1: that is the inverse's entry.
            let scale = mul_row(inv(c));
            row[icol] = 1;
            for v in row.iter_mut() {
                *v = scale[*v as usize];
            }
        }

        // A unit pivot row would leave every other row unchanged.
        if is_unit_row(row, icol) {
            continue;
        }
        pivot_row.copy_from_slice(row);

        for (r, other) in matrix.chunks_exact_mut(k).enumerate() {
            if r == icol {
                continue;
            }
            let c = other[icol];
            other[icol] = 0;
            addmul(other, &pivot_row, c);
        }
    }

    for col in (0..k).rev() {
        let (a, b) = (indxr[col], indxc[col]);
        if a != b {
            for row in matrix.chunks_exact_mut(k) {
                row.swap(a, b);
            }
        }
    }

    Ok(())
}
