//! Direct inversion of a Vandermonde matrix.
//!
//! The matrix has sample points `p_0 = 0, p_i = α^i` (`1 ≤ i < k`) and
//! entries `V[r][c] = p_r^c`. Its inverse can be written down from the
//! coefficients of `P(x) = Π (x - p_i)` by synthetic division, which costs
//! O(k²) instead of the O(k³) of a general elimination.

use crate::field::{exp, inv, mul_row};

/// Build the inverse of the `k × k` Vandermonde matrix on the points
/// `{0, α, α², …, α^(k-1)}`, flattened row-major.
///
/// `k = 1` yields `[1]`; `k = 0` yields an empty matrix.
pub fn inverted_vandermonde(k: usize) -> Vec<u8> {
    let mut vdm = vec![0u8; k * k];
    match k {
        0 => return vdm,
        1 => {
            vdm[0] = 1;
            return vdm;
        }
        _ => {}
    }

    // c[j] is the coefficient of x^j in P(x); the leading x^k term is 1.
    // Start from P_0(x) = x - p_0 = x, then multiply in (x - p_i) for each
    // remaining point. Subtraction is XOR, so -p_i = p_i.
    let mut c = vec![0u8; k];
    for i in 1..k {
        let p_i = exp(i);
        let mul_p_i = mul_row(p_i);
        for j in (k - i)..(k - 1) {
            c[j] ^= mul_p_i[c[j + 1] as usize];
        }
        c[k - 1] ^= p_i;
    }

    let mut b = vec![0u8; k];
    for row in 0..k {
        let p_row = if row == 0 { 0 } else { exp(row) };
        let mul_p_row = mul_row(p_row);

        // Synthetic division P(x) / (x - p_row) gives the quotient in b;
        // t accumulates the quotient evaluated at p_row.
        let mut t = 1u8;
        b[k - 1] = 1;
        for i in (0..k - 1).rev() {
            b[i] = c[i + 1] ^ mul_p_row[b[i + 1] as usize];
            t = b[i] ^ mul_p_row[t as usize];
        }

        let scale = mul_row(inv(t));
        for (col, &coeff) in b.iter().enumerate() {
            vdm[col * k + row] = scale[coeff as usize];
        }
    }

    vdm
}
