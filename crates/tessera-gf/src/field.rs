//! GF(2^8) arithmetic.
//!
//! The field is generated by the primitive polynomial
//! `x^8 + x^4 + x^3 + x^2 + 1` (`0x11D`) with `α = x = 0x02`. Addition is
//! XOR; multiplication goes through discrete log/antilog tables.
//!
//! The exp, log and inverse tables are computed at compile time. The full
//! 256×256 multiplication table (64 KiB) is built on first use behind a
//! [`OnceLock`], so concurrent first callers all observe the same fully
//! initialized table.

use std::sync::OnceLock;

use tracing::trace;

/// Primitive polynomial `x^8 + x^4 + x^3 + x^2 + 1`.
pub const PRIMITIVE_POLY: u16 = 0x11D;

/// Order of the multiplicative group (number of nonzero elements).
pub const GROUP_ORDER: usize = 255;

/// One row of the multiplication table: `row[x] = c * x` for a fixed `c`.
pub type MulRow = [u8; 256];

/// `EXP[i] = α^i`.
///
/// Twice the group order long, so `EXP[log a + log b]` needs no reduction.
pub static EXP: [u8; 2 * GROUP_ORDER] = build_exp();

/// `LOG[α^i] = i`. `LOG[0]` holds the sentinel `0xFF`.
pub static LOG: [u8; 256] = build_log();

/// `INVERSE[a] * a = 1` for every nonzero `a`. `INVERSE[0]` is 0.
pub static INVERSE: [u8; 256] = build_inverse();

const fn build_exp() -> [u8; 2 * GROUP_ORDER] {
    let mut table = [0u8; 2 * GROUP_ORDER];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < GROUP_ORDER {
        table[i] = x as u8;
        table[i + GROUP_ORDER] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    table
}

const fn build_log() -> [u8; 256] {
    let exp = build_exp();
    let mut table = [0u8; 256];
    table[0] = 0xFF;
    let mut i = 0;
    while i < GROUP_ORDER {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const fn build_inverse() -> [u8; 256] {
    let exp = build_exp();
    let log = build_log();
    let mut table = [0u8; 256];
    let mut a = 1;
    while a < 256 {
        table[a] = exp[(GROUP_ORDER - log[a] as usize) % GROUP_ORDER];
        a += 1;
    }
    table
}

fn mul_table() -> &'static [MulRow] {
    static TABLE: OnceLock<Box<[MulRow]>> = OnceLock::new();
    TABLE.get_or_init(build_mul_table)
}

fn build_mul_table() -> Box<[MulRow]> {
    // Heap-allocated directly; a 64 KiB array temporary would sit on the stack.
    let mut table = vec![[0u8; 256]; 256].into_boxed_slice();
    for (a, row) in table.iter_mut().enumerate().skip(1) {
        let log_a = LOG[a] as usize;
        for (b, entry) in row.iter_mut().enumerate().skip(1) {
            *entry = EXP[log_a + LOG[b] as usize];
        }
    }
    trace!("built GF(256) multiplication table");
    table
}

/// Force construction of the multiplication table.
///
/// Optional: every operation initializes it lazily. Calling this up front
/// moves the one-time cost out of the first encode or decode.
pub fn init() {
    mul_table();
}

/// Field addition (and subtraction): XOR.
#[inline]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication. Zero absorbs.
#[inline]
pub fn mul(a: u8, b: u8) -> u8 {
    mul_table()[a as usize][b as usize]
}

/// Multiplicative inverse.
///
/// Zero has no inverse; `inv(0)` returns 0 and callers must not rely on it.
#[inline]
pub fn inv(a: u8) -> u8 {
    INVERSE[a as usize]
}

/// `α^power`, with the exponent reduced modulo the group order.
#[inline]
pub fn exp(power: usize) -> u8 {
    EXP[power % GROUP_ORDER]
}

/// Discrete logarithm base `α`, or `None` for zero.
#[inline]
pub fn log(a: u8) -> Option<u8> {
    (a != 0).then(|| LOG[a as usize])
}

/// The multiplication-table row for `c`.
///
/// Hot loops look this up once and then index it per byte.
#[inline]
pub fn mul_row(c: u8) -> &'static MulRow {
    &mul_table()[c as usize]
}
