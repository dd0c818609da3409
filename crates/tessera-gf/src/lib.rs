//! GF(256) arithmetic and the linear algebra the erasure codec is built on.
//!
//! This crate provides:
//! - [`field`]: add, multiply, invert, exp/log over `GF(2^8)` with the
//!   primitive polynomial `0x11D`.
//! - [`addmul`] / [`addmul_many`]: fused multiply-XOR over byte buffers.
//! - [`invert_matrix`]: in-place Gauss–Jordan inversion with full pivoting.
//! - [`matrix_mul`]: row-major matrix product.
//! - [`inverted_vandermonde`]: direct inverse of a Vandermonde matrix.
//!
//! Matrices are flattened row-major `u8` slices throughout.

mod error;
pub mod field;
mod kernel;
mod vandermonde;

pub use error::GfError;
pub use field::{add, exp, inv, log, mul, mul_row};
pub use kernel::{addmul, addmul_many, invert_matrix, matrix_mul};
pub use vandermonde::inverted_vandermonde;
