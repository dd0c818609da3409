//! Systematic erasure coding over GF(256).
//!
//! This crate provides:
//! - [`FecCode`] — a `(k, n)` code and its precomputed encoding matrix.
//! - [`FecCode::encode`] — splits input into `k` blocks and emits `n` shares.
//! - [`FecCode::decode`] — rebuilds the `k` blocks from any `k` shares.
//! - [`ShareSink`] — where shares and recovered blocks are delivered.
//! - [`FecConfig`] — serializable `(k, n)` parameters.
//!
//! The first `k` shares are the input blocks unchanged; the remaining
//! `n - k` are built from a Vandermonde matrix made systematic, so any `k`
//! of the `n` are linearly independent.
//!
//! ```
//! use std::collections::BTreeMap;
//! use tessera_fec::FecCode;
//!
//! let code = FecCode::new(3, 5)?;
//! let shares = code.encode_to_shares(b"hello, world")?;
//!
//! // Lose shares 1 and 4.
//! let survivors: BTreeMap<usize, _> = shares
//!     .into_iter()
//!     .filter(|s| s.index != 1 && s.index != 4)
//!     .map(|s| (s.index, s.data))
//!     .collect();
//!
//! assert_eq!(code.decode_to_vec(&survivors)?, b"hello, world");
//! # Ok::<(), tessera_fec::FecError>(())
//! ```

mod code;
mod config;
mod decoder;
mod encoder;
mod error;
mod sink;

pub use code::{FecCode, MAX_SHARES};
pub use config::FecConfig;
pub use decoder::shares_from_pairs;
pub use error::FecError;
pub use sink::{Share, ShareCollector, ShareSink};
