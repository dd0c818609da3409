//! Shared helpers for the tessera integration tests.
//!
//! Provides deterministic test data, share-loss simulation and a one-shot
//! tracing subscriber so failures can be inspected with `RUST_LOG=debug`.

use std::collections::BTreeMap;
use std::sync::Once;

use rand::Rng;
use rand::seq::index;
use tessera_fec::{FecCode, Share};
use tracing_subscriber::EnvFilter;

/// Install a test-friendly `tracing` subscriber once per test binary.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Generate deterministic, non-repeating test data.
pub fn test_data(size: usize) -> Vec<u8> {
    test_data_seeded(size, 0xDEAD_BEEF)
}

/// Generate test data with a specific seed.
pub fn test_data_seeded(size: usize, seed: u32) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state: u32 = seed;
    for _ in 0..size {
        state = state.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((state >> 16) as u8);
    }
    data
}

/// Encode `data` with `(k, n)`, returning the code and every share.
pub fn encode_all(k: usize, n: usize, data: &[u8]) -> (FecCode, Vec<Share>) {
    let code = FecCode::new(k, n).expect("valid parameters");
    let shares = code.encode_to_shares(data).expect("input is a multiple of k");
    assert_eq!(shares.len(), n);
    (code, shares)
}

/// Keep only the shares whose index appears in `indices`.
pub fn select<'a>(shares: &'a [Share], indices: &[usize]) -> BTreeMap<usize, &'a [u8]> {
    shares
        .iter()
        .filter(|s| indices.contains(&s.index))
        .map(|s| (s.index, &s.data[..]))
        .collect()
}

/// Pick `count` distinct share indices out of `0..n` uniformly at random.
pub fn random_subset<R: Rng + ?Sized>(rng: &mut R, n: usize, count: usize) -> Vec<usize> {
    index::sample(rng, n, count).into_vec()
}
