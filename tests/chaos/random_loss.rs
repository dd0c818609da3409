//! Loss simulation: repeatedly drop random shares and check recovery.
//!
//! Up to `n - k` shares are lost per round. Losing more must fail cleanly
//! without emitting anything.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tessera_fec::{FecCode, FecError};
use tessera_integration_tests::{init_tracing, random_subset, select, test_data_seeded};
use tracing::debug;

#[test]
fn test_random_loss_never_loses_data() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(7);

    for round in 0..200u32 {
        let k = rng.random_range(1..=24);
        let n = rng.random_range(k..=k + 12);
        let block_size = rng.random_range(0..=96);
        let data = test_data_seeded(k * block_size, round);

        let code = FecCode::new(k, n).unwrap();
        let shares = code.encode_to_shares(&data).unwrap();

        let survivors = rng.random_range(k..=n);
        let keep = random_subset(&mut rng, n, survivors);
        debug!(round, k, n, lost = n - survivors, block_size, "simulated share loss");
        let got = code.decode_to_vec(&select(&shares, &keep)).unwrap();
        assert_eq!(got, data, "round {round}: k={k} n={n} kept={keep:?}");
    }
}

#[test]
fn test_too_much_loss_fails_cleanly() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(8);

    for round in 0..50u32 {
        let k = rng.random_range(2..=16);
        let n = rng.random_range(k..=k + 8);
        let data = test_data_seeded(k * 32, round);

        let code = FecCode::new(k, n).unwrap();
        let shares = code.encode_to_shares(&data).unwrap();

        let keep = random_subset(&mut rng, n, k - 1);
        let mut emitted = 0;
        let result = code.decode(&select(&shares, &keep), &mut |_: usize, _: usize, _: &[u8]| {
            emitted += 1
        });
        assert!(matches!(
            result,
            Err(FecError::InsufficientShares { got, .. }) if got == k - 1
        ));
        assert_eq!(emitted, 0);
    }
}
