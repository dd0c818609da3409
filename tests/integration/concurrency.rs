//! A single code shared by many threads.

use std::sync::Arc;
use std::thread;

use tessera_fec::FecCode;
use tessera_integration_tests::{init_tracing, select, test_data_seeded};

#[test]
fn test_shared_code_across_threads() {
    init_tracing();
    let code = Arc::new(FecCode::new(6, 10).unwrap());

    let handles: Vec<_> = (0..8u32)
        .map(|t| {
            let code = Arc::clone(&code);
            thread::spawn(move || {
                for round in 0..20u32 {
                    let data = test_data_seeded(6 * 64, t * 1000 + round);
                    let shares = code.encode_to_shares(&data).unwrap();
                    // Each thread loses a different window of shares.
                    let keep: Vec<usize> = (0..10).map(|i| (i + t as usize) % 10).take(6).collect();
                    let got = code.decode_to_vec(&select(&shares, &keep)).unwrap();
                    assert_eq!(got, data, "thread {t} round {round}");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_construction_is_deterministic() {
    init_tracing();
    let codes: Vec<FecCode> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| FecCode::new(20, 30).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for code in &codes[1..] {
        assert_eq!(code, &codes[0]);
    }
}

#[test]
fn test_field_tables_under_concurrent_use() {
    init_tracing();
    let results: Vec<Vec<u8>> = thread::scope(|s| {
        let handles: Vec<_> = (0..8u8)
            .map(|t| {
                s.spawn(move || {
                    (0..=255u8)
                        .map(|x| tessera_gf::mul(x, t.wrapping_mul(31).wrapping_add(1)))
                        .collect::<Vec<u8>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (t, products) in results.iter().enumerate() {
        let c = (t as u8).wrapping_mul(31).wrapping_add(1);
        for (x, &p) in products.iter().enumerate() {
            assert_eq!(tessera_gf::mul(p, tessera_gf::inv(c)), x as u8);
        }
    }
}
