//! Building codes from TOML configuration.

use tessera_fec::{FecCode, FecConfig, FecError};
use tessera_integration_tests::{init_tracing, select, test_data};

#[test]
fn test_config_file_to_round_trip() {
    init_tracing();
    let raw = r#"
        [fec]
        k = 5
        n = 8
    "#;
    let config = FecConfig::from_toml_str(raw).unwrap();
    assert_eq!(config.redundancy(), 3);

    let code = FecCode::from_config(&config).unwrap();
    let data = test_data(5 * 100);
    let shares = code.encode_to_shares(&data).unwrap();
    assert_eq!(shares.len(), 8);

    let got = code.decode_to_vec(&select(&shares, &[1, 3, 5, 6, 7])).unwrap();
    assert_eq!(got, data);
}

#[test]
fn test_default_config_builds() {
    init_tracing();
    let code = FecCode::from_config(&FecConfig::default()).unwrap();
    assert_eq!((code.k(), code.n()), (4, 6));
}

#[test]
fn test_out_of_range_config_is_rejected() {
    init_tracing();
    let config = FecConfig::from_toml_str("[fec]\nk = 10\nn = 300").unwrap();
    assert!(matches!(
        FecCode::from_config(&config),
        Err(FecError::InvalidParameters { k: 10, n: 300 })
    ));
}
