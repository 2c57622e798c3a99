//! Tests for pairing a price sequence into daily transactions
//!
//! These tests verify that:
//! - `k` prices give `k / 2` transactions for both even and odd `k`
//! - Transaction `i` spans prices `2i` and `2i + 1`
//! - Short or invalid price sequences are rejected before any work

use crate::error::PathError;
use crate::extract::extract_transactions;

fn ramp(k: usize) -> Vec<f64> {
    (0..k).map(|i| 100.0 + i as f64).collect()
}

#[test]
fn test_pairing_counts_and_positions() {
    for k in 2..=21 {
        let prices = ramp(k);
        let txns = extract_transactions(&prices).unwrap();

        assert_eq!(txns.len(), k / 2, "k = {k}");
        for (i, txn) in txns.iter().enumerate() {
            assert_eq!(txn.start_price(), prices[2 * i]);
            assert_eq!(txn.end_price(), prices[2 * i + 1]);
        }
    }
}

#[test]
fn test_pairs_do_not_overlap() {
    let prices = ramp(8);
    let txns = extract_transactions(&prices).unwrap();

    for pair in txns.windows(2) {
        assert_ne!(pair[0].end_price(), pair[1].start_price());
    }
}

#[test]
fn test_returns_follow_prices() {
    let txns = extract_transactions(&[100.0, 110.0, 100.0, 90.0]).unwrap();
    assert!((txns[0].simple_return() - 0.10).abs() < 1e-12);
    assert!((txns[1].simple_return() + 0.10).abs() < 1e-12);
}

#[test]
fn test_short_sequences_rejected() {
    for k in 0..2 {
        assert_eq!(
            extract_transactions(&ramp(k)),
            Err(PathError::InsufficientPrices { len: k })
        );
    }
}

#[test]
fn test_invalid_trailing_price_still_rejected() {
    // The unpaired trailing price is validated even though it is dropped
    let result = extract_transactions(&[100.0, 101.0, f64::INFINITY]);
    assert!(matches!(
        result,
        Err(PathError::InvalidPrice { index: 2, .. })
    ));
}
