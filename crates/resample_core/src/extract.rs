//! Turning a price sequence into the base transaction sequence

use crate::error::PathError;
use crate::model::Transaction;

/// Pair prices into transactions using non-overlapping windows of two.
///
/// `prices[0]` and `prices[1]` form the first transaction, `prices[2]` and
/// `prices[3]` the second, and so on, so `k` prices give `k / 2` transactions.
/// A trailing unpaired price is dropped.
///
/// Every price is checked before any transaction is built: fewer than two
/// prices, or any price that is not positive and finite, is an error.
pub fn extract_transactions(prices: &[f64]) -> Result<Vec<Transaction>, PathError> {
    if prices.len() < 2 {
        return Err(PathError::InsufficientPrices { len: prices.len() });
    }

    if let Some((index, &price)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(PathError::InvalidPrice { index, price });
    }

    let transactions: Vec<Transaction> = prices
        .chunks_exact(2)
        .map(|pair| Transaction::new(pair[0], pair[1]))
        .collect();

    if prices.len() % 2 == 1 {
        tracing::trace!(
            len = prices.len(),
            "odd-length price sequence, dropping trailing price"
        );
    }

    Ok(transactions)
}
