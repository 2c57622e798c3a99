//! A single daily observation of the simulated path

use serde::{Deserialize, Serialize};

/// One period of the price path: the price it opened at and the price it closed at.
///
/// Transactions are plain values. They are created once from a pair of prices
/// and copied freely into scenarios, so no scenario ever aliases another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    start_price: f64,
    end_price: f64,
}

impl Transaction {
    #[must_use]
    pub const fn new(start_price: f64, end_price: f64) -> Self {
        Self {
            start_price,
            end_price,
        }
    }

    #[must_use]
    pub const fn start_price(&self) -> f64 {
        self.start_price
    }

    #[must_use]
    pub const fn end_price(&self) -> f64 {
        self.end_price
    }

    /// Simple return over the period: `(end - start) / start`.
    ///
    /// A zero start price is not guarded here and yields an infinite or NaN
    /// result. The extractor rejects non-positive prices before any
    /// transaction is built.
    #[must_use]
    #[inline]
    pub fn simple_return(&self) -> f64 {
        (self.end_price - self.start_price) / self.start_price
    }
}
