//! Resampled scenarios and the sets they are collected into

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

/// How a scenario draws from the base transaction sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementMode {
    /// Independent uniform draws, repeats allowed
    WithReplacement,
    /// A permutation of the base, every transaction exactly once
    WithoutReplacement,
}

impl ReplacementMode {
    pub const ALL: [ReplacementMode; 2] = [
        ReplacementMode::WithoutReplacement,
        ReplacementMode::WithReplacement,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ReplacementMode::WithReplacement => "with replacement",
            ReplacementMode::WithoutReplacement => "without replacement",
        }
    }
}

impl fmt::Display for ReplacementMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One resampled transaction sequence and the seed that produced it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub seed: u64,
    pub transactions: Vec<Transaction>,
}

impl Scenario {
    #[must_use]
    pub fn new(seed: u64, transactions: Vec<Transaction>) -> Self {
        Self { seed, transactions }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Per-transaction simple returns, in scenario order
    #[must_use]
    pub fn returns(&self) -> Vec<f64> {
        self.transactions.iter().map(Transaction::simple_return).collect()
    }

    /// Compounded return across the whole scenario
    #[must_use]
    pub fn cumulative_return(&self) -> f64 {
        self.transactions
            .iter()
            .map(|t| 1.0 + t.simple_return())
            .product::<f64>()
            - 1.0
    }
}

impl Index<usize> for Scenario {
    type Output = Transaction;

    fn index(&self, index: usize) -> &Self::Output {
        &self.transactions[index]
    }
}

/// Ordered collection of scenarios, one per seed, in seed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSet {
    pub mode: ReplacementMode,
    pub scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    #[must_use]
    pub fn new(mode: ReplacementMode, scenarios: Vec<Scenario>) -> Self {
        Self { mode, scenarios }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scenario> {
        self.scenarios.iter()
    }

    /// Seeds in collection order
    #[must_use]
    pub fn seeds(&self) -> Vec<u64> {
        self.scenarios.iter().map(|s| s.seed).collect()
    }

    /// Matrix of returns: one row per scenario
    #[must_use]
    pub fn return_matrix(&self) -> Vec<Vec<f64>> {
        self.scenarios.iter().map(Scenario::returns).collect()
    }
}

impl Index<usize> for ScenarioSet {
    type Output = Scenario;

    fn index(&self, index: usize) -> &Self::Output {
        &self.scenarios[index]
    }
}

impl<'a> IntoIterator for &'a ScenarioSet {
    type Item = &'a Scenario;
    type IntoIter = std::slice::Iter<'a, Scenario>;

    fn into_iter(self) -> Self::IntoIter {
        self.scenarios.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(ReplacementMode::WithReplacement.label(), "with replacement");
        assert_eq!(
            ReplacementMode::WithoutReplacement.to_string(),
            "without replacement"
        );
    }

    #[test]
    fn test_cumulative_return() {
        let scenario = Scenario::new(
            0,
            vec![Transaction::new(100.0, 110.0), Transaction::new(100.0, 90.0)],
        );
        // 1.1 * 0.9 - 1
        assert!((scenario.cumulative_return() - (-0.01)).abs() < 1e-12);
        assert_eq!(scenario.returns().len(), 2);
    }

    #[test]
    fn test_empty_scenario_cumulative_return_is_zero() {
        let scenario = Scenario::new(3, vec![]);
        assert!(scenario.is_empty());
        assert_eq!(scenario.cumulative_return(), 0.0);
    }

    #[test]
    fn test_set_seeds_and_matrix() {
        let txn = Transaction::new(50.0, 55.0);
        let set = ScenarioSet::new(
            ReplacementMode::WithReplacement,
            vec![Scenario::new(0, vec![txn]), Scenario::new(1, vec![txn, txn])],
        );

        assert_eq!(set.seeds(), vec![0, 1]);
        let matrix = set.return_matrix();
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[1].len(), 2);
        assert_eq!(set[1][0], txn);
    }

    #[test]
    fn test_mode_serializes_snake_case() {
        let json = serde_json::to_string(&ReplacementMode::WithoutReplacement).unwrap();
        assert_eq!(json, "\"without_replacement\"");
    }
}
