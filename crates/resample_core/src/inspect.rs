//! Diagnostic report over a generated scenario set
//!
//! This is a shape and content check, not statistical analysis. The report
//! lists the mode, the number of scenarios, their length and every return.

use std::fmt;

use serde::Serialize;

use crate::error::InspectError;
use crate::model::{ReplacementMode, ScenarioSet};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub mode: ReplacementMode,
    pub num_scenarios: usize,
    /// Length of the first scenario, or 0 for an empty set
    pub transactions_per_scenario: usize,
    /// One row of simple returns per scenario, in seed order
    pub returns: Vec<Vec<f64>>,
}

/// Check that every scenario has the same length as the first one.
pub fn validate_shape(set: &ScenarioSet) -> Result<(), InspectError> {
    let Some(first) = set.scenarios.first() else {
        return Ok(());
    };
    let expected = first.len();

    match set
        .iter()
        .enumerate()
        .find(|(_, scenario)| scenario.len() != expected)
    {
        Some((index, scenario)) => Err(InspectError::RaggedScenario {
            index,
            expected,
            actual: scenario.len(),
        }),
        None => Ok(()),
    }
}

/// Validate a scenario set and build its report.
pub fn inspect(set: &ScenarioSet) -> Result<ScenarioReport, InspectError> {
    validate_shape(set)?;

    Ok(ScenarioReport {
        mode: set.mode,
        num_scenarios: set.len(),
        transactions_per_scenario: set.scenarios.first().map_or(0, |s| s.len()),
        returns: set.return_matrix(),
    })
}

impl ScenarioReport {
    /// Compounded return of each scenario, in seed order
    #[must_use]
    pub fn cumulative_returns(&self) -> Vec<f64> {
        self.returns
            .iter()
            .map(|row| row.iter().map(|r| 1.0 + r).product::<f64>() - 1.0)
            .collect()
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "***** Check results of generated scenarios *****")?;
        writeln!(f, "Scenarios generated {}.", self.mode)?;
        writeln!(f, "Number of scenarios generated: {}", self.num_scenarios)?;
        writeln!(
            f,
            "Number of transactions in each scenario: {}",
            self.transactions_per_scenario
        )?;
        writeln!(f, "Matrix of daily transaction returns:")?;
        for row in &self.returns {
            for r in row {
                write!(f, "{r}\t")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
