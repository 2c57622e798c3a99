mod scenario;
mod transaction;

pub use scenario::{ReplacementMode, Scenario, ScenarioSet};
pub use transaction::Transaction;
