//! Bootstrap resampling of a base transaction sequence
//!
//! Every scenario gets its own random engine built from an explicit integer
//! seed. Nothing is shared between draws, so a scenario depends only on the
//! base sequence, its seed and the replacement mode, and the per-seed loop can
//! run in parallel without changing the result.

use rand::SeedableRng;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::error::SamplingError;
use crate::model::{ReplacementMode, Scenario, ScenarioSet, Transaction};

/// Seeds `0, 1, ..., num_scenarios - 1`
#[must_use]
pub fn seed_sequence(num_scenarios: usize) -> Vec<u64> {
    (0..num_scenarios as u64).collect()
}

#[inline]
fn engine(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Shuffle a copy of `base` with a Fisher-Yates shuffle driven by `seed`.
///
/// The result always holds exactly the transactions of `base`, reordered. An
/// empty base gives an empty scenario.
#[must_use]
pub fn sample_without_replacement(base: &[Transaction], seed: u64) -> Scenario {
    let mut transactions = base.to_vec();
    transactions.shuffle(&mut engine(seed));
    Scenario::new(seed, transactions)
}

/// Draw `base.len()` indices uniformly from `[0, base.len() - 1]`.
pub fn draw_indices(len: usize, seed: u64) -> Result<Vec<usize>, SamplingError> {
    if len == 0 {
        return Err(SamplingError::EmptyBase);
    }
    let dist = Uniform::new(0, len)?;
    let mut rng = engine(seed);
    Ok((0..len).map(|_| dist.sample(&mut rng)).collect())
}

/// Build a scenario of `base.len()` transactions drawn with replacement.
///
/// Fails with [`SamplingError::EmptyBase`] when `base` is empty.
pub fn sample_with_replacement(
    base: &[Transaction],
    seed: u64,
) -> Result<Scenario, SamplingError> {
    let transactions = draw_indices(base.len(), seed)?
        .into_iter()
        .map(|i| base[i])
        .collect();
    Ok(Scenario::new(seed, transactions))
}

/// Produce one scenario for `seed` under `mode`
pub fn sample_scenario(
    base: &[Transaction],
    seed: u64,
    mode: ReplacementMode,
) -> Result<Scenario, SamplingError> {
    let scenario = match mode {
        ReplacementMode::WithoutReplacement => sample_without_replacement(base, seed),
        ReplacementMode::WithReplacement => sample_with_replacement(base, seed)?,
    };
    tracing::trace!(seed, %mode, len = scenario.len(), "scenario sampled");
    Ok(scenario)
}

/// Produce one scenario per seed, in seed order.
///
/// Any failing draw fails the whole set. With the `parallel` feature the draws
/// run on the rayon pool; the output order is the seed order either way.
pub fn generate_scenarios(
    base: &[Transaction],
    seeds: &[u64],
    mode: ReplacementMode,
) -> Result<ScenarioSet, SamplingError> {
    if mode == ReplacementMode::WithReplacement && base.is_empty() {
        return Err(SamplingError::EmptyBase);
    }

    tracing::debug!(
        %mode,
        base_len = base.len(),
        num_scenarios = seeds.len(),
        "generating scenarios"
    );

    #[cfg(feature = "parallel")]
    let scenarios = seeds
        .par_iter()
        .map(|&seed| sample_scenario(base, seed, mode))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let scenarios = seeds
        .iter()
        .map(|&seed| sample_scenario(base, seed, mode))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScenarioSet::new(mode, scenarios))
}
