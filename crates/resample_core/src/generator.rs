//! Price path generation
//!
//! The resampling engine does not care where prices come from. Anything that
//! turns market parameters and a seed into an ordered price sequence can act as
//! a [`PriceGenerator`]; a geometric Brownian motion stand-in is provided until
//! paths come from a real trading strategy.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;

/// Distributional inputs for one price path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Price at step 0
    pub initial_price: f64,
    /// Number of steps after the initial price; the path has `steps + 1` prices
    pub steps: usize,
    /// Length of one step in the drift/volatility time unit
    pub time_step: f64,
    pub drift: f64,
    pub volatility: f64,
}

impl MarketParameters {
    fn validate(&self) -> Result<(), GeneratorError> {
        if !(self.initial_price.is_finite() && self.initial_price > 0.0) {
            return Err(GeneratorError::InvalidParameters {
                reason: "initial price must be positive and finite",
            });
        }
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(GeneratorError::InvalidParameters {
                reason: "time step must be positive and finite",
            });
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(GeneratorError::InvalidParameters {
                reason: "volatility must be non-negative and finite",
            });
        }
        if self.steps == usize::MAX {
            return Err(GeneratorError::InvalidParameters {
                reason: "too many steps",
            });
        }
        if !self.drift.is_finite() {
            return Err(GeneratorError::InvalidParameters {
                reason: "drift must be finite",
            });
        }
        Ok(())
    }
}

/// Produces an ordered price sequence of `params.steps + 1` prices.
///
/// Implementations must be deterministic per seed.
pub trait PriceGenerator {
    fn generate_prices(
        &self,
        params: &MarketParameters,
        seed: u64,
    ) -> Result<Vec<f64>, GeneratorError>;
}

/// Any closure over the same inputs can stand in for a generator, which is how
/// tests inject fixed synthetic paths.
impl<F> PriceGenerator for F
where
    F: Fn(&MarketParameters, u64) -> Vec<f64>,
{
    fn generate_prices(
        &self,
        params: &MarketParameters,
        seed: u64,
    ) -> Result<Vec<f64>, GeneratorError> {
        Ok(self(params, seed))
    }
}

/// Geometric Brownian motion using the exact log-price step
///
/// `ln S(t+dt) = ln S(t) + (mu - sigma^2 / 2) dt + sigma sqrt(dt) Z`
///
/// Prices are always positive.
#[derive(Debug, Clone, Copy, Default)]
pub struct GbmPriceGenerator;

impl PriceGenerator for GbmPriceGenerator {
    fn generate_prices(
        &self,
        params: &MarketParameters,
        seed: u64,
    ) -> Result<Vec<f64>, GeneratorError> {
        params.validate()?;

        let normal =
            Normal::new(0.0, 1.0).map_err(|e| GeneratorError::Distribution(e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(seed);

        let sigma = params.volatility;
        let drift_per_step = (params.drift - 0.5 * sigma * sigma) * params.time_step;
        let diffusion_scale = sigma * params.time_step.sqrt();

        let mut prices = Vec::with_capacity(params.steps + 1);
        prices.push(params.initial_price);

        let mut log_price = params.initial_price.ln();
        for _ in 0..params.steps {
            let z: f64 = normal.sample(&mut rng);
            log_price += drift_per_step + diffusion_scale * z;
            prices.push(log_price.exp());
        }

        Ok(prices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(steps: usize) -> MarketParameters {
        MarketParameters {
            initial_price: 100.0,
            steps,
            time_step: 1.0,
            drift: 0.15,
            volatility: 0.25,
        }
    }

    #[test]
    fn test_gbm_path_length_and_start() {
        let prices = GbmPriceGenerator.generate_prices(&params(14), 106).unwrap();
        assert_eq!(prices.len(), 15);
        assert_eq!(prices[0], 100.0);
    }

    #[test]
    fn test_gbm_prices_positive() {
        let prices = GbmPriceGenerator.generate_prices(&params(500), 7).unwrap();
        assert!(prices.iter().all(|p| p.is_finite() && *p > 0.0));
    }

    #[test]
    fn test_gbm_deterministic_per_seed() {
        let a = GbmPriceGenerator.generate_prices(&params(20), 106).unwrap();
        let b = GbmPriceGenerator.generate_prices(&params(20), 106).unwrap();
        let c = GbmPriceGenerator.generate_prices(&params(20), 107).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_gbm_zero_volatility_is_pure_drift() {
        let p = MarketParameters {
            volatility: 0.0,
            drift: 0.1,
            ..params(3)
        };
        let prices = GbmPriceGenerator.generate_prices(&p, 0).unwrap();
        let expected_last = 100.0 * (0.1_f64 * 3.0).exp();
        assert!((prices[3] - expected_last).abs() < 1e-9);
    }

    #[test]
    fn test_gbm_rejects_bad_parameters() {
        let bad_price = MarketParameters {
            initial_price: 0.0,
            ..params(5)
        };
        assert!(matches!(
            GbmPriceGenerator.generate_prices(&bad_price, 1),
            Err(GeneratorError::InvalidParameters { .. })
        ));

        let bad_vol = MarketParameters {
            volatility: -0.1,
            ..params(5)
        };
        assert!(GbmPriceGenerator.generate_prices(&bad_vol, 1).is_err());

        let too_long = MarketParameters {
            steps: usize::MAX,
            ..params(5)
        };
        assert!(matches!(
            GbmPriceGenerator.generate_prices(&too_long, 1),
            Err(GeneratorError::InvalidParameters { .. })
        ));

        let bad_dt = MarketParameters {
            time_step: 0.0,
            ..params(5)
        };
        assert!(GbmPriceGenerator.generate_prices(&bad_dt, 1).is_err());
    }

    #[test]
    fn test_closure_generator() {
        let fixed = |p: &MarketParameters, _seed: u64| vec![p.initial_price; p.steps + 1];
        let prices = fixed.generate_prices(&params(4), 0).unwrap();
        assert_eq!(prices, vec![100.0; 5]);
    }
}
