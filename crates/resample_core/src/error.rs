use std::fmt;

/// Errors raised while turning a price sequence into transactions
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// Fewer than two prices, so no transaction can be formed
    InsufficientPrices { len: usize },
    /// A price that is zero, negative, or not finite
    InvalidPrice { index: usize, price: f64 },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::InsufficientPrices { len } => {
                write!(f, "need at least 2 prices to form a transaction, got {len}")
            }
            PathError::InvalidPrice { index, price } => {
                write!(f, "price {price} at index {index} is not a positive finite number")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Errors raised by the scenario samplers
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// Sampling with replacement needs at least one transaction to draw from
    EmptyBase,
    /// The uniform index distribution could not be built
    InvalidRange(String),
}

impl fmt::Display for SamplingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingError::EmptyBase => {
                write!(f, "cannot sample with replacement from an empty transaction sequence")
            }
            SamplingError::InvalidRange(msg) => write!(f, "invalid index range: {msg}"),
        }
    }
}

impl std::error::Error for SamplingError {}

impl From<rand::distr::uniform::Error> for SamplingError {
    fn from(err: rand::distr::uniform::Error) -> Self {
        SamplingError::InvalidRange(err.to_string())
    }
}

/// Errors raised while validating a scenario set
#[derive(Debug, Clone, PartialEq)]
pub enum InspectError {
    /// A scenario whose length differs from the first scenario
    RaggedScenario {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InspectError::RaggedScenario {
                index,
                expected,
                actual,
            } => write!(
                f,
                "scenario {index} has {actual} transactions, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for InspectError {}

/// Errors raised by a price path generator
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParameters { reason: &'static str },
    /// The underlying random distribution rejected its parameters
    Distribution(String),
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::InvalidParameters { reason } => {
                write!(f, "invalid generator parameters: {reason}")
            }
            GeneratorError::Distribution(msg) => write!(f, "distribution error: {msg}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Errors raised when an experiment configuration is unusable
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroDays,
    /// More days than the path generator will be asked for
    TooManyDays { days: usize, max: usize },
    NonPositivePrice(f64),
    NonPositiveTimeStep(f64),
    NegativeVolatility(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroDays => write!(f, "days must be at least 1"),
            ConfigError::TooManyDays { days, max } => {
                write!(f, "days must be at most {max}, got {days}")
            }
            ConfigError::NonPositivePrice(p) => {
                write!(f, "market price must be positive, got {p}")
            }
            ConfigError::NonPositiveTimeStep(dt) => {
                write!(f, "time step must be positive, got {dt}")
            }
            ConfigError::NegativeVolatility(v) => {
                write!(f, "volatility must be non-negative, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Any failure while running an experiment end to end
#[derive(Debug, Clone, PartialEq)]
pub enum ExperimentError {
    Config(ConfigError),
    Generator(GeneratorError),
    Path(PathError),
    Sampling(SamplingError),
    Inspect(InspectError),
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExperimentError::Config(e) => write!(f, "{e}"),
            ExperimentError::Generator(e) => write!(f, "{e}"),
            ExperimentError::Path(e) => write!(f, "{e}"),
            ExperimentError::Sampling(e) => write!(f, "{e}"),
            ExperimentError::Inspect(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExperimentError::Config(e) => Some(e),
            ExperimentError::Generator(e) => Some(e),
            ExperimentError::Path(e) => Some(e),
            ExperimentError::Sampling(e) => Some(e),
            ExperimentError::Inspect(e) => Some(e),
        }
    }
}

impl From<ConfigError> for ExperimentError {
    fn from(err: ConfigError) -> Self {
        ExperimentError::Config(err)
    }
}

impl From<GeneratorError> for ExperimentError {
    fn from(err: GeneratorError) -> Self {
        ExperimentError::Generator(err)
    }
}

impl From<PathError> for ExperimentError {
    fn from(err: PathError) -> Self {
        ExperimentError::Path(err)
    }
}

impl From<SamplingError> for ExperimentError {
    fn from(err: SamplingError) -> Self {
        ExperimentError::Sampling(err)
    }
}

impl From<InspectError> for ExperimentError {
    fn from(err: InspectError) -> Self {
        ExperimentError::Inspect(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ragged() -> InspectError {
        InspectError::RaggedScenario {
            index: 1,
            expected: 7,
            actual: 3,
        }
    }

    fn check_shape(fail: bool) -> Result<(), ExperimentError> {
        let shape: Result<(), InspectError> = if fail { Err(ragged()) } else { Ok(()) };
        shape?;
        Ok(())
    }

    #[test]
    fn test_inspect_error_converts_into_experiment_error() {
        assert_eq!(check_shape(false), Ok(()));

        let err = check_shape(true).unwrap_err();
        assert_eq!(err, ExperimentError::Inspect(ragged()));
        assert_eq!(err.to_string(), "scenario 1 has 3 transactions, expected 7");

        let source = std::error::Error::source(&err).expect("inspect error is the source");
        assert_eq!(source.to_string(), ragged().to_string());
    }

    #[test]
    fn test_too_many_days_message() {
        let err = ExperimentError::from(ConfigError::TooManyDays { days: 5, max: 4 });
        assert_eq!(err.to_string(), "days must be at most 4, got 5");
    }
}
