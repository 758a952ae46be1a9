//! Recombination configuration.
//!
//! [`RecombinatorConfig`] holds the two immutable parameters of a
//! recombination operator. Values are validated on construction, so an
//! existing config is always usable.

use crate::error::{require_probability, EvoError, Result};

/// Configuration for a recombination operator.
///
/// # Defaults
///
/// ```
/// use u_evocore::alter::RecombinatorConfig;
///
/// let config = RecombinatorConfig::default();
/// assert!((config.probability() - 0.2).abs() < 1e-12);
/// assert_eq!(config.order(), 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evocore::alter::RecombinatorConfig;
///
/// let config = RecombinatorConfig::default()
///     .with_probability(0.6)?
///     .with_order(3)?;
/// assert_eq!(config.order(), 3);
/// # Ok::<(), u_evocore::EvoError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct RecombinatorConfig {
    /// Probability that an individual is chosen as recombination anchor.
    probability: f64,

    /// Number of individuals combined per recombination event.
    order: usize,
}

impl Default for RecombinatorConfig {
    fn default() -> Self {
        Self {
            probability: Self::DEFAULT_PROBABILITY,
            order: Self::MIN_ORDER,
        }
    }
}

impl RecombinatorConfig {
    /// Default anchor probability.
    pub const DEFAULT_PROBABILITY: f64 = 0.2;

    /// Smallest valid recombination order.
    pub const MIN_ORDER: usize = 2;

    /// Creates a validated configuration.
    ///
    /// # Errors
    /// - [`EvoError::InvalidProbability`] if `probability` is outside `[0, 1]`
    /// - [`EvoError::InvalidOrder`] if `order < 2`
    pub fn new(probability: f64, order: usize) -> Result<Self> {
        let config = Self { probability, order };
        config.validate()?;
        Ok(config)
    }

    /// Checks both parameters.
    ///
    /// Every public constructor runs this check, so it only fails for a
    /// value built inside the crate.
    pub fn validate(&self) -> Result<()> {
        require_probability(self.probability)?;
        if self.order < Self::MIN_ORDER {
            return Err(EvoError::InvalidOrder(self.order));
        }
        Ok(())
    }

    /// Sets the anchor probability.
    pub fn with_probability(self, probability: f64) -> Result<Self> {
        Self::new(probability, self.order)
    }

    /// Sets the recombination order.
    pub fn with_order(self, order: usize) -> Result<Self> {
        Self::new(self.probability, order)
    }

    /// Probability that an individual is chosen as anchor.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Number of individuals involved in one recombination event.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Order actually used for a population of `size` individuals.
    pub fn effective_order(&self, size: usize) -> usize {
        self.order.min(size)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    probability: f64,
    order: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for RecombinatorConfig {
    type Error = EvoError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Self::new(raw.probability, raw.order)
    }
}
