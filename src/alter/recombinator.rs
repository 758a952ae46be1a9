//! Probabilistic recombination driver.
//!
//! A recombination pass walks the population once per generation:
//!
//! 1. Every individual becomes an *anchor* independently with the
//!    configured probability.
//! 2. For each anchor, `order` distinct indices are drawn in random order
//!    and the anchor overwrites the first slot, leaving `order - 1`
//!    uniformly distributed companions.
//! 3. The index set is handed to a pluggable recombination step, which
//!    reports how many elements it altered.
//!
//! The order is clamped to the population size, so small populations never
//! fail. The mean number of altered individuals lies between
//! `p · N` and `p · N · order`, depending on the recombination step.

use super::config::RecombinatorConfig;
use super::types::{Alterer, Population};
use crate::random::index_stream::bernoulli_indexes;
use rand::seq::index;
use rand::{Rng, RngCore};
use std::fmt;
use std::marker::PhantomData;

/// Runs one recombination pass over `population`.
///
/// `recombine(population, individuals, generation, rng)` receives the
/// index set of one event (anchor first) and returns the number of
/// elements it altered. Returns the sum over all events.
pub fn alter_population<P, R, F>(
    config: &RecombinatorConfig,
    population: &mut P,
    generation: usize,
    rng: &mut R,
    mut recombine: F,
) -> usize
where
    P: Population + ?Sized,
    R: Rng + ?Sized,
    F: FnMut(&mut P, &[usize], usize, &mut R) -> usize,
{
    let size = population.size();
    let order = config.effective_order(size);

    let anchors: Vec<usize> = bernoulli_indexes(rng, 0, size, config.probability()).collect();

    let mut alterations = 0;
    for &anchor in &anchors {
        // Draws come in random order, so every slot is uniform over the population.
        let mut individuals = index::sample(rng, size, order).into_vec();
        individuals[0] = anchor;

        let altered = recombine(population, &individuals, generation, rng);
        log::trace!(
            "generation {generation}: recombined {individuals:?}, {altered} altered"
        );
        alterations += altered;
    }

    log::debug!(
        "generation {generation}: {} recombination events (size {size}, order {order}), {alterations} alterations",
        anchors.len()
    );
    alterations
}

/// A recombination operator: validated configuration plus the
/// recombination step applied to every selected index set.
///
/// # Examples
///
/// ```
/// use rand::RngCore;
/// use u_evocore::alter::{Alterer, Recombinator, RecombinatorConfig};
/// use u_evocore::random::create_rng;
///
/// // Swap the values of the anchor and its companion.
/// let config = RecombinatorConfig::new(1.0, 2)?;
/// let swap = Recombinator::new(
///     config,
///     |pop: &mut Vec<u32>, idx: &[usize], _generation: usize, _rng: &mut dyn RngCore| {
///         pop.swap(idx[0], idx[1]);
///         2
///     },
/// );
///
/// let mut population = vec![1, 2, 3, 4];
/// let mut rng = create_rng(42);
/// assert_eq!(swap.alter(&mut population, 0, &mut rng), 8);
/// # Ok::<(), u_evocore::EvoError>(())
/// ```
pub struct Recombinator<P: ?Sized, F> {
    config: RecombinatorConfig,
    recombine: F,
    _population: PhantomData<fn(&mut P)>,
}

impl<P, F> Recombinator<P, F>
where
    P: Population + ?Sized,
    F: Fn(&mut P, &[usize], usize, &mut dyn RngCore) -> usize,
{
    /// Creates a recombinator from a validated configuration.
    pub fn new(config: RecombinatorConfig, recombine: F) -> Self {
        Self {
            config,
            recombine,
            _population: PhantomData,
        }
    }

    /// Validates `probability` and `order`, then creates the recombinator.
    ///
    /// # Errors
    /// See [`RecombinatorConfig::new`].
    pub fn of(probability: f64, order: usize, recombine: F) -> crate::Result<Self> {
        Ok(Self::new(RecombinatorConfig::new(probability, order)?, recombine))
    }

    /// The operator configuration.
    pub fn config(&self) -> &RecombinatorConfig {
        &self.config
    }

    /// Anchor probability.
    pub fn probability(&self) -> f64 {
        self.config.probability()
    }

    /// Number of individuals per recombination event.
    pub fn order(&self) -> usize {
        self.config.order()
    }
}

impl<P, F> Alterer<P> for Recombinator<P, F>
where
    P: Population + ?Sized,
    F: Fn(&mut P, &[usize], usize, &mut dyn RngCore) -> usize,
{
    fn alter(&self, population: &mut P, generation: usize, rng: &mut dyn RngCore) -> usize {
        alter_population(
            &self.config,
            population,
            generation,
            rng,
            |pop, individuals, generation, rng| (self.recombine)(pop, individuals, generation, rng),
        )
    }
}

impl<P: ?Sized, F> fmt::Debug for Recombinator<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recombinator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
