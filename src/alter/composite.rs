//! Sequential composition of alterers.

use super::types::Alterer;
use rand::RngCore;

/// Applies several alterers one after another.
///
/// Each member sees the population as left by its predecessor. The
/// reported alteration count is the sum over all members.
pub struct CompositeAlterer<P: ?Sized> {
    alterers: Vec<Box<dyn Alterer<P>>>,
}

impl<P: ?Sized> Default for CompositeAlterer<P> {
    fn default() -> Self {
        Self {
            alterers: Vec::new(),
        }
    }
}

impl<P: ?Sized> CompositeAlterer<P> {
    /// Creates an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alterer.
    pub fn with<A>(mut self, alterer: A) -> Self
    where
        A: Alterer<P> + 'static,
    {
        self.alterers.push(Box::new(alterer));
        self
    }

    /// Number of member alterers.
    pub fn len(&self) -> usize {
        self.alterers.len()
    }

    /// Whether the composite has no members.
    pub fn is_empty(&self) -> bool {
        self.alterers.is_empty()
    }
}

impl<P: ?Sized> Alterer<P> for CompositeAlterer<P> {
    fn alter(&self, population: &mut P, generation: usize, rng: &mut dyn RngCore) -> usize {
        self.alterers
            .iter()
            .enumerate()
            .map(|(i, alterer)| {
                let altered = alterer.alter(population, generation, rng);
                log::debug!("generation {generation}: alterer #{i} altered {altered}");
                altered
            })
            .sum()
    }
}
