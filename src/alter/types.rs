//! Core trait definitions for population alteration.
//!
//! [`Population`] is the read-only view an alterer needs of the
//! collection it alters; [`Alterer`] is the contract shared by every
//! operator applied once per generation.

use rand::RngCore;

/// Ordered, randomly indexable collection of individuals.
///
/// Alterers only read the size and hand index sets to their
/// recombination step; individuals stay opaque. Recombination steps use
/// [`get`](Population::get) to read the members of an index set.
///
/// ```
/// use rand::RngCore;
/// use u_evocore::alter::{Alterer, Population, Recombinator};
/// use u_evocore::random::create_rng;
///
/// // The larger of anchor and companion overwrites the smaller one.
/// let dominate = Recombinator::of(
///     1.0,
///     2,
///     |pop: &mut Vec<u32>, idx: &[usize], _generation: usize, _rng: &mut dyn RngCore| {
///         let anchor = Population::get(&*pop, idx[0]).copied();
///         let companion = Population::get(&*pop, idx[1]).copied();
///         match (anchor, companion) {
///             (Some(a), Some(b)) if a > b => {
///                 pop[idx[1]] = a;
///                 1
///             }
///             _ => 0,
///         }
///     },
/// )?;
///
/// let mut population = vec![3, 1, 4, 1, 5];
/// let altered = dominate.alter(&mut population, 0, &mut create_rng(7));
/// assert!(altered <= 5);
/// assert!(population.iter().all(|&v| v >= 1));
/// # Ok::<(), u_evocore::EvoError>(())
/// ```
pub trait Population {
    /// The individual type.
    type Individual;

    /// Number of individuals.
    fn size(&self) -> usize;

    /// Individual at `index`, or `None` if out of range.
    fn get(&self, index: usize) -> Option<&Self::Individual>;
}

impl<T> Population for [T] {
    type Individual = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }
}

impl<T> Population for Vec<T> {
    type Individual = T;

    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// An operator that alters a population in place.
///
/// The generator is passed explicitly so the caller controls which
/// generator each concurrent unit of work uses. Implementations perform no
/// synchronization; the caller must hold exclusive access to the
/// population during a pass.
pub trait Alterer<P: ?Sized> {
    /// Alters `population` for `generation` and returns the number of
    /// altered elements.
    fn alter(&self, population: &mut P, generation: usize, rng: &mut dyn RngCore) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_population() {
        let pop = vec!['a', 'b', 'c'];
        assert_eq!(pop.size(), 3);
        assert_eq!(Population::get(&pop, 1), Some(&'b'));
        assert_eq!(Population::get(&pop, 3), None);
    }

    #[test]
    fn test_slice_population() {
        let pop = [1.0, 2.0];
        let slice: &[f64] = &pop;
        assert_eq!(slice.size(), 2);
        assert_eq!(Population::get(slice, 0), Some(&1.0));
    }
}
