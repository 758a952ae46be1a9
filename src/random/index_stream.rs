//! Lazy Bernoulli-filtered index sequences.

use crate::error::{require_probability, Result};
use rand::Rng;
use std::iter::FusedIterator;

/// Probabilities this close to 0 or 1 are treated as exactly 0 or 1.
const EPSILON: f64 = 1e-20;

/// `2^64` as a float, the width of the signed 64-bit word range.
const WORD_RANGE: f64 = 18_446_744_073_709_551_616.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Mode {
    Empty,
    All,
    /// Keep an index iff a full-width `i64` draw is below the threshold.
    Threshold(i128),
}

impl Mode {
    fn of(p: f64) -> Self {
        if (p - 0.0).abs() <= EPSILON {
            Mode::Empty
        } else if (p - 1.0).abs() <= EPSILON {
            Mode::All
        } else {
            Mode::Threshold(threshold(p))
        }
    }
}

/// Maps `p` onto the signed word range: a uniform `i64` lies below the
/// result with probability `p`, up to a rounding error of `2^-64`.
fn threshold(p: f64) -> i128 {
    (p * WORD_RANGE).round() as i128 + i128::from(i64::MIN)
}

/// One-shot iterator over the indices of `[start, end)`, each included
/// independently with a fixed probability.
///
/// Indices are yielded in ascending order. Each candidate costs one
/// integer draw and one comparison; probabilities of exactly 0 or 1 never
/// touch the generator.
pub struct IndexStream<'a, R: ?Sized> {
    rng: &'a mut R,
    next: usize,
    end: usize,
    mode: Mode,
}

impl<R: Rng + ?Sized> Iterator for IndexStream<'_, R> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        match self.mode {
            Mode::Empty => None,
            Mode::All => {
                if self.next < self.end {
                    self.next += 1;
                    Some(self.next - 1)
                } else {
                    None
                }
            }
            Mode::Threshold(t) => {
                while self.next < self.end {
                    let index = self.next;
                    self.next += 1;
                    if i128::from(self.rng.random::<i64>()) < t {
                        return Some(index);
                    }
                }
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.saturating_sub(self.next);
        match self.mode {
            Mode::Empty => (0, Some(0)),
            Mode::All => (remaining, Some(remaining)),
            Mode::Threshold(_) => (0, Some(remaining)),
        }
    }
}

impl<R: Rng + ?Sized> FusedIterator for IndexStream<'_, R> {}

/// Creates an [`IndexStream`] over `[start, end)` with selection
/// probability `p`. An inverted range yields nothing.
///
/// # Errors
/// Returns [`EvoError::InvalidProbability`](crate::EvoError::InvalidProbability)
/// if `p` is outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use u_evocore::random::{create_rng, indexes};
///
/// let mut rng = create_rng(42);
/// let all: Vec<usize> = indexes(&mut rng, 0, 5, 1.0).unwrap().collect();
/// assert_eq!(all, vec![0, 1, 2, 3, 4]);
/// ```
pub fn indexes<R: Rng + ?Sized>(
    rng: &mut R,
    start: usize,
    end: usize,
    p: f64,
) -> Result<IndexStream<'_, R>> {
    let p = require_probability(p)?;
    Ok(bernoulli_indexes(rng, start, end, p))
}

/// [`indexes`] for a probability the caller has already validated.
pub(crate) fn bernoulli_indexes<R: Rng + ?Sized>(
    rng: &mut R,
    start: usize,
    end: usize,
    p: f64,
) -> IndexStream<'_, R> {
    IndexStream {
        rng,
        next: start,
        end,
        mode: Mode::of(p),
    }
}

/// Shorthand for [`indexes`] over `[0, n)`.
pub fn indexes_n<R: Rng + ?Sized>(rng: &mut R, n: usize, p: f64) -> Result<IndexStream<'_, R>> {
    indexes(rng, 0, n, p)
}

/// Single Bernoulli trial with success probability `p`.
///
/// # Errors
/// Returns [`EvoError::InvalidProbability`](crate::EvoError::InvalidProbability)
/// if `p` is outside `[0, 1]`.
pub fn next_bool_with<R: Rng + ?Sized>(p: f64, rng: &mut R) -> Result<bool> {
    let p = require_probability(p)?;
    Ok(match Mode::of(p) {
        Mode::Empty => false,
        Mode::All => true,
        Mode::Threshold(t) => i128::from(rng.random::<i64>()) < t,
    })
}
