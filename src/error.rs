//! Error type shared by every module of the crate.
//!
//! All variants are precondition violations: they describe a malformed
//! argument supplied by the caller and are never retried internally.

use thiserror::Error;

/// Invalid-argument errors raised by constructors and random draws.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvoError {
    /// Bit range `[start, end)` is inverted, empty or exceeds the source.
    #[error("invalid bit range [{start}, {end}) for a source of {capacity} bits")]
    InvalidRange {
        start: usize,
        end: usize,
        capacity: usize,
    },

    /// A bit array must hold at least one bit.
    #[error("bit array length must be positive, but was {0}")]
    InvalidLength(usize),

    /// Textual bit strings must not be empty.
    #[error("bit string must not be empty")]
    EmptyBitString,

    /// Textual bit strings may only contain `'0'` and `'1'`.
    #[error("invalid character {character:?} at position {position} in bit string")]
    InvalidCharacter { character: char, position: usize },

    /// Integer value needs more bits than the requested length.
    #[error("value needs {bits} bits but the bit array holds only {length}")]
    MagnitudeTooLarge { bits: u64, length: usize },

    /// Integer interval with `origin >= bound`.
    #[error("origin >= bound: {origin} >= {bound}")]
    EmptyInterval { origin: i64, bound: i64 },

    /// Real interval with `min >= max`, or with a NaN or infinite bound.
    #[error("invalid real interval [{min}, {max}): bounds must be finite with min < max")]
    InvalidFloatInterval { min: f64, max: f64 },

    /// Probability outside `[0, 1]`.
    #[error("probability must be in [0, 1], but was {0}")]
    InvalidProbability(f64),

    /// Recombination order below two.
    #[error("order must be greater than one, but was {0}")]
    InvalidOrder(usize),

    /// Subset size larger than the index domain.
    #[error("subset size {k} exceeds domain size {n}")]
    SubsetTooLarge { n: usize, k: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EvoError>;

/// Checks that `p` is a valid probability.
pub(crate) fn require_probability(p: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(EvoError::InvalidProbability(p))
    }
}
