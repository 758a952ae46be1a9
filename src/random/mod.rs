//! Unbiased random sampling primitives.
//!
//! Every stochastic operator of an evolutionary search depends on the
//! functions in this module. None of them owns a generator: callers pass
//! one explicitly, so each concurrent unit of work can use its own.
//!
//! # Contents
//!
//! - [`sampler`]: bounded integer/real draws free of modulo and rounding
//!   bias, alphanumeric characters, printable ASCII strings
//! - [`IndexStream`]: lazy Bernoulli-filtered index sequences
//! - [`subset`]: distinct random index subsets
//! - [`seed`]: seed derivation for initializing generators
//!
//! # Generators
//!
//! A generator is any [`rand::RngCore`]. Functions are generic over
//! `R: Rng + ?Sized`, so both concrete engines and `&mut dyn RngCore`
//! are accepted. Use [`create_rng`] for reproducible runs.

pub(crate) mod index_stream;
pub mod sampler;
pub mod seed;

pub use index_stream::{indexes, indexes_n, next_bool_with, IndexStream};
pub use sampler::{
    next_ascii_string, next_ascii_string_of_length, next_byte, next_char, next_double,
    next_float, next_int, next_int_in, next_long, next_short, subset,
};

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a reproducible generator from a 64-bit seed.
///
/// ```
/// use rand::Rng;
/// use u_evocore::random::create_rng;
///
/// let a: u64 = create_rng(42).random();
/// let b: u64 = create_rng(42).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
