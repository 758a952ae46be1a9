//! Sampling and bit-encoding substrate for evolutionary search.
//!
//! Provides the low-level building blocks that genetic operators share:
//!
//! - **Bits**: [`BitArray`](bits::BitArray), an immutable packed bit
//!   sequence with exact round trips through bytes, big integers, and
//!   `'0'`/`'1'` text.
//! - **Random**: bounded integer and real draws without modulo or rounding
//!   bias, Bernoulli-filtered index streams, random subsets, and seed
//!   derivation.
//! - **Sort**: indirect (index) sorting over opaque collections, used to
//!   rank populations without moving individuals.
//! - **Alter**: the recombination protocol that composes the primitives
//!   above into an operator applied once per generation.
//!
//! # Architecture
//!
//! This crate sits below the algorithm layer. It defines no engine loop,
//! fitness function, or concrete genetic operator. Random generators are
//! always passed in by the caller, so every function can run concurrently
//! as long as each unit of work owns its generator.

pub mod alter;
pub mod bits;
mod error;
pub mod random;
pub mod sort;

pub use error::{EvoError, Result};
