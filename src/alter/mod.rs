//! Population alteration.
//!
//! Alterers are applied once per generation by the evolution engine. This
//! module provides the recombination protocol: probabilistic anchor
//! selection, random companion subsets, and a pluggable recombination
//! step that does the actual work on the selected individuals.
//!
//! # Core Traits
//!
//! - [`Population`]: read-only view of the altered collection
//! - [`Alterer`]: operator applied to a population for one generation
//!
//! # Key Types
//!
//! - [`RecombinatorConfig`]: validated probability and order
//! - [`Recombinator`]: configuration plus recombination step
//! - [`CompositeAlterer`]: sequence of alterers applied in order
//!
//! The driving loop is also available as the free function
//! [`alter_population`] for callers that do not need an [`Alterer`].

mod composite;
mod config;
mod recombinator;
mod types;

pub use composite::CompositeAlterer;
pub use config::RecombinatorConfig;
pub use recombinator::{alter_population, Recombinator};
pub use types::{Alterer, Population};
