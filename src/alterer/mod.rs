//! Stochastic variation operators.
//!
//! An [`Alterer`] applies a variation operator across a whole population
//! under a per-individual application probability, independent of the
//! operator's internal mechanics, and reports how much was changed. The
//! returned alteration count follows a known distribution (an
//! `order`-scaled binomial), so [`expected_alteration_count`] gives the
//! closed-form mean a statistical harness can validate against.
//!
//! [`PartiallyMatchedCrossover`] is the concrete operator provided here:
//! segment-exchange recombination for permutation genotypes that preserves
//! the bijection invariant for every choice of cut points.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), *Alleles, Loci, and the Traveling Salesman
//!   Problem*

mod pmx;
mod types;

pub use pmx::PartiallyMatchedCrossover;
pub use types::{expected_alteration_count, Alterer};
