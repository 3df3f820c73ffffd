//! Permutation genotype model.
//!
//! A permutation genotype is built from three layers:
//!
//! - [`AlleleUniverse`]: the fixed, ordered set of distinct values that a
//!   valid permutation must contain exactly once each. Shared by [`Arc`]
//!   across every gene derived from it.
//! - [`PermutationGene`]: one positioned allele, stored as an index into
//!   its universe. The index representation keeps validity checks and
//!   crossover conflict resolution at O(L).
//! - [`PermutationChromosome`]: an ordered gene sequence of length equal
//!   to the universe size, validated eagerly at construction.
//!
//! [`Genotype`], [`Individual`], and [`Population`] provide the
//! index-addressable, mutable-in-place storage that the alterer layer
//! operates on.
//!
//! Validity is only checked where it is cheap and meaningful: at
//! construction and through explicit [`PermutationChromosome::is_valid`]
//! calls. The crossover hot path trusts its caller.
//!
//! [`Arc`]: std::sync::Arc

mod chromosome;
mod population;
mod types;

pub use chromosome::PermutationChromosome;
pub use population::{Genotype, Individual, Population};
pub use types::{AlleleUniverse, InvalidGenotypeError, PermutationGene};
