//! Permutation-encoded variation operators for evolutionary computation.
//!
//! This crate provides the recombination layer of a permutation-based
//! genetic algorithm:
//!
//! - **Genotype model**: an [`AlleleUniverse`](genotype::AlleleUniverse)
//!   shared by reference across all derived genes, index-backed
//!   [`PermutationGene`](genotype::PermutationGene)s, and
//!   [`PermutationChromosome`](genotype::PermutationChromosome)s that
//!   uphold the bijection invariant: every allele of the universe appears
//!   exactly once.
//! - **Partially matched crossover (PMX)**: segment exchange between two
//!   permutations with mapping-chain conflict resolution, preserving
//!   validity for every choice of cut points.
//! - **Alterer contract**: a probability-driven policy that applies a
//!   variation operator across a [`Population`](genotype::Population) and
//!   reports how much was changed, with a closed-form expected alteration
//!   count for statistical validation.
//!
//! Selection strategies, fitness evaluation, and the surrounding
//! evolutionary loop are deliberately not part of this crate; it consumes
//! an index-addressable population and a caller-supplied [`rand::Rng`],
//! and exposes nothing but in-process APIs.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), *Alleles, Loci, and the Traveling Salesman
//!   Problem*
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, ch. 4

pub mod alterer;
pub mod genotype;
pub mod random;
