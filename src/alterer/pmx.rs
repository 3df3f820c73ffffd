//! Partially matched crossover (PMX) for permutation genotypes.
//!
//! PMX recombines two permutations by exchanging a contiguous gene
//! segment and repairing the duplicate alleles this creates outside the
//! segment. Each duplicate is resolved by following the mapping chain
//! through the transplanted segment until an allele is reached that the
//! segment does not contain, so both offspring keep the transplanted
//! segment intact and remain valid permutations for every choice of cut
//! points.
//!
//! # Complexity
//!
//! O(L) per crossover event: conflict lookup goes through an explicit
//! allele-index to segment-slot table rebuilt per call, never through
//! repeated scans of the gene sequence.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), *Alleles, Loci, and the Traveling Salesman
//!   Problem*

use log::{debug, trace};
use rand::Rng;

use super::types::Alterer;
use crate::genotype::{PermutationGene, Population};

/// Partially matched crossover over permutation-encoded populations.
///
/// Carries the per-individual application probability used by
/// [`Alterer::alter`] and the *order*, the number of crossover events
/// attempted per selected pairing. The order feeds the expected
/// alteration count (`order * population_size * probability`); it does
/// not change the per-event algorithm.
///
/// # Examples
///
/// ```
/// use permux::alterer::{Alterer, PartiallyMatchedCrossover};
/// use permux::genotype::{AlleleUniverse, Genotype, Individual, Population};
/// use permux::genotype::PermutationChromosome;
/// use permux::random::create_rng;
///
/// let universe = AlleleUniverse::integers(16).unwrap();
/// let mut rng = create_rng(42);
/// let individuals = (0..10)
///     .map(|_| {
///         let chromosome = PermutationChromosome::random(&universe, &mut rng);
///         Individual::new(Genotype::new(vec![chromosome]).unwrap())
///     })
///     .collect();
/// let mut population = Population::new(individuals);
///
/// let crossover = PartiallyMatchedCrossover::new(0.3);
/// let altered = crossover.alter(&mut population, 1, &mut rng);
/// assert!(altered <= population.len());
/// assert!(population.iter().all(|ind| ind.genotype().is_valid()));
/// ```
#[derive(Debug, Clone)]
pub struct PartiallyMatchedCrossover {
    probability: f64,
    order: usize,
}

impl PartiallyMatchedCrossover {
    /// Creates the operator with the given application probability,
    /// clamped to `[0, 1]`, and order 1.
    pub fn new(probability: f64) -> Self {
        Self {
            probability: probability.clamp(0.0, 1.0),
            order: 1,
        }
    }

    /// Sets the number of crossover events per selected pairing
    /// (floored at 1).
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order.max(1);
        self
    }

    /// Number of crossover events attempted per selected pairing.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Performs one crossover event at uniformly random distinct cut
    /// points, mutating both gene sequences in place.
    ///
    /// Returns the number of gene positions that changed, summed over
    /// both sequences.
    ///
    /// Sequences shorter than 2 genes or of unequal length are left
    /// untouched and the call returns 0. The operator trusts its caller's
    /// population invariants rather than re-validating on every call;
    /// content-malformed input (duplicate alleles) yields an unspecified
    /// but terminating result and never touches other chromosomes.
    pub fn crossover<T, R: Rng>(
        &self,
        that: &mut [PermutationGene<T>],
        other: &mut [PermutationGene<T>],
        rng: &mut R,
    ) -> usize {
        let length = that.len();
        if length < 2 || other.len() != length {
            return 0;
        }
        let (begin, end) = cut_points(length, rng);
        self.crossover_at(that, other, begin, end)
    }

    /// Performs one crossover event at the explicit segment
    /// `[begin, end)`.
    ///
    /// Same contract as [`crossover`](Self::crossover); additionally a
    /// no-op when `begin >= end` or `end` exceeds the sequence length.
    /// `end == length` is legal and degenerates to a plain swap of the
    /// two sequences.
    pub fn crossover_at<T>(
        &self,
        that: &mut [PermutationGene<T>],
        other: &mut [PermutationGene<T>],
        begin: usize,
        end: usize,
    ) -> usize {
        let length = that.len();
        if length < 2 || other.len() != length || begin >= end || end > length {
            return 0;
        }

        let mut changed = 0;
        for position in begin..end {
            if that[position].allele_index() != other[position].allele_index() {
                changed += 2;
            }
            std::mem::swap(&mut that[position], &mut other[position]);
        }
        changed += repair(that, other, begin, end);
        changed += repair(other, that, begin, end);
        trace!("pmx segment [{begin}, {end}): {changed} gene positions changed");
        changed
    }
}

/// Two distinct cut points `begin < end`, both within `0..length`.
fn cut_points<R: Rng>(length: usize, rng: &mut R) -> (usize, usize) {
    let first = rng.random_range(0..length);
    let mut second = rng.random_range(0..length - 1);
    if second >= first {
        second += 1;
    }
    if first < second {
        (first, second)
    } else {
        (second, first)
    }
}

/// Resolves duplicate alleles outside the transplanted segment of `that`
/// by following the mapping chain through the segment.
///
/// `that[begin..end)` holds the transplanted genes; `other[begin..end)`
/// holds their counterparts (the genes `that` gave away). An outside
/// allele that also occurs inside the segment is replaced by chasing
/// counterparts until an allele not present in the segment is found.
/// Returns the number of replaced positions.
fn repair<T>(
    that: &mut [PermutationGene<T>],
    other: &[PermutationGene<T>],
    begin: usize,
    end: usize,
) -> usize {
    let universe_size = that[begin].universe().len();
    const UNUSED: usize = usize::MAX;

    // allele index -> slot of that allele inside that[begin..end)
    let mut segment_slot = vec![UNUSED; universe_size];
    for slot in begin..end {
        let index = that[slot].allele_index();
        if index < universe_size {
            segment_slot[index] = slot;
        }
    }

    let segment_length = end - begin;
    let mut changed = 0;
    for position in (0..begin).chain(end..that.len()) {
        let original = that[position].allele_index();
        let mut resolved = original;
        let mut steps = 0;
        while let Some(&slot) = segment_slot.get(resolved) {
            if slot == UNUSED {
                break;
            }
            resolved = other[slot].allele_index();
            steps += 1;
            // A valid permutation pair exits the segment within its
            // length; the bound keeps malformed input from cycling.
            if steps > segment_length {
                break;
            }
        }
        if resolved != original {
            let universe = that[position].universe().clone();
            that[position] = PermutationGene::new(resolved, universe);
            changed += 1;
        }
    }
    changed
}

impl<T> Alterer<T> for PartiallyMatchedCrossover {
    /// Recombines probabilistically selected individuals in place.
    ///
    /// Each individual index triggers independently with
    /// [`probability`](Alterer::probability); a triggered individual is
    /// paired with a uniformly chosen distinct partner, a chromosome
    /// index shared by both genotypes is drawn, and `order` crossover
    /// events are applied to that chromosome pair. Both individuals lose
    /// their evaluated fitness. The returned count grows by `order` per
    /// trigger, making [`expected_alteration_count`] exact.
    ///
    /// Populations with fewer than two individuals are never altered.
    ///
    /// [`expected_alteration_count`]: super::expected_alteration_count
    fn alter<R: Rng>(
        &self,
        population: &mut Population<T>,
        generation: usize,
        rng: &mut R,
    ) -> usize {
        let size = population.len();
        if size < 2 {
            return 0;
        }

        let mut alterations = 0;
        for first in 0..size {
            if !rng.random_bool(self.probability) {
                continue;
            }
            // Distinct partner without rejection sampling.
            let mut second = rng.random_range(0..size - 1);
            if second >= first {
                second += 1;
            }

            let (this_one, that_one) = population.pair_mut(first, second);
            let shared = this_one.genotype().len().min(that_one.genotype().len());
            let chromosome = rng.random_range(0..shared);
            for _ in 0..self.order {
                let changed = self.crossover(
                    this_one.genotype_mut().chromosome_mut(chromosome).genes_mut(),
                    that_one.genotype_mut().chromosome_mut(chromosome).genes_mut(),
                    rng,
                );
                trace!(
                    "pmx pairing ({first}, {second}) chromosome {chromosome}: \
                     {changed} gene positions changed"
                );
            }
            this_one.clear_fitness();
            that_one.clear_fitness();
            alterations += self.order;
        }
        debug!(
            "pmx alter: generation {generation}, {alterations} alterations \
             across {size} individuals"
        );
        alterations
    }

    fn probability(&self) -> f64 {
        self.probability
    }
}
