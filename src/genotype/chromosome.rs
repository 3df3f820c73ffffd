//! Permutation chromosome: an ordered gene sequence that is a bijection
//! onto its allele universe.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{AlleleUniverse, InvalidGenotypeError, PermutationGene};

/// An ordered sequence of genes in which every allele of the shared
/// universe appears exactly once.
///
/// Construction validates the invariant eagerly; afterwards the chromosome
/// is only mutated through [`genes_mut`](Self::genes_mut) by the crossover
/// operator, which preserves it for valid inputs. [`is_valid`](Self::is_valid)
/// re-checks the invariant in O(L) when a caller wants certainty.
///
/// Equality is structural and position-wise: a permutation and its reverse
/// are distinct chromosomes.
///
/// # Examples
///
/// ```
/// use permux::genotype::{AlleleUniverse, PermutationChromosome};
/// use permux::random::create_rng;
///
/// let universe = AlleleUniverse::integers(8).unwrap();
/// let chromosome = PermutationChromosome::random(&universe, &mut create_rng(42));
/// assert!(chromosome.is_valid());
/// assert_eq!(chromosome.len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct PermutationChromosome<T> {
    genes: Vec<PermutationGene<T>>,
}

impl<T> PermutationChromosome<T> {
    /// Creates a chromosome from an explicit gene sequence, validating the
    /// permutation invariant.
    ///
    /// # Errors
    ///
    /// - [`InvalidGenotypeError::Empty`] for an empty sequence
    /// - [`InvalidGenotypeError::UniverseMismatch`] if the genes do not all
    ///   share one universe
    /// - [`InvalidGenotypeError::LengthMismatch`] if the gene count differs
    ///   from the universe size
    /// - [`InvalidGenotypeError::UnknownAllele`] for an out-of-universe gene
    /// - [`InvalidGenotypeError::DuplicateAllele`] if an allele repeats
    pub fn new(genes: Vec<PermutationGene<T>>) -> Result<Self, InvalidGenotypeError> {
        if genes.is_empty() {
            return Err(InvalidGenotypeError::Empty);
        }
        let universe = Arc::clone(genes[0].universe());
        for (position, gene) in genes.iter().enumerate() {
            if !Arc::ptr_eq(gene.universe(), &universe) {
                return Err(InvalidGenotypeError::UniverseMismatch { position });
            }
        }
        if genes.len() != universe.len() {
            return Err(InvalidGenotypeError::LengthMismatch {
                expected: universe.len(),
                actual: genes.len(),
            });
        }
        let mut seen = vec![false; universe.len()];
        for (position, gene) in genes.iter().enumerate() {
            let index = gene.allele_index();
            if index >= universe.len() {
                return Err(InvalidGenotypeError::UnknownAllele { position });
            }
            if seen[index] {
                return Err(InvalidGenotypeError::DuplicateAllele { position });
            }
            seen[index] = true;
        }
        Ok(Self { genes })
    }

    /// Creates a chromosome from allele values in the given order.
    ///
    /// Each value is looked up in `universe`, then the resulting gene
    /// sequence is validated as in [`new`](Self::new).
    pub fn from_alleles(
        universe: &Arc<AlleleUniverse<T>>,
        alleles: &[T],
    ) -> Result<Self, InvalidGenotypeError>
    where
        T: PartialEq,
    {
        let genes = alleles
            .iter()
            .enumerate()
            .map(|(position, allele)| {
                PermutationGene::of_allele(allele, universe)
                    .ok_or(InvalidGenotypeError::UnknownAllele { position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(genes)
    }

    /// Creates a uniformly shuffled permutation over `universe`.
    pub fn random<R: Rng>(universe: &Arc<AlleleUniverse<T>>, rng: &mut R) -> Self {
        let mut indices: Vec<usize> = (0..universe.len()).collect();
        indices.shuffle(rng);
        let genes = indices
            .into_iter()
            .map(|index| PermutationGene::new(index, Arc::clone(universe)))
            .collect();
        Self { genes }
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false`: construction rejects empty chromosomes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The allele universe shared by all genes of this chromosome.
    pub fn universe(&self) -> &Arc<AlleleUniverse<T>> {
        self.genes[0].universe()
    }

    /// Read access to the gene sequence.
    pub fn genes(&self) -> &[PermutationGene<T>] {
        &self.genes
    }

    /// Mutable access to the gene sequence, for in-place recombination.
    ///
    /// The caller is responsible for restoring the permutation invariant;
    /// the crossover operator does so for all valid inputs.
    pub fn genes_mut(&mut self) -> &mut [PermutationGene<T>] {
        &mut self.genes
    }

    /// `true` iff every allele of the universe appears exactly once.
    ///
    /// A single presence-marking pass over the universe's index space, O(L).
    pub fn is_valid(&self) -> bool {
        let universe_size = self.universe().len();
        if self.genes.len() != universe_size {
            return false;
        }
        let mut seen = vec![false; universe_size];
        for gene in &self.genes {
            let index = gene.allele_index();
            if index >= universe_size || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }

    /// Read-only projection onto the allele values, in gene order.
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.genes.iter().map(|gene| gene.allele().clone()).collect()
    }
}

impl<T: PartialEq> PartialEq for PermutationChromosome<T> {
    fn eq(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

impl<T: Eq> Eq for PermutationChromosome<T> {}
