//! Allele universe and gene types.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

use thiserror::Error;

/// Error raised when a genotype component fails eager validation.
///
/// Raised only at universe or chromosome construction time. The crossover
/// operator itself never returns these; malformed inputs on the hot path
/// degrade to a no-op instead (see the alterer module).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidGenotypeError {
    /// The allele or gene sequence was empty.
    #[error("genotype must contain at least one allele")]
    Empty,

    /// The gene count does not match the shared allele-universe size.
    #[error("gene count {actual} does not match allele universe size {expected}")]
    LengthMismatch {
        /// Size of the shared allele universe.
        expected: usize,
        /// Number of genes supplied.
        actual: usize,
    },

    /// A gene references a different allele universe than its siblings.
    #[error("gene at position {position} belongs to a different allele universe")]
    UniverseMismatch {
        /// Position of the offending gene.
        position: usize,
    },

    /// An allele is not a member of the allele universe.
    #[error("allele at position {position} is not a member of the allele universe")]
    UnknownAllele {
        /// Position of the offending allele.
        position: usize,
    },

    /// An allele occurs more than once in the sequence.
    #[error("allele at position {position} occurs more than once")]
    DuplicateAllele {
        /// Position of the second occurrence.
        position: usize,
    },
}

/// An ordered, immutable sequence of distinct alleles.
///
/// Every permutation chromosome is a bijection onto one universe, and all
/// genes derived from a universe share it by reference ([`Arc`]), so a
/// population over `0..1000` holds the allele storage once.
///
/// # Examples
///
/// ```
/// use permux::genotype::AlleleUniverse;
///
/// let cities = AlleleUniverse::new(vec!["wien", "linz", "graz"]).unwrap();
/// assert_eq!(cities.len(), 3);
/// assert_eq!(cities.index_of(&"linz"), Some(1));
/// ```
#[derive(Debug)]
pub struct AlleleUniverse<T> {
    alleles: Vec<T>,
}

impl<T> AlleleUniverse<T> {
    /// Creates a universe from an ordered allele sequence.
    ///
    /// # Errors
    ///
    /// [`InvalidGenotypeError::Empty`] for an empty sequence,
    /// [`InvalidGenotypeError::DuplicateAllele`] if any value repeats.
    pub fn new(alleles: Vec<T>) -> Result<Arc<Self>, InvalidGenotypeError>
    where
        T: Eq + Hash,
    {
        if alleles.is_empty() {
            return Err(InvalidGenotypeError::Empty);
        }
        let mut seen = HashSet::with_capacity(alleles.len());
        for (position, allele) in alleles.iter().enumerate() {
            if !seen.insert(allele) {
                return Err(InvalidGenotypeError::DuplicateAllele { position });
            }
        }
        Ok(Arc::new(Self { alleles }))
    }

    /// Number of alleles in the universe.
    pub fn len(&self) -> usize {
        self.alleles.len()
    }

    /// Always `false`: construction rejects empty universes.
    pub fn is_empty(&self) -> bool {
        self.alleles.is_empty()
    }

    /// The allele at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.alleles.get(index)
    }

    /// All alleles in universe order.
    pub fn alleles(&self) -> &[T] {
        &self.alleles
    }

    /// Position of `allele` within the universe, if it is a member.
    ///
    /// Linear scan; intended for construction-time lookups only. The
    /// crossover hot path works on gene indices and never calls this.
    pub fn index_of(&self, allele: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.alleles.iter().position(|a| a == allele)
    }
}

impl AlleleUniverse<usize> {
    /// Convenience universe of the integers `0..len`.
    ///
    /// # Errors
    ///
    /// [`InvalidGenotypeError::Empty`] when `len == 0`.
    pub fn integers(len: usize) -> Result<Arc<Self>, InvalidGenotypeError> {
        if len == 0 {
            return Err(InvalidGenotypeError::Empty);
        }
        Ok(Arc::new(Self {
            alleles: (0..len).collect(),
        }))
    }
}

/// A single positioned allele plus a reference to its allele universe.
///
/// The gene stores the allele's *index* within the universe rather than
/// the allele value itself. Index storage is what makes the chromosome
/// validity check a single presence-marking pass and keeps crossover
/// conflict resolution free of hashing or scanning.
#[derive(Debug, Clone)]
pub struct PermutationGene<T> {
    allele_index: usize,
    universe: Arc<AlleleUniverse<T>>,
}

impl<T> PermutationGene<T> {
    /// Creates a gene from a raw allele index.
    ///
    /// The index is not checked here; an out-of-range index yields a gene
    /// for which [`is_valid`](Self::is_valid) returns `false`.
    pub fn new(allele_index: usize, universe: Arc<AlleleUniverse<T>>) -> Self {
        Self {
            allele_index,
            universe,
        }
    }

    /// Creates a gene by looking up `allele` in `universe`.
    ///
    /// Returns `None` if the allele is not a member of the universe.
    pub fn of_allele(allele: &T, universe: &Arc<AlleleUniverse<T>>) -> Option<Self>
    where
        T: PartialEq,
    {
        universe.index_of(allele).map(|allele_index| Self {
            allele_index,
            universe: Arc::clone(universe),
        })
    }

    /// The allele value this gene carries.
    ///
    /// # Panics
    ///
    /// Panics if the gene was built with an out-of-range index. Check
    /// [`is_valid`](Self::is_valid) first when the origin of the gene is
    /// not trusted.
    pub fn allele(&self) -> &T {
        &self.universe.alleles[self.allele_index]
    }

    /// Index of the allele within its universe.
    pub fn allele_index(&self) -> usize {
        self.allele_index
    }

    /// The universe this gene draws from.
    pub fn universe(&self) -> &Arc<AlleleUniverse<T>> {
        &self.universe
    }

    /// `true` iff the allele is a member of its universe.
    pub fn is_valid(&self) -> bool {
        self.allele_index < self.universe.len()
    }
}

/// Two genes are equal iff their alleles are equal.
///
/// When both genes share the same universe this is an index comparison;
/// across distinct universes the allele values are compared.
impl<T: PartialEq> PartialEq for PermutationGene<T> {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.universe, &other.universe) {
            self.allele_index == other.allele_index
        } else {
            self.universe.get(self.allele_index) == other.universe.get(other.allele_index)
        }
    }
}

impl<T: Eq> Eq for PermutationGene<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- AlleleUniverse ----

    #[test]
    fn test_universe_rejects_empty() {
        assert_eq!(
            AlleleUniverse::<u32>::new(vec![]).unwrap_err(),
            InvalidGenotypeError::Empty
        );
        assert_eq!(
            AlleleUniverse::integers(0).unwrap_err(),
            InvalidGenotypeError::Empty
        );
    }

    #[test]
    fn test_universe_rejects_duplicates() {
        let err = AlleleUniverse::new(vec![1, 2, 3, 2]).unwrap_err();
        assert_eq!(err, InvalidGenotypeError::DuplicateAllele { position: 3 });
    }

    #[test]
    fn test_universe_lookup() {
        let universe = AlleleUniverse::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(universe.len(), 3);
        assert_eq!(universe.get(1), Some(&'b'));
        assert_eq!(universe.get(3), None);
        assert_eq!(universe.index_of(&'c'), Some(2));
        assert_eq!(universe.index_of(&'z'), None);
    }

    #[test]
    fn test_integers_universe() {
        let universe = AlleleUniverse::integers(5).unwrap();
        assert_eq!(universe.alleles(), &[0, 1, 2, 3, 4]);
    }

    // ---- PermutationGene ----

    #[test]
    fn test_gene_of_allele() {
        let universe = AlleleUniverse::new(vec![10, 20, 30]).unwrap();
        let gene = PermutationGene::of_allele(&20, &universe).unwrap();
        assert_eq!(gene.allele_index(), 1);
        assert_eq!(*gene.allele(), 20);
        assert!(gene.is_valid());

        assert!(PermutationGene::of_allele(&99, &universe).is_none());
    }

    #[test]
    fn test_gene_out_of_range_is_invalid() {
        let universe = AlleleUniverse::integers(3).unwrap();
        let gene = PermutationGene::new(7, universe);
        assert!(!gene.is_valid());
    }

    #[test]
    fn test_gene_equality_same_universe() {
        let universe = AlleleUniverse::integers(4).unwrap();
        let a = PermutationGene::new(2, Arc::clone(&universe));
        let b = PermutationGene::new(2, Arc::clone(&universe));
        let c = PermutationGene::new(3, universe);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_gene_equality_across_universes() {
        // Same allele values, distinct universe allocations.
        let first = AlleleUniverse::new(vec![5, 6, 7]).unwrap();
        let second = AlleleUniverse::new(vec![7, 6, 5]).unwrap();
        let a = PermutationGene::of_allele(&6, &first).unwrap();
        let b = PermutationGene::of_allele(&6, &second).unwrap();
        let c = PermutationGene::of_allele(&7, &second).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_error_display() {
        let err = InvalidGenotypeError::LengthMismatch {
            expected: 10,
            actual: 7,
        };
        assert_eq!(
            err.to_string(),
            "gene count 7 does not match allele universe size 10"
        );
    }
}
