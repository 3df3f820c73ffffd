//! Individuals and index-addressable populations.
//!
//! The alterer layer needs exactly three things from population storage:
//! a size, per-individual chromosome access by stable index, and exclusive
//! mutable access to the two slots a recombination touches. The borrow
//! checker enforces the two-slot exclusivity through
//! [`Population::pair_mut`].

use super::chromosome::PermutationChromosome;
use super::types::InvalidGenotypeError;

/// One or more permutation chromosomes forming a complete genome.
#[derive(Debug, Clone, PartialEq)]
pub struct Genotype<T> {
    chromosomes: Vec<PermutationChromosome<T>>,
}

impl<T> Genotype<T> {
    /// Creates a genotype from its chromosomes.
    ///
    /// # Errors
    ///
    /// [`InvalidGenotypeError::Empty`] when no chromosomes are given.
    pub fn new(
        chromosomes: Vec<PermutationChromosome<T>>,
    ) -> Result<Self, InvalidGenotypeError> {
        if chromosomes.is_empty() {
            return Err(InvalidGenotypeError::Empty);
        }
        Ok(Self { chromosomes })
    }

    /// Number of chromosomes.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// Always `false`: construction rejects empty genotypes.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// All chromosomes.
    pub fn chromosomes(&self) -> &[PermutationChromosome<T>] {
        &self.chromosomes
    }

    /// The chromosome at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn chromosome(&self, index: usize) -> &PermutationChromosome<T> {
        &self.chromosomes[index]
    }

    /// Mutable access to the chromosome at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn chromosome_mut(&mut self, index: usize) -> &mut PermutationChromosome<T> {
        &mut self.chromosomes[index]
    }

    /// `true` iff every chromosome satisfies the permutation invariant.
    pub fn is_valid(&self) -> bool {
        self.chromosomes.iter().all(PermutationChromosome::is_valid)
    }
}

/// A candidate solution: a genotype plus its evaluated fitness, if any.
///
/// Fitness evaluation itself happens outside this crate; the slot exists
/// so that alteration can drop a stale value. After a crossover touches an
/// individual, [`fitness`](Self::fitness) returns `None` until the
/// enclosing loop re-evaluates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<T> {
    genotype: Genotype<T>,
    fitness: Option<f64>,
}

impl<T> Individual<T> {
    /// Creates an unevaluated individual.
    pub fn new(genotype: Genotype<T>) -> Self {
        Self {
            genotype,
            fitness: None,
        }
    }

    /// The genotype.
    pub fn genotype(&self) -> &Genotype<T> {
        &self.genotype
    }

    /// Mutable access to the genotype.
    pub fn genotype_mut(&mut self) -> &mut Genotype<T> {
        &mut self.genotype
    }

    /// The evaluated fitness, or `None` if not (re-)evaluated yet.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Stores an evaluated fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Drops a stale fitness after the genotype was altered.
    pub fn clear_fitness(&mut self) {
        self.fitness = None;
    }
}

/// An ordered, index-addressable collection of individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Population<T> {
    individuals: Vec<Individual<T>>,
}

impl<T> Population<T> {
    /// Creates a population from its individuals. May be empty.
    pub fn new(individuals: Vec<Individual<T>>) -> Self {
        Self { individuals }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// `true` iff the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individual at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Individual<T>> {
        self.individuals.get(index)
    }

    /// Mutable access to the individual at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Individual<T>> {
        self.individuals.get_mut(index)
    }

    /// Iterates over the individuals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Individual<T>> {
        self.individuals.iter()
    }

    /// Exclusive mutable access to two distinct slots at once.
    ///
    /// This is the access pattern one recombination needs: the alterer
    /// takes temporary ownership of exactly the two individuals it is
    /// about to mutate, and the borrow checker guarantees nothing else
    /// references them mid-call.
    ///
    /// # Panics
    ///
    /// Panics if `first == second` or either index is out of range.
    pub fn pair_mut(
        &mut self,
        first: usize,
        second: usize,
    ) -> (&mut Individual<T>, &mut Individual<T>) {
        assert_ne!(first, second, "pair_mut requires two distinct indices");
        if first < second {
            let (head, tail) = self.individuals.split_at_mut(second);
            (&mut head[first], &mut tail[0])
        } else {
            let (head, tail) = self.individuals.split_at_mut(first);
            (&mut tail[0], &mut head[second])
        }
    }
}
