//! The alterer contract.

use rand::Rng;

use crate::genotype::Population;

/// A policy that probabilistically applies a variation operator across a
/// population and reports how much was changed.
///
/// Alterers are stateless between calls: all configuration lives in the
/// implementing value and all randomness comes from the caller-supplied
/// [`Rng`], so a seeded generator reproduces identical alteration
/// sequences.
pub trait Alterer<T> {
    /// Applies the operator to `population` once.
    ///
    /// For each eligible unit an independent Bernoulli trial with success
    /// probability [`probability`](Self::probability) decides whether the
    /// operator is invoked. The return value is the total alteration
    /// count; its distribution is fixed by the implementing operator so
    /// that [`expected_alteration_count`] holds.
    ///
    /// `generation` is passed through for operators whose randomness or
    /// behavior depends on the algorithm iteration.
    fn alter<R: Rng>(
        &self,
        population: &mut Population<T>,
        generation: usize,
        rng: &mut R,
    ) -> usize;

    /// Per-unit application probability in `[0, 1]`.
    fn probability(&self) -> f64;
}

/// Expected value of the count returned by [`Alterer::alter`].
///
/// Each of the `population_size` individuals independently triggers a
/// recombination with probability `probability`, and each trigger performs
/// `order` crossover events, so the count is an `order`-scaled binomial
/// with mean `order * population_size * probability` and variance
/// `order^2 * population_size * probability * (1 - probability)`.
pub fn expected_alteration_count(
    order: usize,
    population_size: usize,
    probability: f64,
) -> f64 {
    order as f64 * population_size as f64 * probability
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_alteration_count() {
        assert_eq!(expected_alteration_count(1, 100, 0.5), 50.0);
        assert_eq!(expected_alteration_count(3, 100, 0.5), 150.0);
        assert_eq!(expected_alteration_count(2, 0, 0.9), 0.0);
        assert_eq!(expected_alteration_count(1, 80, 0.0), 0.0);
        assert_eq!(expected_alteration_count(1, 80, 1.0), 80.0);
    }
}
