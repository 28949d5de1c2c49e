//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Different strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Fitness, Individual};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_geoselect::ga::Selection;
///
/// // Tournament with size 5
/// let sel = Selection::Tournament(5);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: pick `k` individuals uniformly at random
    /// (with replacement), select the fittest.
    ///
    /// Higher `k` = stronger selection pressure.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Weights are shifted by the population minimum so that negative
    /// fitness values (penalties) still yield non-negative weights.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,

    /// Rank-based selection.
    ///
    /// Individuals are sorted by fitness and selection probability is
    /// proportional to rank position, not raw fitness value.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per selection
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }

    /// Selects `count` parent indices.
    pub fn select_many<I: Individual, R: Rng>(
        &self,
        population: &[I],
        count: usize,
        rng: &mut R,
    ) -> Vec<usize> {
        (0..count).map(|_| self.select(population, rng)).collect()
    }
}

fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() > population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// weight_i = fitness_i - min_fitness + epsilon
fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let fitnesses: Vec<f64> = population
        .iter()
        .map(|ind| ind.fitness().to_f64())
        .collect();

    let min_fitness = fitnesses
        .iter()
        .copied()
        .filter(|f| f.is_finite())
        .fold(f64::INFINITY, f64::min);
    if !min_fitness.is_finite() {
        return rng.random_range(0..n);
    }

    let epsilon = 1e-10;
    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| {
            if f.is_finite() {
                f - min_fitness + epsilon
            } else {
                epsilon
            }
        })
        .collect();

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1
}

/// Linear ranking: the fittest individual gets weight `n`, the least fit `1`.
fn rank<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut indexed: Vec<(usize, f64)> = population
        .iter()
        .enumerate()
        .map(|(i, ind)| (i, ind.fitness().to_f64()))
        .collect();
    indexed.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    let total: f64 = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;

    for (rank, &(original_idx, _)) in indexed.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return original_idx;
        }
    }

    indexed[n - 1].0
}
