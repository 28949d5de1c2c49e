//! Location subset selection expressed as a [`GaProblem`].

use super::fitness::DispersionFitness;
use crate::ga::operators::{sample_indices, shuffle_indexes_mutation, two_point_crossover};
use crate::ga::{GaProblem, Individual};
use rand::Rng;

/// A candidate subset: `k` indices into the candidate table plus a cached
/// score.
///
/// Indices are meant to be distinct, but crossover and mutation do not
/// enforce it; repeated indices are only penalized by the fitness.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationGenome {
    indices: Vec<usize>,
    fitness: Option<f64>,
}

impl LocationGenome {
    /// An unevaluated genome over `indices`.
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            fitness: None,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }
}

impl Individual for LocationGenome {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness.unwrap_or(f64::NEG_INFINITY)
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    fn invalidate(&mut self) {
        self.fitness = None;
    }

    fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }
}

/// Picks `subset_size` of the candidates, maximizing [`DispersionFitness`].
pub struct DispersionProblem<'a> {
    fitness: DispersionFitness<'a>,
    subset_size: usize,
    gene_swap_probability: f64,
}

impl<'a> DispersionProblem<'a> {
    /// `subset_size` must not exceed the number of candidates.
    pub fn new(fitness: DispersionFitness<'a>, subset_size: usize, gene_swap_probability: f64) -> Self {
        Self {
            fitness,
            subset_size,
            gene_swap_probability,
        }
    }
}

impl GaProblem for DispersionProblem<'_> {
    type Individual = LocationGenome;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> LocationGenome {
        let n = self.fitness.candidates().count();
        LocationGenome::new(sample_indices(n, self.subset_size, rng))
    }

    fn evaluate(&self, individual: &LocationGenome) -> f64 {
        self.fitness.evaluate(individual.indices())
    }

    fn crossover<R: Rng>(
        &self,
        parent1: &LocationGenome,
        parent2: &LocationGenome,
        rng: &mut R,
    ) -> Vec<LocationGenome> {
        let (a, b) = two_point_crossover(parent1.indices(), parent2.indices(), rng);
        vec![LocationGenome::new(a), LocationGenome::new(b)]
    }

    fn mutate<R: Rng>(&self, individual: &mut LocationGenome, rng: &mut R) {
        shuffle_indexes_mutation(&mut individual.indices, self.gene_swap_probability, rng);
    }
}
