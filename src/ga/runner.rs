//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! replacement, repeated for a fixed number of generations.

use super::config::GaConfig;
use super::hall_of_fame::HallOfFame;
use super::stats::GenerationStats;
use super::types::{Fitness, GaProblem, Individual};
use crate::error::{Error, Result};
use crate::random::rng_from_option;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run (hall of fame champion).
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: I::Fitness,

    /// All hall of fame members, fittest first. `hall_of_fame[0]`
    /// is `best`.
    pub hall_of_fame: Vec<I>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Champion fitness after the initial population and after each
    /// generation. Never decreases.
    pub fitness_history: Vec<f64>,

    /// Population statistics for the initial population and each generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization for exactly `config.max_generations`
    /// generations.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA will
    /// stop before the next generation starts and return the best
    /// solution found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        let mut rng = rng_from_option(config.seed);
        let elite_count = config.elite_count();

        // 1. Initialize and evaluate
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        let evaluations = evaluate_population(problem, &mut population, config.parallel);

        let mut hall_of_fame = HallOfFame::new(config.hall_of_fame_size);
        hall_of_fame.update(&population);

        let mut history = Vec::with_capacity(config.max_generations + 1);
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        let stats = GenerationStats::compute(0, evaluations, &population);
        log_generation(&stats);
        history.push(stats);
        fitness_history.push(champion_fitness(&hall_of_fame));

        let mut generations = 0;
        let mut cancelled = false;

        // 2. Evolutionary loop
        for gen in 1..=config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let mut next_gen = elites(&population, elite_count);

            let parents = config.selection.select_many(
                &population,
                config.population_size - elite_count,
                &mut rng,
            );
            let mut offspring: Vec<P::Individual> =
                parents.into_iter().map(|i| population[i].clone()).collect();
            vary(problem, &mut offspring, config, &mut rng);

            let evaluations = evaluate_population(problem, &mut offspring, config.parallel);
            next_gen.extend(offspring);
            population = next_gen;

            if hall_of_fame.update(&population) {
                tracing::trace!(
                    generation = gen,
                    fitness = champion_fitness(&hall_of_fame),
                    "new champion"
                );
            }

            let stats = GenerationStats::compute(gen, evaluations, &population);
            log_generation(&stats);
            history.push(stats);
            fitness_history.push(champion_fitness(&hall_of_fame));
            generations = gen;

            if let Some(best) = hall_of_fame.best() {
                problem.on_generation(gen, best.fitness());
            }
        }

        let members = hall_of_fame.members().to_vec();
        let best = hall_of_fame
            .into_best()
            .ok_or_else(|| Error::InvalidConfig("population produced no evaluated individual".into()))?;

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            hall_of_fame: members,
            generations,
            cancelled,
            fitness_history,
            history,
        })
    }
}

/// Copies of the `count` fittest individuals.
fn elites<I: Individual>(population: &[I], count: usize) -> Vec<I> {
    if count == 0 {
        return Vec::with_capacity(population.len());
    }
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| {
        population[b]
            .fitness()
            .partial_cmp(&population[a].fitness())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut kept = Vec::with_capacity(population.len());
    kept.extend(order.into_iter().take(count).map(|i| population[i].clone()));
    kept
}

/// Crossover on consecutive pairs, then mutation on each offspring.
fn vary<P: GaProblem, R: Rng>(
    problem: &P,
    offspring: &mut [P::Individual],
    config: &GaConfig,
    rng: &mut R,
) {
    for i in (1..offspring.len()).step_by(2) {
        if rng.random::<f64>() < config.crossover_rate {
            let children = problem.crossover(&offspring[i - 1], &offspring[i], rng);
            for (slot, mut child) in [i - 1, i].into_iter().zip(children) {
                child.invalidate();
                offspring[slot] = child;
            }
        }
    }

    for ind in offspring.iter_mut() {
        if rng.random::<f64>() < config.mutation_rate {
            problem.mutate(ind, rng);
            ind.invalidate();
        }
    }
}

/// Evaluates every individual whose fitness is stale. Returns how many
/// evaluations were performed.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) -> usize {
    let stale = population.iter().filter(|ind| !ind.is_evaluated()).count();
    evaluate_stale(problem, population, parallel);
    stale
}

#[cfg(feature = "parallel")]
fn evaluate_stale<P: GaProblem>(problem: &P, population: &mut [P::Individual], parallel: bool) {
    if parallel {
        population
            .par_iter_mut()
            .filter(|ind| !ind.is_evaluated())
            .for_each(|ind| {
                let f = problem.evaluate(ind);
                ind.set_fitness(f);
            });
    } else {
        evaluate_sequential(problem, population);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_stale<P: GaProblem>(problem: &P, population: &mut [P::Individual], _parallel: bool) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut().filter(|ind| !ind.is_evaluated()) {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

fn champion_fitness<I: Individual>(hall_of_fame: &HallOfFame<I>) -> f64 {
    hall_of_fame
        .best()
        .map(|b| b.fitness().to_f64())
        .unwrap_or(f64::NEG_INFINITY)
}

fn log_generation(stats: &GenerationStats) {
    tracing::debug!(
        gen = stats.generation,
        nevals = stats.evaluations,
        avg = stats.mean,
        std = stats.std,
        min = stats.min,
        max = stats.max,
        "generation complete"
    );
}

// ============================================================================
// Tests
// ============================================================================
