//! Finder configuration.

use crate::error::{Error, Result};
use crate::ga::{GaConfig, Selection};

/// Search parameters for [`OptimalLocationsFinder`](super::OptimalLocationsFinder).
///
/// # Defaults
///
/// ```
/// use u_geoselect::locations::FinderConfig;
///
/// let config = FinderConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.generations, 15);
/// assert_eq!(config.tournament_size, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinderConfig {
    /// Individuals per generation.
    pub population_size: usize,

    /// Generations to run. The search never stops early.
    pub generations: usize,

    /// Probability that a parent pair is recombined.
    pub crossover_probability: f64,

    /// Probability that an offspring is mutated.
    pub mutation_probability: f64,

    /// Per-gene swap probability inside a mutation.
    pub gene_swap_probability: f64,

    pub tournament_size: usize,

    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,

    /// Score a generation on the rayon pool (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            population_size: 500,
            generations: 15,
            crossover_probability: 0.3,
            mutation_probability: 0.1,
            gene_swap_probability: 0.1,
            tournament_size: 5,
            seed: None,
            parallel: true,
        }
    }
}

impl FinderConfig {
    /// Smaller budget for interactive use: 100 individuals, 10 generations.
    pub fn quick() -> Self {
        Self {
            population_size: 100,
            generations: 10,
            ..Self::default()
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_gene_swap_probability(mut self, p: f64) -> Self {
        self.gene_swap_probability = p.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("crossover_probability", self.crossover_probability),
            ("mutation_probability", self.mutation_probability),
            ("gene_swap_probability", self.gene_swap_probability),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        self.to_ga_config().validate()
    }

    /// The equivalent generic GA configuration.
    pub fn to_ga_config(&self) -> GaConfig {
        let mut config = GaConfig::default()
            .with_population_size(self.population_size)
            .with_max_generations(self.generations)
            .with_selection(Selection::Tournament(self.tournament_size))
            .with_elite_ratio(0.0)
            .with_crossover_rate(self.crossover_probability)
            .with_mutation_rate(self.mutation_probability)
            .with_hall_of_fame_size(1)
            .with_parallel(self.parallel);
        config.seed = self.seed;
        config
    }
}
