//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, selection strategy, operator rates,
/// the generation budget, and parallelism. The loop always runs exactly
/// `max_generations` generations unless cancelled.
///
/// # Defaults
///
/// ```
/// use u_geoselect::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_geoselect::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_crossover_rate(0.3)
///     .with_mutation_rate(0.1);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of individuals in the population. Fixed across generations.
    pub population_size: usize,

    /// Number of generations to run.
    pub max_generations: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0).
    ///
    /// Defaults to 0.0: offspring replace the whole population and only the
    /// hall of fame remembers the best individual.
    pub elite_ratio: f64,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Capacity of the hall of fame.
    pub hall_of_fame_size: usize,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 100,
            selection: Selection::default(),
            elite_ratio: 0.0,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            hall_of_fame_size: 1,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the hall of fame capacity.
    pub fn with_hall_of_fame_size(mut self, n: usize) -> Self {
        self.hall_of_fame_size = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites implied by `elite_ratio`.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(Error::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.elite_count() >= self.population_size {
            return Err(Error::InvalidConfig(
                "elite_ratio too high: elites fill entire population".into(),
            ));
        }
        if self.hall_of_fame_size == 0 {
            return Err(Error::InvalidConfig(
                "hall_of_fame_size must be at least 1".into(),
            ));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(Error::InvalidConfig(
                "tournament size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 100);
        assert_eq!(config.selection, Selection::Tournament(3));
        assert!((config.elite_ratio - 0.0).abs() < 1e-15);
        assert!((config.crossover_rate - 0.9).abs() < 1e-10);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.hall_of_fame_size, 1);
        assert!(config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(200)
            .with_max_generations(15)
            .with_selection(Selection::Rank)
            .with_elite_ratio(0.2)
            .with_crossover_rate(0.3)
            .with_mutation_rate(0.05)
            .with_hall_of_fame_size(3)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 200);
        assert_eq!(config.max_generations, 15);
        assert_eq!(config.selection, Selection::Rank);
        assert!((config.elite_ratio - 0.2).abs() < 1e-10);
        assert!((config.crossover_rate - 0.3).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.hall_of_fame_size, 3);
        assert_eq!(config.elite_count(), 40);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elite_too_high() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_ratio(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        let config = GaConfig::default().with_tournament_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_hall_of_fame() {
        let config = GaConfig::default().with_hall_of_fame_size(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_elite_ratio(1.5)
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);

        assert!((config.elite_ratio - 1.0).abs() < 1e-10);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_with_tournament_size() {
        let config = GaConfig::default().with_tournament_size(5);
        assert_eq!(config.selection, Selection::Tournament(5));
    }
}
