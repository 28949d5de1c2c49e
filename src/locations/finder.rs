//! Orchestrates the dispersion search over a candidate set.

use super::candidates::{CandidateSet, Location};
use super::config::FinderConfig;
use super::fitness::DispersionFitness;
use super::problem::DispersionProblem;
use crate::error::{Error, Result};
use crate::ga::{GaRunner, GenerationStats};
use tracing::instrument;

/// Everything a finder run produced.
#[derive(Debug, Clone)]
pub struct FinderOutcome {
    /// The selected rows, in champion genome order.
    pub locations: Vec<Location>,

    /// Candidate-table indices of `locations`.
    pub indices: Vec<usize>,

    /// Champion score, or `None` when no search ran because the
    /// candidate set was smaller than the requested subset.
    pub fitness: Option<f64>,

    pub generations: usize,

    /// Population statistics per generation, starting with the initial
    /// population. Empty when no search ran.
    pub history: Vec<GenerationStats>,
}

/// Selects a spatially dispersed subset of `subset_size` candidates.
///
/// # Examples
///
/// ```
/// use u_geoselect::locations::{CandidateSet, FinderConfig, OptimalLocationsFinder};
///
/// let candidates = CandidateSet::from_rows(
///     (0..10).map(|i| (0.0, i as f64, format!("station-{i}"))),
/// )?;
/// let picked = OptimalLocationsFinder::new(&candidates, 3)
///     .with_config(FinderConfig::quick().with_seed(7))
///     .find()?;
/// assert_eq!(picked.len(), 3);
/// # Ok::<(), u_geoselect::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct OptimalLocationsFinder<'a> {
    candidates: &'a CandidateSet,
    subset_size: usize,
    config: FinderConfig,
}

impl<'a> OptimalLocationsFinder<'a> {
    pub fn new(candidates: &'a CandidateSet, subset_size: usize) -> Self {
        Self {
            candidates,
            subset_size,
            config: FinderConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FinderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Runs the search and returns `min(k, n)` rows.
    ///
    /// When the candidate set holds fewer than `k` rows it is returned
    /// whole, in table order, without searching.
    ///
    /// # Errors
    /// - [`Error::EmptyCandidates`] for an empty candidate set
    /// - [`Error::InvalidSubsetSize`] for `k == 0`
    /// - [`Error::InvalidConfig`] for an invalid [`FinderConfig`]
    pub fn find(&self) -> Result<Vec<Location>> {
        self.find_with_report().map(|outcome| outcome.locations)
    }

    /// Like [`find`](Self::find), also returning the champion's score and
    /// the run's logbook.
    #[instrument(
        level = "info",
        skip(self),
        fields(candidates = self.candidates.count(), k = self.subset_size, seed = ?self.config.seed)
    )]
    pub fn find_with_report(&self) -> Result<FinderOutcome> {
        if self.candidates.is_empty() {
            return Err(Error::EmptyCandidates);
        }
        if self.subset_size == 0 {
            return Err(Error::InvalidSubsetSize { k: 0 });
        }
        self.config.validate()?;

        let n = self.candidates.count();
        if n < self.subset_size {
            tracing::debug!(n, "fewer candidates than requested, returning all");
            return Ok(FinderOutcome {
                locations: self.candidates.as_slice().to_vec(),
                indices: (0..n).collect(),
                fitness: None,
                generations: 0,
                history: Vec::new(),
            });
        }

        tracing::info!(
            population = self.config.population_size,
            generations = self.config.generations,
            "starting dispersion search"
        );

        let problem = DispersionProblem::new(
            DispersionFitness::new(self.candidates),
            self.subset_size,
            self.config.gene_swap_probability,
        );
        let result = GaRunner::run(&problem, &self.config.to_ga_config())?;

        let indices = result.best.into_indices();
        let locations = self.candidates.select(&indices)?;

        tracing::info!(
            fitness = result.best_fitness,
            generations = result.generations,
            "dispersion search finished"
        );

        Ok(FinderOutcome {
            locations,
            indices,
            fitness: Some(result.best_fitness),
            generations: result.generations,
            history: result.history,
        })
    }
}
