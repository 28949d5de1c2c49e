//! Per-generation population statistics.

use super::types::{Fitness, Individual};

/// Fitness summary of one generation.
///
/// `generation == 0` describes the initial population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    pub generation: usize,
    /// Number of fitness evaluations performed in this generation.
    pub evaluations: usize,
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    pub min: f64,
    pub max: f64,
}

impl GenerationStats {
    /// Summarizes the fitness values of `population`.
    pub fn compute<I: Individual>(
        generation: usize,
        evaluations: usize,
        population: &[I],
    ) -> Self {
        let values: Vec<f64> = population.iter().map(|i| i.fitness().to_f64()).collect();
        if values.is_empty() {
            return Self {
                generation,
                evaluations,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            generation,
            evaluations,
            mean,
            std: variance.sqrt(),
            min,
            max,
        }
    }
}
