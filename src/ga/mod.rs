//! Genetic Algorithm framework.
//!
//! A generic, domain-agnostic GA framework built on trait-based abstractions.
//! Users define their problem by implementing [`GaProblem`], which specifies
//! how to create, evaluate, crossover, and mutate individuals. The search
//! maximizes fitness.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution with a cached fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, selection, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with the per-generation logbook
//! - [`HallOfFame`]: Best individuals seen across all generations
//!
//! # Submodules
//!
//! - [`operators`]: Two-point crossover, shuffle mutation, index sampling
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Bäck, Fogel & Michalewicz (2000), *Evolutionary Computation 1*, ch. 33 (variation)

mod config;
mod hall_of_fame;
pub mod operators;
mod runner;
mod selection;
mod stats;
mod types;

pub use config::GaConfig;
pub use hall_of_fame::HallOfFame;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use stats::GenerationStats;
pub use types::{Fitness, GaProblem, Individual};
