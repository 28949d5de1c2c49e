//! Optimal locations finder.
//!
//! Given a table of geocoded candidates and a subset size `k`, picks the
//! `k` candidates that are spread out the most: large median pairwise
//! great-circle distance and, for subsets of five or more, a large convex
//! hull area.
//!
//! # Key Types
//!
//! - [`CandidateSet`], [`Location`]: the read-only input table
//! - [`DispersionFitness`]: scores an index subset
//! - [`OptimalLocationsFinder`]: runs the search, see [`FinderConfig`]

mod candidates;
mod config;
mod finder;
mod fitness;
mod problem;

pub use candidates::{CandidateSet, Location};
pub use config::FinderConfig;
pub use finder::{FinderOutcome, OptimalLocationsFinder};
pub use fitness::{DispersionFitness, AREA_BONUS_MIN_POINTS, DUPLICATE_PENALTY};
pub use problem::{DispersionProblem, LocationGenome};
