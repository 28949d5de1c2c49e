//! Spatially dispersed subset selection over geocoded locations.
//!
//! Choosing the best `k` of `n` candidate locations is combinatorial, so
//! the crate searches with a genetic algorithm:
//!
//! - **Geometry** ([`geo`]): haversine distances, pair-distance tables,
//!   convex hulls and their area on the sphere.
//! - **Genetic Algorithm** ([`ga`]): a generic generational loop with
//!   pluggable selection, crossover, and mutation, a hall of fame, and a
//!   per-generation logbook.
//! - **Finder** ([`locations`]): scores subsets by dispersion and wires
//!   the two together.
//!
//! # Example
//!
//! ```
//! use u_geoselect::locations::{CandidateSet, FinderConfig, OptimalLocationsFinder};
//!
//! let candidates = CandidateSet::from_rows(vec![
//!     (52.52, 13.40, "Berlin"),
//!     (48.86, 2.35, "Paris"),
//!     (41.90, 12.50, "Rome"),
//!     (40.42, -3.70, "Madrid"),
//!     (59.33, 18.07, "Stockholm"),
//!     (50.08, 14.44, "Prague"),
//! ])?;
//!
//! let picked = OptimalLocationsFinder::new(&candidates, 3)
//!     .with_config(FinderConfig::quick().with_seed(169))
//!     .find()?;
//! assert_eq!(picked.len(), 3);
//! # Ok::<(), u_geoselect::Error>(())
//! ```
//!
//! Runs are non-deterministic unless a seed is set. Logging goes through
//! `tracing`; install a subscriber to see per-generation statistics.

pub mod error;
pub mod ga;
pub mod geo;
pub mod locations;
pub mod random;

pub use error::{Error, Result};
