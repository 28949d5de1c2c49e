//! Dispersion score of a subset of candidate locations.

use super::candidates::CandidateSet;
use crate::geo::{convex_hull, median, pairwise_distances, polygon_area_km2, EARTH_RADIUS_KM};

/// Score given to a subset that repeats a location.
///
/// Real scores are never negative, so this is worse than any legitimate
/// subset.
pub const DUPLICATE_PENALTY: f64 = -EARTH_RADIUS_KM;

/// Subsets larger than this many locations also earn their hull area.
pub const AREA_BONUS_MIN_POINTS: usize = 4;

/// Scores index subsets of a [`CandidateSet`]. Higher is better.
///
/// Rules, first match wins:
///
/// 1. a single location scores `0`
/// 2. a repeated index scores [`DUPLICATE_PENALTY`]
/// 3. otherwise the median pairwise great-circle distance in km, plus the
///    convex hull area in km² when more than [`AREA_BONUS_MIN_POINTS`]
///    locations are selected
#[derive(Debug, Clone, Copy)]
pub struct DispersionFitness<'a> {
    candidates: &'a CandidateSet,
}

impl<'a> DispersionFitness<'a> {
    pub fn new(candidates: &'a CandidateSet) -> Self {
        Self { candidates }
    }

    pub fn candidates(&self) -> &'a CandidateSet {
        self.candidates
    }

    /// Scores the subset `indices`.
    ///
    /// # Panics
    /// Panics if an index is out of range for the candidate set.
    pub fn evaluate(&self, indices: &[usize]) -> f64 {
        if indices.len() == 1 {
            return 0.0;
        }
        if has_duplicates(indices) {
            return DUPLICATE_PENALTY;
        }

        let points = self.candidates.points(indices);
        let spread = median(&pairwise_distances(&points)).unwrap_or(0.0);

        if points.len() > AREA_BONUS_MIN_POINTS {
            spread + polygon_area_km2(&convex_hull(&points))
        } else {
            spread
        }
    }
}

fn has_duplicates(indices: &[usize]) -> bool {
    let mut sorted = indices.to_vec();
    sorted.sort_unstable();
    sorted.windows(2).any(|w| w[0] == w[1])
}
