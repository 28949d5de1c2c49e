//! Haversine great-circle distance.
//!
//! Distances are in kilometres on a sphere of radius [`EARTH_RADIUS_KM`].
//!
//! # Formula
//!
//! ```text
//! h = sin²(Δφ/2) + cos φ₁ · cos φ₂ · sin²(Δλ/2)
//! d = 2R · asin(√h)
//! ```
//!
//! # References
//!
//! - Sinnott (1984), "Virtues of the Haversine", *Sky and Telescope* 68(2)

use super::point::GeoPoint;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km between two points given in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_geoselect::geo::haversine_distance;
///
/// let d = haversine_distance(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111.195).abs() < 0.01);
/// ```
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let s1 = ((lat2 - lat1).to_radians() / 2.0).sin();
    let s2 = ((lon2 - lon1).to_radians() / 2.0).sin();
    // Rounding can push h past 1 for antipodal points.
    let h = (s1 * s1 + phi1.cos() * phi2.cos() * s2 * s2).clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Element-wise [`haversine_distance`] over parallel coordinate arrays.
///
/// # Panics
/// Panics if the four slices differ in length.
pub fn haversine_distance_vec(lat1: &[f64], lon1: &[f64], lat2: &[f64], lon2: &[f64]) -> Vec<f64> {
    let n = lat1.len();
    assert!(
        lon1.len() == n && lat2.len() == n && lon2.len() == n,
        "coordinate arrays must have equal length"
    );
    (0..n)
        .map(|i| haversine_distance(lat1[i], lon1[i], lat2[i], lon2[i]))
        .collect()
}

/// Distances of every unordered pair `i < j` of `points`.
///
/// Entries are ordered `(0,1), (0,2), …, (0,m-1), (1,2), …`, giving exactly
/// `m(m-1)/2` values.
pub fn pairwise_distances(points: &[GeoPoint]) -> Vec<f64> {
    let m = points.len();
    let pairs = m * m.saturating_sub(1) / 2;
    let mut lat1 = Vec::with_capacity(pairs);
    let mut lon1 = Vec::with_capacity(pairs);
    let mut lat2 = Vec::with_capacity(pairs);
    let mut lon2 = Vec::with_capacity(pairs);

    for i in 0..m {
        for j in (i + 1)..m {
            lat1.push(points[i].latitude);
            lon1.push(points[i].longitude);
            lat2.push(points[j].latitude);
            lon2.push(points[j].longitude);
        }
    }

    haversine_distance_vec(&lat1, &lon1, &lat2, &lon2)
}

/// Median of `values`; the mean of the two middle values for even lengths.
///
/// Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
