//! Convex hull and enclosed area of geocoded points.
//!
//! The hull is computed in the plane of (longitude, latitude) with Andrew's
//! monotone chain. Its area is then measured on the sphere, treating hull
//! edges as segments of constant bearing in the equirectangular plane.
//!
//! Point sets that straddle the antimeridian are not unwrapped: their hull
//! spans the long way round.
//!
//! # References
//!
//! - Andrew (1979), "Another efficient algorithm for convex hulls in two
//!   dimensions", *Information Processing Letters* 9(5)
//! - Chamberlain & Duquette (2007), "Some Algorithms for Polygons on a
//!   Sphere", JPL Publication 07-03

use super::distance::EARTH_RADIUS_KM;
use super::point::GeoPoint;
use crate::error::{Error, Result};

/// Convex hull vertices in counter-clockwise order (east = +x, north = +y),
/// starting from the westernmost, then southernmost point.
///
/// Duplicate and collinear points are dropped. The ring is open: the first
/// vertex is not repeated at the end. Fewer than 3 distinct points give
/// back the distinct points themselves.
pub fn convex_hull(points: &[GeoPoint]) -> Vec<GeoPoint> {
    let mut sorted: Vec<GeoPoint> = points.to_vec();
    sorted.sort_by(|a, b| {
        a.longitude
            .total_cmp(&b.longitude)
            .then(a.latitude.total_cmp(&b.latitude))
    });
    sorted.dedup();

    if sorted.len() < 3 {
        return sorted;
    }

    let mut lower: Vec<GeoPoint> = Vec::with_capacity(sorted.len());
    for &p in &sorted {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0.0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<GeoPoint> = Vec::with_capacity(sorted.len());
    for &p in sorted.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0.0 {
            upper.pop();
        }
        upper.push(p);
    }

    // Each chain ends where the other starts.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

/// Z-component of `(a - o) x (b - o)` in the (longitude, latitude) plane.
fn cross(o: GeoPoint, a: GeoPoint, b: GeoPoint) -> f64 {
    (a.longitude - o.longitude) * (b.latitude - o.latitude)
        - (a.latitude - o.latitude) * (b.longitude - o.longitude)
}

/// Area in km² enclosed by the closed ring `ring` on the sphere.
///
/// Uses the line-integral form
/// `A = R²/2 · |Σ (λ₂ - λ₁)(2 + sin φ₁ + sin φ₂)|`.
/// Rings with fewer than 3 vertices have zero area.
pub fn polygon_area_km2(ring: &[GeoPoint]) -> f64 {
    let n = ring.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let p1 = ring[i];
        let p2 = ring[(i + 1) % n];
        let dlon = (p2.longitude - p1.longitude).to_radians();
        sum += dlon * (2.0 + p1.latitude.to_radians().sin() + p2.latitude.to_radians().sin());
    }
    (sum * EARTH_RADIUS_KM * EARTH_RADIUS_KM / 2.0).abs()
}

/// Area in km² of the convex hull of `points`.
///
/// Collinear sets yield `Ok(0.0)`.
///
/// # Errors
/// [`Error::DegenerateHull`] if fewer than 3 points are given.
pub fn hull_area_km2(points: &[GeoPoint]) -> Result<f64> {
    if points.len() < 3 {
        return Err(Error::DegenerateHull {
            points: points.len(),
        });
    }
    Ok(polygon_area_km2(&convex_hull(points)))
}
