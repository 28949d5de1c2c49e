//! Spherical geometry for geocoded points.
//!
//! - [`distance`]: haversine great-circle distance, scalar and batched,
//!   and the unordered pair-distance table of a point set
//! - [`hull`]: convex hull of (longitude, latitude) points and the
//!   enclosed area in km²

pub mod distance;
pub mod hull;
mod point;

pub use distance::{
    haversine_distance, haversine_distance_vec, median, pairwise_distances, EARTH_RADIUS_KM,
};
pub use hull::{convex_hull, hull_area_km2, polygon_area_km2};
pub use point::GeoPoint;
