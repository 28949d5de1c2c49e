//! Error types.

/// Errors returned by the finder and the evolutionary loop.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("candidate set is empty")]
    EmptyCandidates,

    #[error("invalid subset size: k={k}, must be at least 1")]
    InvalidSubsetSize { k: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("index {index} out of range for candidate set of {len} locations")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("convex hull area needs at least 3 points, got {points}")]
    DegenerateHull { points: usize },

    #[error("invalid coordinate at row {index}: latitude={latitude}, longitude={longitude}")]
    InvalidCoordinate {
        index: usize,
        latitude: f64,
        longitude: f64,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
