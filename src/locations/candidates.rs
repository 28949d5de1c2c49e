//! The read-only table of candidate locations.

use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// One geocoded candidate row.
///
/// `index` is the row's position in the [`CandidateSet`] it was loaded into.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl Location {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Immutable, index-addressable table of candidate locations.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateSet {
    locations: Vec<Location>,
}

impl CandidateSet {
    /// Builds a set from `(latitude, longitude, name)` rows, assigning
    /// indices by position.
    ///
    /// # Errors
    /// [`Error::InvalidCoordinate`] if a row is outside
    /// `[-90, 90] x [-180, 180]` or not finite.
    pub fn from_rows<I, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64, S)>,
        S: Into<String>,
    {
        let locations = rows
            .into_iter()
            .enumerate()
            .map(|(index, (latitude, longitude, name))| {
                let point = GeoPoint::new(latitude, longitude);
                if !point.is_valid() {
                    return Err(Error::InvalidCoordinate {
                        index,
                        latitude,
                        longitude,
                    });
                }
                Ok(Location {
                    index,
                    latitude,
                    longitude,
                    name: name.into(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { locations })
    }

    pub fn count(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Location> {
        self.locations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.locations
    }

    /// Copies the rows at `indices`, in the order given.
    ///
    /// Repeated indices yield repeated rows; this is a lookup, not a
    /// validator.
    ///
    /// # Errors
    /// [`Error::IndexOutOfRange`] for an index `>= count()`.
    pub fn select(&self, indices: &[usize]) -> Result<Vec<Location>> {
        indices
            .iter()
            .map(|&index| {
                self.locations
                    .get(index)
                    .cloned()
                    .ok_or(Error::IndexOutOfRange {
                        index,
                        len: self.locations.len(),
                    })
            })
            .collect()
    }

    /// Coordinates of the rows at `indices`.
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub(crate) fn points(&self, indices: &[usize]) -> Vec<GeoPoint> {
        indices.iter().map(|&i| self.locations[i].point()).collect()
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}
