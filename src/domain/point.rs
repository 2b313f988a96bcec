//! Geographic points and the validated, ordered instance they form.

use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

use super::error::DomainError;

/// Point identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors. Identifiers order lexicographically, which is
/// what makes instance indexing and tour reconstruction deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(String);

impl PointId {
    /// Create a new PointId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the point ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for PointId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for PointId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A geographic point with a stable identifier.
///
/// Immutable once constructed; `try_new` is the only constructor and rejects
/// out-of-range coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: PointId,
    latitude: f64,
    longitude: f64,
}

impl Point {
    /// Create a point, validating that latitude lies in [-90, 90] and
    /// longitude in [-180, 180] decimal degrees.
    pub fn try_new(
        id: impl Into<PointId>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        // RangeInclusive::contains rejects NaN as well.
        let lat_ok = (-90.0..=90.0).contains(&latitude);
        let lon_ok = (-180.0..=180.0).contains(&longitude);
        if !lat_ok || !lon_ok {
            return Err(DomainError::InvalidCoordinate {
                id: id.as_str().to_string(),
                latitude,
                longitude,
            });
        }
        Ok(Self {
            id,
            latitude,
            longitude,
        })
    }

    pub fn id(&self) -> &PointId {
        &self.id
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Shape of one entry in the point-loading JSON mapping.
#[derive(Debug, Deserialize)]
struct RawCoordinate {
    lat: f64,
    long: f64,
}

/// The instance's point set, ordered by ascending identifier.
///
/// Ordering is load-bearing: every index used by the distance matrix, the
/// formulation and the cut generator refers to a position in this set, so the
/// same input always produces the same variable identities and the same cuts.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Build a set from points, sorting by identifier and rejecting
    /// duplicates.
    pub fn try_new(mut points: Vec<Point>) -> Result<Self, DomainError> {
        points.sort_by(|a, b| a.id.cmp(&b.id));
        for pair in points.windows(2) {
            if pair[0].id == pair[1].id {
                return Err(DomainError::DuplicatePoint {
                    id: pair[0].id.as_str().to_string(),
                });
            }
        }
        Ok(Self { points })
    }

    /// Parse the loading collaborator's JSON shape:
    /// `{"name": {"lat": 52.5, "long": 13.4}, ...}`.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        // BTreeMap rather than HashMap so duplicate detection below stays
        // meaningful and iteration order is stable.
        let raw: BTreeMap<String, RawCoordinate> = serde_json::from_str(json)?;
        let points = raw
            .into_iter()
            .map(|(id, c)| Point::try_new(id, c.lat, c.long))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::try_new(points)?)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    /// Point at the given instance index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range. Indices only ever come from this
    /// set, so an out-of-range index is a programming error.
    pub fn point(&self, index: usize) -> &Point {
        &self.points[index]
    }

    /// Identifier at the given instance index.
    pub fn id(&self, index: usize) -> &PointId {
        self.points[index].id()
    }

    /// Instance index of the given identifier, if present.
    pub fn index_of(&self, id: &PointId) -> Option<usize> {
        self.points
            .binary_search_by(|p| p.id.cmp(id))
            .ok()
    }

    /// Coordinate lookup for rendering collaborators.
    pub fn get(&self, id: &PointId) -> Option<&Point> {
        self.index_of(id).map(|i| &self.points[i])
    }
}
