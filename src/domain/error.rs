//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs,
//! and they fail fast at the input boundary, before any solver interaction.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    #[error("invalid coordinate for point '{id}': latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate {
        /// Identifier of the offending point.
        id: String,
        /// The latitude that was provided, in decimal degrees.
        latitude: f64,
        /// The longitude that was provided, in decimal degrees.
        longitude: f64,
    },

    /// A closed tour needs at least three points.
    #[error("instance has {count} points, a tour needs at least 3")]
    DegenerateInstance {
        /// Number of points in the rejected instance.
        count: usize,
    },

    /// Point identifiers must be unique within an instance.
    #[error("duplicate point identifier '{id}'")]
    DuplicatePoint {
        /// The identifier that appeared more than once.
        id: String,
    },
}
