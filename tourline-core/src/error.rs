//! Errors surfaced while validating and sequencing waypoints.

use thiserror::Error;

/// Why a waypoint's coordinate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// Latitude was NaN or infinite.
    #[error("latitude is not a finite number")]
    NonFiniteLatitude,
    /// Longitude was NaN or infinite.
    #[error("longitude is not a finite number")]
    NonFiniteLongitude,
    /// Latitude fell outside `[-90, 90]` degrees.
    #[error("latitude must be between -90 and 90 degrees")]
    LatitudeOutOfRange,
    /// Longitude fell outside `[-180, 180]` degrees.
    #[error("longitude must be between -180 and 180 degrees")]
    LongitudeOutOfRange,
}

/// Errors returned by [`RouteSequencer::sequence`](crate::RouteSequencer::sequence).
///
/// Waypoint variants identify the first offending waypoint in input order so
/// callers can point users at the stop that needs fixing.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    /// The configured sphere radius cannot order distances.
    #[error("earth radius must be a positive, finite number of kilometres, got {radius_km}")]
    InvalidRadius {
        /// Rejected radius.
        radius_km: f64,
    },
    /// A waypoint carried an unusable coordinate.
    #[error("waypoint {id:?} has an invalid coordinate: {reason}")]
    InvalidWaypoint {
        /// Identifier of the rejected waypoint.
        id: String,
        /// What was wrong with its coordinate.
        #[source]
        reason: CoordinateError,
    },
    /// The same identifier appeared more than once.
    #[error("waypoint id {id:?} appears more than once")]
    DuplicateWaypoint {
        /// The repeated identifier.
        id: String,
    },
    /// A waypoint identifier was empty or whitespace.
    #[error("waypoint at position {position} has a blank id")]
    BlankWaypointId {
        /// Zero-based position in the input.
        position: usize,
    },
}
