//! Facade crate for the Tourline route sequencer.
//!
//! This crate re-exports the core domain types so applications can depend on
//! a single crate. Test fixtures are available behind the `test-support`
//! feature.

#![forbid(unsafe_code)]

pub use tourline_core::{
    CoordinateError, EARTH_RADIUS_KM, Itinerary, ItineraryStop, NearestNeighbourSequencer, Route,
    RouteSequencer, SequenceError, SequencerConfig, TripStatus, Waypoint, format_distance,
    haversine_km, haversine_with_radius, sequence,
};

#[cfg(feature = "test-support")]
pub use tourline_core::test_support;
