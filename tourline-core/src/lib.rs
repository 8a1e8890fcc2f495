//! Core domain types for the Tourline route sequencer.
//!
//! A caller hands over an ordered list of [`Waypoint`] values and receives a
//! [`Route`] visiting every one of them, starting from the first. The default
//! [`NearestNeighbourSequencer`] always moves on to the closest unvisited
//! waypoint by great-circle distance.
//!
//! Validation happens up front: non-finite or out-of-range coordinates, blank
//! identifiers and duplicate identifiers are rejected with a
//! [`SequenceError`] rather than silently skewing the distance comparisons.
//!
//! # Examples
//!
//! ```
//! use tourline_core::{Waypoint, sequence};
//!
//! # fn main() -> Result<(), tourline_core::SequenceError> {
//! let stops = vec![
//!     Waypoint::from_lat_lon("a", 0.0, 0.0),
//!     Waypoint::from_lat_lon("b", 0.0, 1.0),
//!     Waypoint::from_lat_lon("c", 0.0, 5.0),
//!     Waypoint::from_lat_lon("d", 0.0, 2.0),
//! ];
//! let ordered = sequence(&stops)?;
//! let ids: Vec<_> = ordered.iter().map(|w| w.id.as_str()).collect();
//! assert_eq!(ids, ["a", "b", "d", "c"]);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
mod error;
mod itinerary;
mod route;
mod sequencer;
mod waypoint;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{EARTH_RADIUS_KM, format_distance, haversine_km, haversine_with_radius};
pub use error::{CoordinateError, SequenceError};
pub use itinerary::{Itinerary, ItineraryStop, TripStatus};
pub use route::Route;
pub use sequencer::{NearestNeighbourSequencer, RouteSequencer, SequencerConfig, sequence};
pub use waypoint::Waypoint;
