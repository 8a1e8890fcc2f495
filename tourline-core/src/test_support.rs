//! Fixtures and stub sequencers shared by unit and behaviour tests.

use crate::{Route, RouteSequencer, SequenceError, Waypoint};

/// Shorthand for [`Waypoint::from_lat_lon`].
#[must_use]
pub fn waypoint(id: &str, lat: f64, lon: f64) -> Waypoint {
    Waypoint::from_lat_lon(id, lat, lon)
}

/// Five Wuxi attractions, in the order a visitor might add them to a trip.
#[must_use]
pub fn wuxi_attractions() -> Vec<Waypoint> {
    vec![
        waypoint("taihu-lake", 31.23, 120.27),
        waypoint("yuantouzhu", 31.26, 120.24),
        waypoint("lingshan-buddha", 31.11, 120.08),
        waypoint("wuxi-museum", 31.573, 120.317),
        waypoint("jichang-garden", 31.587, 120.278),
    ]
}

/// Sequencer returning the input in reverse order.
///
/// Breaks the fixed-start rule on purpose so callers can observe that a
/// reorder really happened.
#[derive(Debug, Default, Copy, Clone)]
pub struct ReversingSequencer;

impl RouteSequencer for ReversingSequencer {
    fn sequence(&self, waypoints: &[Waypoint]) -> Result<Route, SequenceError> {
        Ok(Route::new(waypoints.iter().rev().cloned().collect()))
    }
}

/// Sequencer that rejects every request as a duplicate of its first id.
#[derive(Debug, Default, Copy, Clone)]
pub struct RejectingSequencer;

impl RouteSequencer for RejectingSequencer {
    fn sequence(&self, waypoints: &[Waypoint]) -> Result<Route, SequenceError> {
        let id = waypoints
            .first()
            .map(|waypoint| waypoint.id.clone())
            .unwrap_or_default();
        Err(SequenceError::DuplicateWaypoint { id })
    }
}
