//! Ordered visits produced by a sequencer.

use crate::{Waypoint, haversine_with_radius};

/// An ordered path through waypoints.
///
/// Routes returned by a [`RouteSequencer`](crate::RouteSequencer) are a
/// permutation of the input waypoints that starts with the first input.
///
/// # Examples
/// ```
/// use tourline_core::{EARTH_RADIUS_KM, Route, Waypoint};
///
/// let route = Route::new(vec![
///     Waypoint::from_lat_lon("a", 0.0, 0.0),
///     Waypoint::from_lat_lon("b", 0.0, 1.0),
/// ]);
///
/// assert_eq!(route.ids().collect::<Vec<_>>(), ["a", "b"]);
/// assert_eq!(route.legs_km(EARTH_RADIUS_KM).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Route {
    /// Wrap an already ordered list of waypoints.
    #[must_use]
    pub const fn new(waypoints: Vec<Waypoint>) -> Self {
        Self { waypoints }
    }

    /// Construct an empty route.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Waypoints in visiting order.
    #[must_use]
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Waypoint identifiers in visiting order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.waypoints.iter().map(|waypoint| waypoint.id.as_str())
    }

    /// Number of stops.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Whether the route has no stops.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Consume the route, yielding its waypoints in order.
    #[must_use]
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }

    /// Great-circle length of each hop, in kilometres.
    ///
    /// A route of `n` stops has `n - 1` legs; empty and single-stop routes
    /// have none.
    #[must_use]
    pub fn legs_km(&self, radius_km: f64) -> Vec<f64> {
        self.waypoints
            .windows(2)
            .filter_map(|pair| match pair {
                [from, to] => Some(haversine_with_radius(from.location, to.location, radius_km)),
                _ => None,
            })
            .collect()
    }

    /// Sum of all leg lengths, in kilometres.
    #[must_use]
    pub fn total_distance_km(&self, radius_km: f64) -> f64 {
        self.legs_km(radius_km).iter().sum()
    }
}

impl From<Route> for Vec<Waypoint> {
    fn from(route: Route) -> Self {
        route.into_waypoints()
    }
}
