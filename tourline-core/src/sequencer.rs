//! Visiting-order construction.
//!
//! [`RouteSequencer`] is the seam callers program against;
//! [`NearestNeighbourSequencer`] is the default greedy implementation.

use std::collections::HashSet;

use geo::Coord;
use log::{debug, warn};

use crate::{EARTH_RADIUS_KM, Route, SequenceError, Waypoint, haversine_with_radius};

/// Configuration for [`NearestNeighbourSequencer`].
#[derive(Debug, Clone, PartialEq)]
pub struct SequencerConfig {
    /// Sphere radius used for haversine distances. Must be positive and
    /// finite.
    pub earth_radius_km: f64,
    /// Reject latitudes outside `[-90, 90]` and longitudes outside
    /// `[-180, 180]`.
    pub enforce_coordinate_ranges: bool,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            enforce_coordinate_ranges: true,
        }
    }
}

/// Produce a visiting order for a set of waypoints.
///
/// Implementations must return a permutation of the input whose first
/// element is the first input waypoint, and must report invalid input through
/// [`SequenceError`] rather than panicking. Sequencers must be `Send + Sync`
/// so one instance can serve concurrent callers.
///
/// # Examples
///
/// ```
/// use tourline_core::{Route, RouteSequencer, SequenceError, Waypoint};
///
/// struct InputOrder;
///
/// impl RouteSequencer for InputOrder {
///     fn sequence(&self, waypoints: &[Waypoint]) -> Result<Route, SequenceError> {
///         Ok(Route::new(waypoints.to_vec()))
///     }
/// }
///
/// let route = InputOrder.sequence(&[Waypoint::from_lat_lon("a", 0.0, 0.0)])?;
/// assert_eq!(route.len(), 1);
/// # Ok::<(), SequenceError>(())
/// ```
pub trait RouteSequencer: Send + Sync {
    /// Order `waypoints` into a route.
    fn sequence(&self, waypoints: &[Waypoint]) -> Result<Route, SequenceError>;
}

/// Greedy nearest-neighbour tour construction.
///
/// Starting from the first waypoint, the sequencer repeatedly moves to the
/// unvisited waypoint with the smallest haversine distance. Ties go to the
/// waypoint that appears earliest in the input, so output is deterministic.
/// Cost is `O(n²)` distance evaluations, which suits itineraries of tens of
/// stops.
#[derive(Debug, Clone, Default)]
pub struct NearestNeighbourSequencer {
    config: SequencerConfig,
}

impl NearestNeighbourSequencer {
    /// Construct a sequencer using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SequencerConfig::default())
    }

    /// Construct a sequencer with explicit configuration.
    #[must_use]
    pub const fn with_config(config: SequencerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &SequencerConfig {
        &self.config
    }

    fn validate(&self, waypoints: &[Waypoint]) -> Result<(), SequenceError> {
        let radius_km = self.config.earth_radius_km;
        if !radius_km.is_finite() || radius_km <= 0.0 {
            warn!("rejecting sequencer radius {radius_km}");
            return Err(SequenceError::InvalidRadius { radius_km });
        }
        let mut seen = HashSet::with_capacity(waypoints.len());
        for (position, waypoint) in waypoints.iter().enumerate() {
            if waypoint.id.trim().is_empty() {
                warn!("rejecting waypoint at position {position}: blank id");
                return Err(SequenceError::BlankWaypointId { position });
            }
            waypoint
                .validate(self.config.enforce_coordinate_ranges)
                .map_err(|reason| {
                    warn!("rejecting waypoint {:?}: {reason}", waypoint.id);
                    SequenceError::InvalidWaypoint {
                        id: waypoint.id.clone(),
                        reason,
                    }
                })?;
            if !seen.insert(waypoint.id.as_str()) {
                warn!("rejecting duplicate waypoint id {:?}", waypoint.id);
                return Err(SequenceError::DuplicateWaypoint {
                    id: waypoint.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl RouteSequencer for NearestNeighbourSequencer {
    fn sequence(&self, waypoints: &[Waypoint]) -> Result<Route, SequenceError> {
        self.validate(waypoints)?;
        if waypoints.len() < 2 {
            return Ok(Route::new(waypoints.to_vec()));
        }

        debug!("sequencing {} waypoints", waypoints.len());
        let radius_km = self.config.earth_radius_km;
        let route = Route::new(
            nearest_neighbour_order(waypoints, radius_km)
                .into_iter()
                .filter_map(|index| waypoints.get(index).cloned())
                .collect(),
        );
        debug!(
            "sequenced {} waypoints covering {:.3} km",
            route.len(),
            route.total_distance_km(radius_km)
        );
        Ok(route)
    }
}

/// Order `waypoints` with the default [`NearestNeighbourSequencer`].
///
/// # Examples
/// ```
/// use tourline_core::{Waypoint, sequence};
///
/// let stops = [
///     Waypoint::from_lat_lon("a", 0.0, 0.0),
///     Waypoint::from_lat_lon("b", 0.0, 1.0),
///     Waypoint::from_lat_lon("c", 0.0, -1.0),
/// ];
/// let ids: Vec<_> = sequence(&stops)?.into_iter().map(|w| w.id).collect();
/// assert_eq!(ids, ["a", "b", "c"]);
/// # Ok::<(), tourline_core::SequenceError>(())
/// ```
pub fn sequence(waypoints: &[Waypoint]) -> Result<Vec<Waypoint>, SequenceError> {
    NearestNeighbourSequencer::new()
        .sequence(waypoints)
        .map(Route::into_waypoints)
}

/// Input indices in nearest-neighbour visiting order.
///
/// The remaining pool is a visited mask over input positions; each scan
/// reads it in input order and only the chosen slot is flipped afterwards.
fn nearest_neighbour_order(waypoints: &[Waypoint], radius_km: f64) -> Vec<usize> {
    let Some(start) = waypoints.first() else {
        return Vec::new();
    };
    let mut visited = vec![false; waypoints.len()];
    let mut order = Vec::with_capacity(waypoints.len());

    mark_visited(&mut visited, 0);
    order.push(0);
    let mut current = start.location;

    while let Some((next, location)) = nearest_unvisited(waypoints, &visited, current, radius_km) {
        mark_visited(&mut visited, next);
        order.push(next);
        current = location;
    }
    order
}

fn nearest_unvisited(
    waypoints: &[Waypoint],
    visited: &[bool],
    from: Coord<f64>,
    radius_km: f64,
) -> Option<(usize, Coord<f64>)> {
    let mut best: Option<(usize, Coord<f64>, f64)> = None;
    for (index, (waypoint, &done)) in waypoints.iter().zip(visited).enumerate() {
        if done {
            continue;
        }
        let distance = haversine_with_radius(from, waypoint.location, radius_km);
        // Strict `<` keeps the earliest candidate on ties.
        if best.is_none_or(|(_, _, best_distance)| distance < best_distance) {
            best = Some((index, waypoint.location, distance));
        }
    }
    best.map(|(index, location, _)| (index, location))
}

fn mark_visited(visited: &mut [bool], index: usize) {
    if let Some(slot) = visited.get_mut(index) {
        *slot = true;
    }
}
