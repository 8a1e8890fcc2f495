//! Trip plans whose stops can be reordered by a sequencer.

use std::collections::HashMap;

use log::{debug, warn};

use crate::{RouteSequencer, SequenceError, Waypoint};

/// Lifecycle of a planned trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TripStatus {
    /// Still being put together.
    #[default]
    Planning,
    /// The visitor is on the trip.
    InProgress,
    /// Finished.
    Completed,
    /// Abandoned.
    Cancelled,
}

/// One stop on an [`Itinerary`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryStop {
    /// Where the stop is.
    pub waypoint: Waypoint,
    /// Free-form visitor notes that travel with the stop when reordered.
    #[cfg_attr(feature = "serde", serde(default))]
    pub notes: Option<String>,
}

impl ItineraryStop {
    /// A stop without notes.
    #[must_use]
    pub const fn new(waypoint: Waypoint) -> Self {
        Self {
            waypoint,
            notes: None,
        }
    }

    /// Attach notes to the stop.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// A named trip made of ordered stops.
///
/// # Examples
/// ```
/// use tourline_core::{Itinerary, ItineraryStop, NearestNeighbourSequencer, Waypoint};
///
/// # fn main() -> Result<(), tourline_core::SequenceError> {
/// let mut trip = Itinerary::new("t1", "Lakeside day")
///     .with_stop(ItineraryStop::new(Waypoint::from_lat_lon("a", 0.0, 0.0)))
///     .with_stop(ItineraryStop::new(Waypoint::from_lat_lon("far", 0.0, 5.0)))
///     .with_stop(ItineraryStop::new(Waypoint::from_lat_lon("near", 0.0, 1.0)));
///
/// trip.reorder(&NearestNeighbourSequencer::new())?;
/// let ids: Vec<_> = trip.stops.iter().map(|s| s.waypoint.id.as_str()).collect();
/// assert_eq!(ids, ["a", "near", "far"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Trip identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional longer description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Where the trip is in its lifecycle.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: TripStatus,
    /// Stops in visiting order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stops: Vec<ItineraryStop>,
}

impl Itinerary {
    /// An empty trip in the planning state.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            status: TripStatus::Planning,
            stops: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a stop.
    #[must_use]
    pub fn with_stop(mut self, stop: ItineraryStop) -> Self {
        self.stops.push(stop);
        self
    }

    /// Waypoints of every stop, in current order.
    #[must_use]
    pub fn waypoints(&self) -> Vec<Waypoint> {
        self.stops.iter().map(|stop| stop.waypoint.clone()).collect()
    }

    /// Rearrange the stops into the order chosen by `sequencer`.
    ///
    /// Trips with fewer than two stops are left alone. Notes stay with their
    /// waypoint. If the sequencer fails the stops are not touched.
    pub fn reorder(&mut self, sequencer: &dyn RouteSequencer) -> Result<(), SequenceError> {
        if self.stops.len() < 2 {
            return Ok(());
        }
        let route = sequencer.sequence(&self.waypoints())?;

        let positions: HashMap<&str, usize> = self
            .stops
            .iter()
            .enumerate()
            .map(|(position, stop)| (stop.waypoint.id.as_str(), position))
            .collect();
        let order: Vec<usize> = route
            .ids()
            .filter_map(|id| positions.get(id).copied())
            .collect();

        let mut pending: Vec<Option<ItineraryStop>> =
            std::mem::take(&mut self.stops).into_iter().map(Some).collect();
        let mut reordered = Vec::with_capacity(pending.len());
        for position in order {
            if let Some(stop) = pending.get_mut(position).and_then(Option::take) {
                reordered.push(stop);
            }
        }
        let leftovers: Vec<ItineraryStop> = pending.into_iter().flatten().collect();
        if !leftovers.is_empty() {
            warn!(
                "sequencer omitted {} stop(s) of itinerary {:?}; appending them in their previous order",
                leftovers.len(),
                self.id
            );
            reordered.extend(leftovers);
        }

        debug!("reordered {} stops of itinerary {:?}", reordered.len(), self.id);
        self.stops = reordered;
        Ok(())
    }
}
