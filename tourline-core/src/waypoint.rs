//! Named stops with a geographic position.

use geo::Coord;

use crate::CoordinateError;

/// A named stop along a trip.
///
/// Coordinates are WGS84 degrees with `x = longitude` and `y = latitude`.
/// With the `serde` feature the wire form is flat:
/// `{ "id": "...", "lat": 31.23, "lon": 120.27 }`.
///
/// # Examples
/// ```
/// use tourline_core::Waypoint;
///
/// let lake = Waypoint::from_lat_lon("taihu-lake", 31.23, 120.27);
/// assert_eq!(lake.latitude(), 31.23);
/// assert_eq!(lake.longitude(), 120.27);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "WaypointRecord", from = "WaypointRecord")
)]
pub struct Waypoint {
    /// Caller-supplied identifier, unique within a single sequencing call.
    pub id: String,
    /// Geospatial position.
    pub location: Coord<f64>,
}

impl Waypoint {
    /// Construct a waypoint from an identifier and a `geo` coordinate.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tourline_core::Waypoint;
    ///
    /// let stop = Waypoint::new("museum", Coord { x: 120.317, y: 31.573 });
    /// assert_eq!(stop.id, "museum");
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id: id.into(),
            location,
        }
    }

    /// Construct a waypoint from latitude and longitude in degrees.
    #[must_use]
    pub fn from_lat_lon(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::new(
            id,
            Coord {
                x: longitude,
                y: latitude,
            },
        )
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Check that the coordinate is usable for distance calculations.
    ///
    /// Non-finite components are always rejected. When `enforce_ranges` is
    /// set, latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
    ///
    /// # Examples
    /// ```
    /// use tourline_core::{CoordinateError, Waypoint};
    ///
    /// let stop = Waypoint::from_lat_lon("nowhere", f64::NAN, 0.0);
    /// assert_eq!(stop.validate(true), Err(CoordinateError::NonFiniteLatitude));
    /// ```
    pub fn validate(&self, enforce_ranges: bool) -> Result<(), CoordinateError> {
        let latitude = self.latitude();
        let longitude = self.longitude();
        if !latitude.is_finite() {
            return Err(CoordinateError::NonFiniteLatitude);
        }
        if !longitude.is_finite() {
            return Err(CoordinateError::NonFiniteLongitude);
        }
        if enforce_ranges {
            if !(-90.0..=90.0).contains(&latitude) {
                return Err(CoordinateError::LatitudeOutOfRange);
            }
            if !(-180.0..=180.0).contains(&longitude) {
                return Err(CoordinateError::LongitudeOutOfRange);
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct WaypointRecord {
    id: String,
    lat: f64,
    lon: f64,
}

#[cfg(feature = "serde")]
impl From<Waypoint> for WaypointRecord {
    fn from(waypoint: Waypoint) -> Self {
        Self {
            lat: waypoint.latitude(),
            lon: waypoint.longitude(),
            id: waypoint.id,
        }
    }
}

#[cfg(feature = "serde")]
impl From<WaypointRecord> for Waypoint {
    fn from(record: WaypointRecord) -> Self {
        Self::from_lat_lon(record.id, record.lat, record.lon)
    }
}
