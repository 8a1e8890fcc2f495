//! Great-circle distances between coordinates.
//!
//! Distances use the haversine formula on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Inputs are WGS84 degrees (`x = longitude`,
//! `y = latitude`); results are kilometres.

use geo::Coord;

/// Mean Earth radius used for all default distance calculations.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres on a 6371 km sphere.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tourline_core::haversine_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let one_degree_east = Coord { x: 1.0, y: 0.0 };
/// let km = haversine_km(origin, one_degree_east);
/// assert!((km - 111.19).abs() < 0.01);
/// ```
#[must_use]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    haversine_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Haversine distance on a sphere of `radius_km`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "great-circle distance is floating-point trigonometry"
)]
pub fn haversine_with_radius(from: Coord<f64>, to: Coord<f64>, radius_km: f64) -> f64 {
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();
    let half_d_lat = (to.y - from.y).to_radians() / 2.0;
    let half_d_lon = (to.x - from.x).to_radians() / 2.0;

    let a = half_d_lat.sin().powi(2) + lat_from.cos() * lat_to.cos() * half_d_lon.sin().powi(2);
    // Rounding can push `a` just outside [0, 1] for coincident or antipodal
    // points.
    2.0 * radius_km * a.clamp(0.0, 1.0).sqrt().asin()
}

/// Render a distance in kilometres for display.
///
/// Below one kilometre the value is shown in whole metres, below ten
/// kilometres with one decimal place, and beyond that in whole kilometres.
/// Whole-unit forms truncate rather than round.
///
/// # Examples
/// ```
/// use tourline_core::format_distance;
///
/// assert_eq!(format_distance(0.5), "500m");
/// assert_eq!(format_distance(2.54), "2.5km");
/// assert_eq!(format_distance(111.19), "111km");
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "metre conversion multiplies a floating-point distance"
)]
pub fn format_distance(km: f64) -> String {
    let metres = km * 1000.0;
    if metres < 1000.0 {
        format!("{:.0}m", metres.trunc())
    } else if km < 10.0 {
        format!("{km:.1}km")
    } else {
        format!("{:.0}km", km.trunc())
    }
}
