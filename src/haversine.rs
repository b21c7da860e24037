//! Great-circle distance between coordinates.
//!
//! All path segments are straight lines, so this is the only distance
//! measure used by routing and pricing.

use crate::model::Coordinate;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two points in meters.
pub fn distance(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}

/// Minutes needed to cover `km` at a constant `speed_kmh`.
pub fn km_to_minutes(km: f64, speed_kmh: f64) -> f64 {
    (km / speed_kmh) * 60.0
}
