//! Nearest vehicle and nearest parking zone search.
//!
//! Both searches are linear scans over the candidates supplied for one leg.
//! Ties resolve to the first candidate in input order.

use crate::haversine::distance;
use crate::model::{Coordinate, ParkingZone, Vehicle};
use crate::traits::ZoneDistance;

/// Zone proximity measured to the closest polygon vertex.
///
/// This approximates the nearest edge point and is biased toward zones
/// with dense vertices. Swap in another [`ZoneDistance`] to change it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestVertex;

/// Strategy used by the router unless told otherwise.
pub const DEFAULT_ZONE_DISTANCE: NearestVertex = NearestVertex;

impl ZoneDistance for NearestVertex {
    fn distance_to_zone(&self, coord: Coordinate, zone: &ParkingZone) -> Option<f64> {
        zone.geometry
            .vertices()
            .map(|vertex| distance(coord, vertex))
            .reduce(f64::min)
    }

    fn dropoff_point(&self, zone: &ParkingZone, target: Coordinate) -> Option<Coordinate> {
        closest_point_in_zone(zone, target)
    }
}

pub fn nearest_vehicle(coord: Coordinate, vehicles: &[Vehicle]) -> Option<&Vehicle> {
    min_by_distance(vehicles.iter().map(|vehicle| {
        (vehicle, Some(distance(coord, vehicle.location)))
    }))
}

pub fn nearest_parking_zone(coord: Coordinate, zones: &[ParkingZone]) -> Option<&ParkingZone> {
    nearest_parking_zone_with(&DEFAULT_ZONE_DISTANCE, coord, zones)
}

/// Nearest zone flagged for parking under `strategy`. Zones the strategy
/// cannot measure (no vertices) are never selected.
pub fn nearest_parking_zone_with<'a, Z: ZoneDistance + ?Sized>(
    strategy: &Z,
    coord: Coordinate,
    zones: &'a [ParkingZone],
) -> Option<&'a ParkingZone> {
    min_by_distance(
        zones
            .iter()
            .filter(|zone| zone.is_parking_zone)
            .map(|zone| (zone, strategy.distance_to_zone(coord, zone))),
    )
}

/// Vertex of `zone` closest to `target`, across every ring and polygon.
pub fn closest_point_in_zone(zone: &ParkingZone, target: Coordinate) -> Option<Coordinate> {
    min_by_distance(
        zone.geometry
            .vertices()
            .map(|vertex| (vertex, Some(distance(vertex, target)))),
    )
}

/// First item with the strictly smallest measured distance.
fn min_by_distance<T>(candidates: impl Iterator<Item = (T, Option<f64>)>) -> Option<T> {
    let mut best: Option<(T, f64)> = None;
    for (item, measured) in candidates {
        let Some(meters) = measured else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, best_meters)| meters < *best_meters) {
            best = Some((item, meters));
        }
    }
    best.map(|(item, _)| item)
}
