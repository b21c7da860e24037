//! Leg and trip routing.
//!
//! A leg is routed as walk to the nearest vehicle, drive to the nearest
//! parking zone, then walk to the destination when it lies outside that
//! zone. Legs of one trip are routed in order: each leg sees the vehicle
//! positions left behind by the legs before it.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{
    Coordinate, Leg, ParkingZone, PathSegment, RoutedLeg, TripPlan, Vehicle, VehiclePosition,
    VehicleUsage,
};
use crate::selector::{NearestVertex, nearest_parking_zone_with, nearest_vehicle};
use crate::traits::ZoneDistance;

/// Vehicle positions overridden by earlier dropoffs in the same trip.
///
/// Never mutated in place: every dropoff produces a new map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehiclePositions {
    positions: BTreeMap<String, Coordinate>,
}

impl VehiclePositions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, vehicle_id: &str) -> Option<Coordinate> {
        self.positions.get(vehicle_id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// This map plus the dropoff recorded in `usage`.
    pub fn with_dropoff(&self, usage: &VehicleUsage) -> Self {
        let mut positions = self.positions.clone();
        positions.insert(usage.vehicle_id.clone(), usage.dropoff_location);
        Self { positions }
    }

    /// Copies of `vehicles` with overridden locations substituted.
    pub fn apply(&self, vehicles: &[Vehicle]) -> Vec<Vehicle> {
        vehicles
            .iter()
            .map(|vehicle| match self.get(&vehicle.id) {
                Some(location) => vehicle.relocated(location),
                None => vehicle.clone(),
            })
            .collect()
    }

    /// Positions ordered by vehicle id.
    pub fn to_positions(&self) -> Vec<VehiclePosition> {
        self.positions
            .iter()
            .map(|(vehicle_id, location)| VehiclePosition {
                vehicle_id: vehicle_id.clone(),
                location: *location,
            })
            .collect()
    }
}

/// Result of routing one leg: the leg and the positions to thread forward.
#[derive(Debug, Clone, PartialEq)]
pub struct LegOutcome {
    pub leg: RoutedLeg,
    pub positions: VehiclePositions,
}

#[derive(Debug, Clone, Default)]
pub struct LegRouter<Z = NearestVertex> {
    zone_distance: Z,
}

impl LegRouter<NearestVertex> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Z: ZoneDistance> LegRouter<Z> {
    pub fn with_zone_distance(zone_distance: Z) -> Self {
        Self { zone_distance }
    }

    /// Route one leg against the given candidates, seeing vehicles at the
    /// positions in `positions` where overridden.
    pub fn route_leg(
        &self,
        leg: &Leg,
        vehicles: &[Vehicle],
        zones: &[ParkingZone],
        positions: &VehiclePositions,
    ) -> LegOutcome {
        let mut routed = RoutedLeg::unrouted(leg);

        let candidates = positions.apply(vehicles);
        let Some(vehicle) = nearest_vehicle(leg.start_coord, &candidates) else {
            debug!("no vehicle available, leg left unrouted");
            return LegOutcome {
                leg: routed,
                positions: positions.clone(),
            };
        };
        let pickup = vehicle.location;
        routed.paths.push(PathSegment::walk(leg.start_coord, pickup));

        let Some(zone) = nearest_parking_zone_with(&self.zone_distance, leg.end_coord, zones)
        else {
            debug!(vehicle = %vehicle.id, "no parking zone available, walk only");
            return LegOutcome {
                leg: routed,
                positions: positions.clone(),
            };
        };

        let dropoff = if zone.geometry.contains(leg.end_coord) {
            routed.paths.push(PathSegment::drive(pickup, leg.end_coord));
            leg.end_coord
        } else {
            let Some(dropoff) = self.zone_distance.dropoff_point(zone, leg.end_coord) else {
                return LegOutcome {
                    leg: routed,
                    positions: positions.clone(),
                };
            };
            routed.paths.push(PathSegment::drive(pickup, dropoff));
            routed.paths.push(PathSegment::walk(dropoff, leg.end_coord));
            dropoff
        };

        let usage = VehicleUsage {
            vehicle_id: vehicle.id.clone(),
            pickup_location: pickup,
            dropoff_location: dropoff,
        };
        debug!(
            vehicle = %usage.vehicle_id,
            zone = %zone.id,
            segments = routed.paths.len(),
            "routed leg"
        );
        let positions = positions.with_dropoff(&usage);
        routed.vehicle_usage = Some(usage);

        LegOutcome {
            leg: routed,
            positions,
        }
    }

    /// Route every leg in order, threading dropoffs forward.
    pub fn plan_trip(&self, legs: &[Leg], vehicles: &[Vehicle], zones: &[ParkingZone]) -> TripPlan {
        let (routed, positions) = legs.iter().fold(
            (Vec::with_capacity(legs.len()), VehiclePositions::new()),
            |(mut routed, positions), leg| {
                let outcome = self.route_leg(leg, vehicles, zones, &positions);
                routed.push(outcome.leg);
                (routed, outcome.positions)
            },
        );

        TripPlan {
            legs: routed,
            updated_vehicle_positions: positions.to_positions(),
        }
    }
}
