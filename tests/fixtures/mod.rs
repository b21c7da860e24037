//! Test fixtures for trip-planner.
//!
//! Provides realistic test data including:
//! - Real Brussels locations (from OpenStreetMap)
//! - An in-memory provider and builders for zones and legs

#![allow(dead_code)]

pub mod brussels_locations;

use std::sync::atomic::{AtomicUsize, Ordering};

use trip_planner::error::ProviderError;
use trip_planner::model::{
    Coordinate, Leg, ParkingZone, PricingSchedule, PricingSchedules, Vehicle,
};
use trip_planner::polygon::Polygon;
use trip_planner::traits::MobilityDataProvider;

pub use brussels_locations::*;

pub const MINUTE: i64 = 60_000;

/// Schedules as published upstream for a medium-tier car.
pub fn schedules() -> PricingSchedules {
    PricingSchedules {
        per_kilometer: PricingSchedule {
            unlock_fee: 827,
            book_unit_price: 27,
            minute_price: 0,
            kilometer_price: 1017,
            pause_unit_price: 248,
            included_kilometers: 0,
        },
        per_minute: PricingSchedule {
            unlock_fee: 827,
            book_unit_price: 27,
            minute_price: 405,
            kilometer_price: 620,
            pause_unit_price: 248,
            included_kilometers: 100,
        },
    }
}

/// Square zone of `half_size` degrees around `center`.
pub fn square_zone(id: &str, center: &Location, half_size: f64, parking: bool) -> ParkingZone {
    let (lng, lat) = (center.lng, center.lat);
    ParkingZone {
        id: id.to_string(),
        is_parking_zone: parking,
        geometry: Polygon::new(vec![vec![
            Coordinate::new(lng - half_size, lat - half_size),
            Coordinate::new(lng + half_size, lat - half_size),
            Coordinate::new(lng + half_size, lat + half_size),
            Coordinate::new(lng - half_size, lat + half_size),
        ]])
        .into(),
    }
}

pub fn vehicle(id: &str, at: &Location) -> Vehicle {
    Vehicle::new(id, at.coord())
}

pub fn leg(from: &Location, to: &Location, start_min: i64, end_min: i64) -> Leg {
    Leg {
        start_coord: from.coord(),
        start_time: start_min * MINUTE,
        end_coord: to.coord(),
        end_time: end_min * MINUTE,
    }
}

/// In-memory provider that counts feed reads.
pub struct MockProvider {
    pub vehicles: Vec<Vehicle>,
    pub zones: Vec<ParkingZone>,
    pub schedules: PricingSchedules,
    vehicle_reads: AtomicUsize,
    zone_reads: AtomicUsize,
}

impl MockProvider {
    pub fn new(vehicles: Vec<Vehicle>, zones: Vec<ParkingZone>) -> Self {
        Self {
            vehicles,
            zones,
            schedules: schedules(),
            vehicle_reads: AtomicUsize::new(0),
            zone_reads: AtomicUsize::new(0),
        }
    }

    /// Two cars near the center, parking at Sablon and Schuman, and a
    /// no-parking zone around the Grand-Place.
    pub fn brussels() -> Self {
        Self::new(
            vec![
                vehicle("car-central", &CENTRAL_STATION),
                vehicle("car-louise", &AVENUE_LOUISE),
            ],
            vec![
                square_zone("grand-place", &GRAND_PLACE, 0.001, false),
                square_zone("sablon", &SABLON, 0.002, true),
                square_zone("schuman", &SCHUMAN, 0.002, true),
            ],
        )
    }

    pub fn vehicle_reads(&self) -> usize {
        self.vehicle_reads.load(Ordering::SeqCst)
    }

    pub fn zone_reads(&self) -> usize {
        self.zone_reads.load(Ordering::SeqCst)
    }
}

impl MobilityDataProvider for MockProvider {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, ProviderError> {
        self.vehicle_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.vehicles.clone())
    }

    fn list_parking_zones(&self) -> Result<Vec<ParkingZone>, ProviderError> {
        self.zone_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.zones.clone())
    }

    fn pricing_schedules(&self) -> Result<PricingSchedules, ProviderError> {
        Ok(self.schedules.clone())
    }
}

/// Provider whose zone feed is down.
pub struct ZonesDownProvider;

impl MobilityDataProvider for ZonesDownProvider {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, ProviderError> {
        Ok(vec![vehicle("car-central", &CENTRAL_STATION)])
    }

    fn list_parking_zones(&self) -> Result<Vec<ParkingZone>, ProviderError> {
        Err(ProviderError::Decode("geozone feed unavailable".to_string()))
    }

    fn pricing_schedules(&self) -> Result<PricingSchedules, ProviderError> {
        Err(ProviderError::Decode("pricing feed unavailable".to_string()))
    }
}
