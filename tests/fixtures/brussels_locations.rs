//! Real Brussels locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

use trip_planner::model::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coord(&self) -> Coordinate {
        Coordinate::new(self.lng, self.lat)
    }
}

pub const GRAND_PLACE: Location = Location::new("Grand-Place", 50.8467, 4.3525);
pub const CENTRAL_STATION: Location = Location::new("Bruxelles-Central", 50.8455, 4.3571);
pub const SABLON: Location = Location::new("Place du Grand Sablon", 50.8400, 4.3560);
pub const AVENUE_LOUISE: Location = Location::new("Avenue Louise", 50.8300, 4.3590);
pub const SCHUMAN: Location = Location::new("Rond-point Schuman", 50.8427, 4.3806);
pub const CINQUANTENAIRE: Location = Location::new("Parc du Cinquantenaire", 50.8404, 4.3925);
pub const ATOMIUM: Location = Location::new("Atomium", 50.8949, 4.3415);
