//! Value types shared by routing and pricing.
//!
//! Every type here is created fresh per request and serializes to the
//! camelCase shape exposed to callers.

use serde::{Deserialize, Serialize};

use crate::haversine::distance;
use crate::polygon::MultiPolygon;

/// WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

/// A requested point-to-point leg. Times are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    pub start_coord: Coordinate,
    pub start_time: i64,
    pub end_coord: Coordinate,
    pub end_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub location: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            location,
            model: None,
            availability: None,
        }
    }

    /// Copy of this vehicle standing at `location`.
    pub fn relocated(&self, location: Coordinate) -> Self {
        Self {
            location,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingZone {
    pub id: String,
    pub is_parking_zone: bool,
    pub geometry: MultiPolygon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Walk,
    Drive,
}

/// One mode-homogeneous straight-line piece of a routed leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub mode: TravelMode,
    pub coords: [Coordinate; 2],
    /// Meters.
    pub distance: f64,
}

impl PathSegment {
    pub fn new(mode: TravelMode, from: Coordinate, to: Coordinate) -> Self {
        Self {
            mode,
            coords: [from, to],
            distance: distance(from, to),
        }
    }

    pub fn walk(from: Coordinate, to: Coordinate) -> Self {
        Self::new(TravelMode::Walk, from, to)
    }

    pub fn drive(from: Coordinate, to: Coordinate) -> Self {
        Self::new(TravelMode::Drive, from, to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleUsage {
    pub vehicle_id: String,
    pub pickup_location: Coordinate,
    pub dropoff_location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedLeg {
    pub start_coord: Coordinate,
    pub start_time: i64,
    pub end_coord: Coordinate,
    pub end_time: i64,
    #[serde(default)]
    pub paths: Vec<PathSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_usage: Option<VehicleUsage>,
}

impl RoutedLeg {
    /// A routed leg with no segments yet, carrying the request's endpoints.
    pub fn unrouted(leg: &Leg) -> Self {
        Self {
            start_coord: leg.start_coord,
            start_time: leg.start_time,
            end_coord: leg.end_coord,
            end_time: leg.end_time,
            paths: Vec::new(),
            vehicle_usage: None,
        }
    }

    pub fn has_drive(&self) -> bool {
        self.paths.iter().any(|path| path.mode == TravelMode::Drive)
    }

    /// Total drive distance in meters.
    pub fn drive_distance(&self) -> f64 {
        self.paths
            .iter()
            .filter(|path| path.mode == TravelMode::Drive)
            .map(|path| path.distance)
            .sum()
    }

    pub fn duration_minutes(&self) -> f64 {
        (self.end_time - self.start_time) as f64 / 60_000.0
    }

    pub fn vehicle_id(&self) -> Option<&str> {
        self.vehicle_usage
            .as_ref()
            .map(|usage| usage.vehicle_id.as_str())
    }
}

/// Per-unit rates in thousandths of the currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSchedule {
    pub unlock_fee: i64,
    pub book_unit_price: i64,
    pub minute_price: i64,
    pub kilometer_price: i64,
    pub pause_unit_price: i64,
    #[serde(default)]
    pub included_kilometers: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSchedules {
    #[serde(alias = "pricingPerKilometer")]
    pub per_kilometer: PricingSchedule,
    #[serde(alias = "pricingPerMinute")]
    pub per_minute: PricingSchedule,
}

/// Computed amounts, not rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub book_unit_price: i64,
    pub pause_unit_price: i64,
    pub unlock_fee: i64,
    pub minute_price: i64,
    pub kilometer_price: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedLeg {
    pub estimated_price: i64,
    pub price_breakdown: PriceBreakdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PricingOption {
    PerKilometer,
    PerMinute,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionEstimate {
    pub pricing_type: PricingOption,
    pub estimated_price: i64,
    pub legs: Vec<PricedLeg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPriceEstimate {
    pub per_kilometer: OptionEstimate,
    pub per_minute: OptionEstimate,
    pub cheapest_option: PricingOption,
}

impl TripPriceEstimate {
    pub fn cheapest(&self) -> &OptionEstimate {
        match self.cheapest_option {
            PricingOption::PerKilometer => &self.per_kilometer,
            PricingOption::PerMinute => &self.per_minute,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePosition {
    pub vehicle_id: String,
    pub location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub legs: Vec<RoutedLeg>,
    pub updated_vehicle_positions: Vec<VehiclePosition>,
}
