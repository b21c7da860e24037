//! Seams between the planning core and its collaborators.

use crate::error::ProviderError;
use crate::model::{Coordinate, ParkingZone, PricingSchedules, Vehicle};

/// Read-only feeds from the upstream mobility-data provider.
///
/// Implementations own transport concerns (timeouts, retries). The core
/// only sees already-decoded entities.
pub trait MobilityDataProvider {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, ProviderError>;

    fn list_parking_zones(&self) -> Result<Vec<ParkingZone>, ProviderError>;

    fn pricing_schedules(&self) -> Result<PricingSchedules, ProviderError>;
}

/// How "near" a parking zone is to a coordinate, and where to leave the
/// vehicle when the destination lies outside it.
pub trait ZoneDistance {
    /// Distance in meters, or `None` when the zone has no usable geometry.
    fn distance_to_zone(&self, coord: Coordinate, zone: &ParkingZone) -> Option<f64>;

    /// Dropoff point in the zone for reaching `target`.
    fn dropoff_point(&self, zone: &ParkingZone, target: Coordinate) -> Option<Coordinate>;
}

impl<P: MobilityDataProvider + ?Sized> MobilityDataProvider for &P {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, ProviderError> {
        (**self).list_vehicles()
    }

    fn list_parking_zones(&self) -> Result<Vec<ParkingZone>, ProviderError> {
        (**self).list_parking_zones()
    }

    fn pricing_schedules(&self) -> Result<PricingSchedules, ProviderError> {
        (**self).pricing_schedules()
    }
}
