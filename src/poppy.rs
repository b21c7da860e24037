//! HTTP adapter for the Poppy mobility API.
//!
//! Fetches vehicles, geozones and pricing and maps the upstream records to
//! the planner's model. Records that cannot be placed on the map are
//! skipped with a warning rather than failing the whole feed.

use std::env;

use geojson::{Geometry, PolygonType, Value};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::ProviderError;
use crate::model::{Coordinate, ParkingZone, PricingSchedules, Vehicle};
use crate::polygon::{MultiPolygon, Polygon};
use crate::traits::MobilityDataProvider;

#[derive(Debug, Clone)]
pub struct PoppyConfig {
    pub base_url: String,
    pub city_id: String,
    pub geozone_id: String,
    pub timeout_secs: u64,
}

impl Default for PoppyConfig {
    fn default() -> Self {
        Self {
            base_url: "https://poppy.red".to_string(),
            city_id: "a88ea9d0-3d5e-4002-8bbf-775313a5973c".to_string(),
            geozone_id: "62c4bd62-881c-473e-8a6b-fbedfd276739".to_string(),
            timeout_secs: 10,
        }
    }
}

impl PoppyConfig {
    /// Defaults overridden by `POPPY_BASE_URL`, `POPPY_CITY_ID`,
    /// `POPPY_GEOZONE_ID` and `POPPY_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = env::var("POPPY_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(city_id) = env::var("POPPY_CITY_ID") {
            config.city_id = city_id;
        }
        if let Ok(geozone_id) = env::var("POPPY_GEOZONE_ID") {
            config.geozone_id = geozone_id;
        }
        if let Some(secs) = env::var("POPPY_TIMEOUT_SECS")
            .ok()
            .and_then(|value| value.parse().ok())
        {
            config.timeout_secs = secs;
        }
        config
    }

    pub fn vehicles_url(&self) -> String {
        format!("{}/api/v3/cities/{}/vehicles", self.base(), self.city_id)
    }

    pub fn geozones_url(&self) -> String {
        format!("{}/api/v3/geozones/{}", self.base(), self.geozone_id)
    }

    pub fn pricing_url(&self) -> String {
        format!("{}/api/v3/cities/{}/pricing", self.base(), self.city_id)
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

#[derive(Debug, Clone)]
pub struct PoppyClient {
    config: PoppyConfig,
    client: reqwest::blocking::Client,
}

impl PoppyClient {
    pub fn new(config: PoppyConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ProviderError> {
        debug!(url, "fetching");
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())?
            .json::<T>()?;
        Ok(body)
    }
}

impl MobilityDataProvider for PoppyClient {
    fn list_vehicles(&self) -> Result<Vec<Vehicle>, ProviderError> {
        let records: Vec<PoppyVehicle> = self.get_json(&self.config.vehicles_url())?;
        Ok(decode_vehicles(records))
    }

    fn list_parking_zones(&self) -> Result<Vec<ParkingZone>, ProviderError> {
        let records: Vec<PoppyGeozone> = self.get_json(&self.config.geozones_url())?;
        Ok(decode_zones(records))
    }

    fn pricing_schedules(&self) -> Result<PricingSchedules, ProviderError> {
        self.get_json(&self.config.pricing_url())
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoppyVehicle {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    uuid: Option<String>,
    #[serde(default)]
    location: Option<PoppyLocation>,
    #[serde(default)]
    location_latitude: Option<f64>,
    #[serde(default)]
    location_longitude: Option<f64>,
    #[serde(default)]
    model: Option<PoppyText>,
    #[serde(default)]
    availability: Option<PoppyText>,
}

#[derive(Debug, Deserialize)]
struct PoppyLocation {
    latitude: f64,
    longitude: f64,
}

/// A descriptive field that is sometimes a string and sometimes an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PoppyText {
    Text(String),
    Other(IgnoredAny),
}

impl PoppyText {
    fn into_text(self) -> Option<String> {
        match self {
            PoppyText::Text(text) => Some(text),
            PoppyText::Other(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoppyGeozone {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    uuid: Option<String>,
    #[serde(default)]
    geofencing_type: Option<String>,
    #[serde(default)]
    properties: Option<PoppyZoneProperties>,
    #[serde(default)]
    geom: Option<PoppyFeature>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct PoppyZoneProperties {
    #[serde(default)]
    parking: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct PoppyFeature {
    geometry: Geometry,
}

pub fn decode_vehicles(records: Vec<PoppyVehicle>) -> Vec<Vehicle> {
    let total = records.len();
    let vehicles: Vec<Vehicle> = records.into_iter().filter_map(decode_vehicle).collect();
    if vehicles.len() < total {
        warn!(skipped = total - vehicles.len(), "vehicles without an id or position");
    }
    vehicles
}

fn decode_vehicle(record: PoppyVehicle) -> Option<Vehicle> {
    let Some(id) = record.id.or(record.uuid) else {
        warn!("vehicle has no id");
        return None;
    };
    let location = match (record.location_longitude, record.location_latitude, record.location) {
        (Some(lng), Some(lat), _) => Coordinate::new(lng, lat),
        (_, _, Some(location)) => Coordinate::new(location.longitude, location.latitude),
        _ => {
            warn!(vehicle = %id, "vehicle has no position");
            return None;
        }
    };

    Some(Vehicle {
        id,
        location,
        model: record.model.and_then(PoppyText::into_text),
        availability: record.availability.and_then(PoppyText::into_text),
    })
}

pub fn decode_zones(records: Vec<PoppyGeozone>) -> Vec<ParkingZone> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| decode_zone(index, record))
        .collect()
}

fn decode_zone(index: usize, record: PoppyGeozone) -> Option<ParkingZone> {
    let id = record
        .id
        .or(record.uuid)
        .unwrap_or_else(|| format!("zone-{}", index));
    let is_parking_zone = record.geofencing_type.as_deref() == Some("parking")
        || record
            .properties
            .as_ref()
            .and_then(|properties| properties.parking)
            .unwrap_or(false);

    let Some(geometry) = record.geom.map(|feature| feature.geometry).or(record.geometry) else {
        warn!(zone = %id, "zone has no geometry");
        return None;
    };

    let geometry = match geometry.value {
        Value::MultiPolygon(polygons) => {
            MultiPolygon::new(polygons.into_iter().map(decode_polygon).collect())
        }
        Value::Polygon(rings) => decode_polygon(rings).into(),
        other => {
            warn!(zone = %id, kind = geometry_kind(&other), "unsupported zone geometry");
            return None;
        }
    };

    Some(ParkingZone {
        id,
        is_parking_zone,
        geometry,
    })
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn decode_polygon(rings: PolygonType) -> Polygon {
    Polygon::new(
        rings
            .into_iter()
            .map(|ring| ring.iter().filter_map(|position| decode_position(position)).collect())
            .collect(),
    )
}

/// `[lng, lat, ...]`; extra ordinates are ignored.
fn decode_position(position: &[f64]) -> Option<Coordinate> {
    match position {
        [lng, lat, ..] => Some(Coordinate::new(*lng, *lat)),
        _ => None,
    }
}
