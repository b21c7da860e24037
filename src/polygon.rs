//! Zone geometry and point containment.
//!
//! Rings are implicitly closed; a repeated closing vertex is harmless.
//! Longitude is treated as x and latitude as y.
//!
//! Boundary convention: the crossing test is half-open, so points on a
//! lower or left edge count as inside and points on an upper or right
//! edge count as outside. For an axis-aligned square the lower-left
//! vertex is inside and the upper-right vertex is outside.

use serde::{Deserialize, Serialize};

use crate::model::Coordinate;

pub type Ring = Vec<Coordinate>;

/// Outer boundary followed by zero or more holes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    pub fn exterior(&self) -> Option<&Ring> {
        self.rings.first()
    }

    pub fn holes(&self) -> &[Ring] {
        self.rings.get(1..).unwrap_or_default()
    }

    /// Inside the outer ring and inside none of the holes.
    pub fn contains(&self, point: Coordinate) -> bool {
        match self.exterior() {
            Some(exterior) => {
                ring_contains(exterior, point)
                    && !self.holes().iter().any(|hole| ring_contains(hole, point))
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn contains(&self, point: Coordinate) -> bool {
        self.polygons.iter().any(|polygon| polygon.contains(point))
    }

    /// Every vertex of every ring, in storage order.
    pub fn vertices(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.polygons
            .iter()
            .flat_map(|polygon| polygon.rings.iter())
            .flat_map(|ring| ring.iter().copied())
    }
}

impl From<Polygon> for MultiPolygon {
    fn from(polygon: Polygon) -> Self {
        Self::new(vec![polygon])
    }
}

/// Even-odd ray casting against a single ring.
pub fn ring_contains(ring: &[Coordinate], point: Coordinate) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let (x, y) = (point.lng, point.lat);
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (xi, yi) = (ring[i].lng, ring[i].lat);
        let (xj, yj) = (ring[j].lng, ring[j].lat);
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

pub fn point_in_polygon(point: Coordinate, polygon: &Polygon) -> bool {
    polygon.contains(point)
}

pub fn point_in_multi_polygon(point: Coordinate, geometry: &MultiPolygon) -> bool {
    geometry.contains(point)
}
