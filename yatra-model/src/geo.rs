//! Geographic primitives shared across the platform.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate pair.
///
/// Serializes as a two-element `[lat, lng]` array, the shape the dashboard
/// map layer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

impl GeoPoint {
    /// Build a point from decimal-degree components.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for GeoPoint {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(point: GeoPoint) -> Self {
        [point.lat, point.lng]
    }
}

/// A closed geographic polygon marking a restricted area.
///
/// The zone is immutable for the process lifetime; consumers run containment
/// checks against it to flag tourists inside the area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestrictedZone {
    vertices: Vec<GeoPoint>,
}

impl RestrictedZone {
    /// Build a zone from its boundary vertices, in order. The closing edge
    /// back to the first vertex is implicit.
    pub fn new(vertices: Vec<GeoPoint>) -> Self {
        Self { vertices }
    }

    /// The boundary vertices in insertion order.
    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    /// Ray-casting point-in-polygon test.
    ///
    /// Degenerate zones (fewer than three vertices) contain nothing. Points
    /// exactly on an edge may land on either side; callers treating the
    /// boundary as significant should not rely on edge behavior.
    pub fn contains(&self, point: GeoPoint) -> bool {
        let verts = &self.vertices;
        if verts.len() < 3 {
            return false;
        }

        let (x, y) = (point.lng, point.lat);
        let mut inside = false;
        let mut j = verts.len() - 1;
        for i in 0..verts.len() {
            let (xi, yi) = (verts[i].lng, verts[i].lat);
            let (xj, yj) = (verts[j].lng, verts[j].lat);
            if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}
