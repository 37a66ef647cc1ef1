//! Parcel geometry as captured from the drawing tool.
//!
//! The feature is kept as the raw GeoJSON object that was drawn. Nothing is
//! validated on the client: a malformed shape is forwarded as-is and the
//! backend decides whether it can work with it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GeoJSON Feature describing the parcel of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParcelFeature(Value);

impl ParcelFeature {
    /// Wrap a GeoJSON value.
    ///
    /// A bare geometry object is wrapped into a Feature with empty
    /// properties. Features and anything unrecognised pass through unchanged.
    pub fn from_geojson(value: Value) -> Self {
        match serde_json::from_value::<geojson::Geometry>(value.clone()) {
            Ok(geometry) => Self::from_geometry(geometry),
            Err(_) => Self(value),
        }
    }

    /// Build a Feature around a geometry
    pub fn from_geometry(geometry: geojson::Geometry) -> Self {
        let feature = geojson::Feature {
            bbox: None,
            geometry: Some(geometry),
            id: None,
            properties: Some(geojson::JsonObject::new()),
            foreign_members: None,
        };
        Self(serde_json::to_value(&feature).unwrap_or(Value::Null))
    }

    /// Create a Polygon feature from `[lon, lat]` rings
    pub fn polygon(rings: Vec<Vec<[f64; 2]>>) -> Self {
        let rings = rings
            .into_iter()
            .map(|ring| ring.into_iter().map(|[x, y]| vec![x, y]).collect())
            .collect();
        Self::from_geometry(geojson::Geometry::new(geojson::Value::Polygon(rings)))
    }

    /// Create a closed rectangular Polygon from a lon/lat bounding box
    pub fn rectangle(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self::polygon(vec![vec![
            [min_lon, min_lat],
            [max_lon, min_lat],
            [max_lon, max_lat],
            [min_lon, max_lat],
            [min_lon, min_lat],
        ]])
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }

    pub fn into_json(self) -> Value {
        self.0
    }

    /// Geometry type name, if the feature carries a recognisable geometry
    pub fn geometry_type(&self) -> Option<&str> {
        self.0.get("geometry")?.get("type")?.as_str()
    }

    /// Number of positions in the outer ring of a Polygon (0 otherwise)
    pub fn vertex_count(&self) -> usize {
        if self.geometry_type() != Some("Polygon") {
            return 0;
        }
        self.0
            .get("geometry")
            .and_then(|g| g.get("coordinates"))
            .and_then(|c| c.get(0))
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }
}
