//! GeoJSON parsing and emission for the tract dataset.
//!
//! Only the subset the dataset uses is supported: a `FeatureCollection` of
//! `Polygon` and `MultiPolygon` features. Other geometry kinds are legal in
//! the input and skipped; structural errors are reported with the index of
//! the offending feature.

use std::error::Error;
use std::fmt;

use serde_json::{Value, json};

use crate::geometry::{Geometry, LonLat, Polygon, Ring};

#[derive(Debug)]
pub enum GeoJsonError {
    NotAFeatureCollection,
    InvalidFeature { index: usize, reason: String },
}

impl fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoJsonError::NotAFeatureCollection => {
                write!(f, "expected a GeoJSON FeatureCollection")
            }
            GeoJsonError::InvalidFeature { index, reason } => {
                write!(f, "invalid feature at index {index}: {reason}")
            }
        }
    }
}

impl Error for GeoJsonError {}

/// Extracts the feature array from a `FeatureCollection` value.
pub(crate) fn collection_features(value: &Value) -> Result<&Vec<Value>, GeoJsonError> {
    if value.get("type").and_then(Value::as_str) != Some("FeatureCollection") {
        return Err(GeoJsonError::NotAFeatureCollection);
    }
    value
        .get("features")
        .and_then(Value::as_array)
        .ok_or(GeoJsonError::NotAFeatureCollection)
}

/// Parses one feature's geometry. `Ok(None)` means a recognized non-areal
/// kind the caller should skip; `Err` means the geometry is malformed or of
/// an unknown kind.
pub(crate) fn parse_feature_geometry(feature: &Value) -> Result<Option<Geometry>, String> {
    let geometry = match feature.get("geometry") {
        Some(g) if !g.is_null() => g,
        _ => return Err("missing geometry".to_string()),
    };
    let kind = geometry
        .get("type")
        .and_then(Value::as_str)
        .ok_or("geometry has no type")?;
    let coordinates = || {
        geometry
            .get("coordinates")
            .ok_or_else(|| "geometry has no coordinates".to_string())
    };
    match kind {
        "Polygon" => Ok(Some(Geometry::Polygon(parse_polygon(coordinates()?)?))),
        "MultiPolygon" => {
            let parts = coordinates()?
                .as_array()
                .ok_or("MultiPolygon coordinates must be an array")?;
            let polygons = parts
                .iter()
                .map(parse_polygon)
                .collect::<Result<Vec<Polygon>, String>>()?;
            Ok(Some(Geometry::MultiPolygon(polygons)))
        }
        "Point" | "MultiPoint" | "LineString" | "MultiLineString" | "GeometryCollection" => {
            Ok(None)
        }
        other => Err(format!("unsupported geometry type {other:?}")),
    }
}

fn parse_polygon(value: &Value) -> Result<Polygon, String> {
    let rings = value
        .as_array()
        .ok_or("Polygon coordinates must be an array of rings")?
        .iter()
        .map(parse_ring)
        .collect::<Result<Vec<Ring>, String>>()?;
    if rings.is_empty() {
        return Err("Polygon has no rings".to_string());
    }
    Ok(Polygon { rings })
}

fn parse_ring(value: &Value) -> Result<Ring, String> {
    value
        .as_array()
        .ok_or("ring must be an array of positions")?
        .iter()
        .map(parse_position)
        .collect()
}

fn parse_position(value: &Value) -> Result<LonLat, String> {
    let parts = value.as_array().ok_or("position must be an array")?;
    // GeoJSON allows a third (elevation) element; ignore it.
    let (Some(lon), Some(lat)) = (
        parts.first().and_then(Value::as_f64),
        parts.get(1).and_then(Value::as_f64),
    ) else {
        return Err("position must hold two numbers".to_string());
    };
    Ok(LonLat::new(lon, lat))
}

/// Emits the geometry back out as a GeoJSON geometry object.
pub fn geometry_to_geojson_value(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Polygon(polygon) => json!({
            "type": "Polygon",
            "coordinates": polygon_coordinates(polygon),
        }),
        Geometry::MultiPolygon(polygons) => json!({
            "type": "MultiPolygon",
            "coordinates": polygons.iter().map(polygon_coordinates).collect::<Vec<_>>(),
        }),
    }
}

fn polygon_coordinates(polygon: &Polygon) -> Value {
    let rings: Vec<Value> = polygon
        .rings
        .iter()
        .map(|ring| {
            ring.iter()
                .map(|p| json!([p.lon_deg, p.lat_deg]))
                .collect::<Vec<_>>()
                .into()
        })
        .collect();
    rings.into()
}

/// The canonical "nothing here" payload for geojson sources.
pub fn empty_feature_collection() -> Value {
    json!({
        "type": "FeatureCollection",
        "features": [],
    })
}
