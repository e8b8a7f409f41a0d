use serde_json::Value;

use crate::geojson::{self, GeoJsonError};
use crate::geometry::{BBox, LonLat};
use crate::tract::Tract;

/// The loaded dataset, in file order. Feature order is preserved because
/// the hit test resolves overlap ties by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TractSet {
    tracts: Vec<Tract>,
    skipped: usize,
}

impl TractSet {
    pub fn from_geojson_str(text: &str) -> Result<Self, GeoJsonError> {
        let value: Value =
            serde_json::from_str(text).map_err(|_| GeoJsonError::NotAFeatureCollection)?;
        Self::from_geojson_value(&value)
    }

    /// Builds the set from a parsed `FeatureCollection`. Features with a
    /// non-areal geometry kind are skipped and counted; malformed features
    /// fail the whole load.
    pub fn from_geojson_value(value: &Value) -> Result<Self, GeoJsonError> {
        let mut tracts = Vec::new();
        let mut skipped = 0usize;
        for (index, feature) in geojson::collection_features(value)?.iter().enumerate() {
            let invalid = |reason: String| GeoJsonError::InvalidFeature { index, reason };
            let Some(geometry) = geojson::parse_feature_geometry(feature).map_err(invalid)?
            else {
                skipped += 1;
                continue;
            };
            let bbox = BBox::of_geometry(&geometry)
                .ok_or_else(|| invalid("geometry has no vertices".to_string()))?;
            let properties = match feature.get("properties") {
                Some(Value::Object(map)) => map.clone(),
                _ => serde_json::Map::new(),
            };
            tracts.push(Tract {
                properties,
                geometry,
                bbox,
            });
        }
        Ok(Self { tracts, skipped })
    }

    pub fn len(&self) -> usize {
        self.tracts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracts.is_empty()
    }

    /// Features that were dropped at load time for having a non-areal
    /// geometry kind.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn get(&self, index: usize) -> Option<&Tract> {
        self.tracts.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tract> {
        self.tracts.iter()
    }

    /// Finds the tract under a point.
    ///
    /// Ordering contract:
    /// - Tracts are tested in feature order; when several contain the point,
    ///   the lowest index wins.
    /// - The bbox check is a rejection test only and never changes the
    ///   result.
    pub fn hit_test(&self, point: LonLat) -> Option<(usize, &Tract)> {
        self.tracts
            .iter()
            .enumerate()
            .find(|(_, tract)| tract.bbox.contains(point) && tract.geometry.contains(point))
    }
}
