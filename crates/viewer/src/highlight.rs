use serde_json::Value;
use tracts::Geometry;

/// Backing state for the highlight source. Holds at most one geometry;
/// `set` and `clear` replace the whole contents in one step, so the source
/// never shows a partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighlightSource {
    current: Option<Geometry>,
}

impl HighlightSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, geometry: Geometry) {
        self.current = Some(geometry);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.current.as_ref()
    }

    /// The value to hand the engine source: the held geometry, or an empty
    /// collection when nothing is highlighted.
    pub fn to_geojson_value(&self) -> Value {
        match &self.current {
            Some(geometry) => tracts::geometry_to_geojson_value(geometry),
            None => tracts::empty_feature_collection(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tracts::{LonLat, Polygon};

    use super::*;

    #[test]
    fn starts_empty() {
        let source = HighlightSource::new();
        assert!(source.is_empty());
        assert_eq!(
            source.to_geojson_value(),
            json!({"type": "FeatureCollection", "features": []})
        );
    }

    #[test]
    fn set_then_clear_round_trips() {
        let mut source = HighlightSource::new();
        source.set(Geometry::Polygon(Polygon {
            rings: vec![vec![
                LonLat::new(0.0, 0.0),
                LonLat::new(1.0, 0.0),
                LonLat::new(1.0, 1.0),
                LonLat::new(0.0, 0.0),
            ]],
        }));
        assert!(!source.is_empty());
        assert_eq!(source.to_geojson_value()["type"], "Polygon");

        source.clear();
        assert!(source.is_empty());
        assert_eq!(source.to_geojson_value()["type"], "FeatureCollection");
    }
}
