use serde_json::{Map, Value};

use crate::geometry::{BBox, Geometry};

/// Property holding the 2019 typology class description. The survey export
/// writes the full label text, not the numeric code.
pub const TYPOLOGY_LABEL_KEY: &str = "NY January 2019 typology_Type_1.19";

/// Property holding the census tract identifier.
pub const GEOID_KEY: &str = "geoid";

/// One census tract: its properties as exported, its footprint, and the
/// precomputed bounds used by the hit test.
#[derive(Debug, Clone, PartialEq)]
pub struct Tract {
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
    pub bbox: BBox,
}

impl Tract {
    /// The tract identifier. Some exports carry it as a JSON number, so a
    /// numeric value is formatted rather than dropped.
    pub fn geoid(&self) -> Option<String> {
        match self.properties.get(GEOID_KEY) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The typology class label, when the survey classified this tract.
    pub fn typology_label(&self) -> Option<&str> {
        self.properties.get(TYPOLOGY_LABEL_KEY).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::geometry::{LonLat, Polygon};

    fn tract_with_properties(properties: Value) -> Tract {
        let geometry = Geometry::Polygon(Polygon {
            rings: vec![vec![
                LonLat::new(0.0, 0.0),
                LonLat::new(1.0, 0.0),
                LonLat::new(1.0, 1.0),
                LonLat::new(0.0, 0.0),
            ]],
        });
        let bbox = BBox::of_geometry(&geometry).unwrap();
        let Value::Object(properties) = properties else {
            panic!("properties fixture must be an object");
        };
        Tract {
            properties,
            geometry,
            bbox,
        }
    }

    #[test]
    fn reads_schema_properties() {
        let tract = tract_with_properties(json!({
            GEOID_KEY: "36047050500",
            TYPOLOGY_LABEL_KEY: "LI - At Risk of Gentrification",
        }));
        assert_eq!(tract.geoid().as_deref(), Some("36047050500"));
        assert_eq!(
            tract.typology_label(),
            Some("LI - At Risk of Gentrification")
        );
    }

    #[test]
    fn numeric_geoid_is_formatted() {
        let tract = tract_with_properties(json!({ GEOID_KEY: 36047050500_i64 }));
        assert_eq!(tract.geoid().as_deref(), Some("36047050500"));
        assert_eq!(tract.typology_label(), None);
    }

    #[test]
    fn absent_properties_read_as_none() {
        let tract = tract_with_properties(json!({ "borough": "Brooklyn" }));
        assert_eq!(tract.geoid(), None);
        assert_eq!(tract.typology_label(), None);
    }
}
