use serde::Serialize;

use crate::source::TYPOLOGY_SOURCE_ID;
use crate::symbology::CategoricalColor;

pub const TYPOLOGY_FILL_LAYER_ID: &str = "typology-fill";

/// Opacity of the choropleth fill, constant across zoom so the basemap
/// stays readable underneath.
pub const TYPOLOGY_FILL_OPACITY: f64 = 0.7;

/// A fill layer definition in the engine's layer JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillLayer {
    pub id: String,
    #[serde(rename = "type")]
    kind: &'static str,
    pub source: String,
    pub paint: FillPaint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FillPaint {
    #[serde(rename = "fill-opacity")]
    pub opacity: f64,
    #[serde(rename = "fill-color")]
    pub color: CategoricalColor,
}

impl FillLayer {
    pub fn new(id: impl Into<String>, source: impl Into<String>, paint: FillPaint) -> Self {
        Self {
            id: id.into(),
            kind: "fill",
            source: source.into(),
            paint,
        }
    }
}

/// The choropleth itself: every tract filled with its typology class color,
/// unclassified tracts in gray.
pub fn typology_fill() -> FillLayer {
    FillLayer::new(
        TYPOLOGY_FILL_LAYER_ID,
        TYPOLOGY_SOURCE_ID,
        FillPaint {
            opacity: TYPOLOGY_FILL_OPACITY,
            color: CategoricalColor::from_catalog(tracts::TYPOLOGY_LABEL_KEY),
        },
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fill_layer_reads_the_dataset_label_property() {
        let layer = typology_fill();
        assert_eq!(layer.id, "typology-fill");
        assert_eq!(layer.source, "typology-data");
        assert_eq!(layer.paint.opacity, 0.7);
        assert_eq!(
            layer.paint.color.property,
            "NY January 2019 typology_Type_1.19"
        );
        assert_eq!(layer.paint.color.stops.len(), 10);
    }

    #[test]
    fn fill_layer_serializes_for_the_engine() {
        let value = serde_json::to_value(typology_fill()).unwrap();
        assert_eq!(value["type"], "fill");
        assert_eq!(value["paint"]["fill-opacity"], 0.7);
        assert_eq!(value["paint"]["fill-color"]["type"], "categorical");
        assert_eq!(value["paint"]["fill-color"]["default"], "#bab8b6");
    }
}
