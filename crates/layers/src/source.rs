use serde::Serialize;
use serde_json::Value;

/// Source feeding the choropleth fill and outline layers.
pub const TYPOLOGY_SOURCE_ID: &str = "typology-data";

/// Source feeding the selection highlight outline.
pub const HIGHLIGHT_SOURCE_ID: &str = "highlight-feature";

/// Where the page fetches the tract dataset from, relative to its own URL.
pub const TYPOLOGY_DATA_PATH: &str = "./data/census-typologies.geojson";

/// A geojson source definition for the engine. `data` is either a URL the
/// engine fetches itself or an inline GeoJSON value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonSource {
    #[serde(rename = "type")]
    kind: &'static str,
    pub data: SourceData,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SourceData {
    Url(String),
    Inline(Value),
}

impl GeoJsonSource {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            kind: "geojson",
            data: SourceData::Url(url.into()),
        }
    }

    pub fn inline(data: Value) -> Self {
        Self {
            kind: "geojson",
            data: SourceData::Inline(data),
        }
    }

    /// An inline source holding no features, the initial state of the
    /// highlight source.
    pub fn empty_collection() -> Self {
        Self::inline(tracts::empty_feature_collection())
    }
}
