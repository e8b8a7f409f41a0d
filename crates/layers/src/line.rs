use serde::Serialize;
use typology::Color;

use crate::source::{HIGHLIGHT_SOURCE_ID, TYPOLOGY_SOURCE_ID};
use crate::symbology::{LineOpacity, ZoomRamp};

pub const TYPOLOGY_LINE_LAYER_ID: &str = "typology-line";
pub const HIGHLIGHT_LINE_LAYER_ID: &str = "highlight-line";

/// A line layer definition in the engine's layer JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLayer {
    pub id: String,
    #[serde(rename = "type")]
    kind: &'static str,
    pub source: String,
    pub paint: LinePaint,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePaint {
    #[serde(rename = "line-color")]
    pub color: Color,
    #[serde(rename = "line-width", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(rename = "line-opacity")]
    pub opacity: LineOpacity,
}

impl LineLayer {
    pub fn new(id: impl Into<String>, source: impl Into<String>, paint: LinePaint) -> Self {
        Self {
            id: id.into(),
            kind: "line",
            source: source.into(),
            paint,
        }
    }
}

/// Tract borders, faded out entirely below zoom 14 so the city-wide view
/// reads as solid color fields.
pub fn typology_line() -> LineLayer {
    LineLayer::new(
        TYPOLOGY_LINE_LAYER_ID,
        TYPOLOGY_SOURCE_ID,
        LinePaint {
            color: Color::rgb(0, 0, 0),
            width: None,
            opacity: LineOpacity::Ramp(ZoomRamp::new(vec![(14.0, 0.0), (14.8, 1.0)])),
        },
    )
}

/// Outline of the clicked tract, visible at every zoom.
pub fn highlight_line() -> LineLayer {
    LineLayer::new(
        HIGHLIGHT_LINE_LAYER_ID,
        HIGHLIGHT_SOURCE_ID,
        LinePaint {
            color: Color::rgb(0, 0, 0),
            width: Some(2.0),
            opacity: LineOpacity::Constant(0.7),
        },
    )
}
