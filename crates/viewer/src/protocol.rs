//! Plain-data contract between the session and the page script driving the
//! map engine. Everything here serializes to JSON the script applies
//! verbatim, so the Rust side stays the single owner of map semantics.

use layers::{FillLayer, GeoJsonSource, LineLayer};
use serde::Serialize;
use serde_json::Value;

use crate::selection::SelectedTract;

/// One imperative step against the engine's style, applied in order once
/// the basemap style has loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EngineOp {
    /// Overrides a paint property of an existing basemap layer.
    SetPaintProperty {
        layer: String,
        name: String,
        value: Value,
    },
    AddSource {
        id: String,
        source: GeoJsonSource,
    },
    AddLayer {
        layer: LayerSpec,
        /// Existing layer to insert beneath. `None` appends on top.
        #[serde(skip_serializing_if = "Option::is_none")]
        before: Option<String>,
    },
}

/// The layer definitions this viewer adds. Untagged: each serializes to
/// its own engine layer object, which already carries a `type` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LayerSpec {
    Fill(FillLayer),
    Line(LineLayer),
}

impl LayerSpec {
    pub fn id(&self) -> &str {
        match self {
            LayerSpec::Fill(layer) => &layer.id,
            LayerSpec::Line(layer) => &layer.id,
        }
    }
}

/// Mouse cursor over the map canvas. Serializes to the CSS cursor value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
}

/// Text for the two inspection panel fields. Field names match the page
/// element ids they land in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelText {
    pub address: String,
    pub landuse: String,
}

impl PanelText {
    pub fn describe(tract: &SelectedTract) -> Self {
        Self {
            address: format!("GEOID: {}", tract.geoid.as_deref().unwrap_or("unknown")),
            landuse: tract
                .label
                .clone()
                .unwrap_or_else(|| typology::MISSING_DATA.description.to_string()),
        }
    }
}

/// Everything a click changes on the page. The panel is only written on a
/// hit; a miss leaves the previous text in place, matching the published
/// page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickOutcome {
    pub cursor: Cursor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panel: Option<PanelText>,
    /// Replacement data for the highlight source: the clicked tract's
    /// geometry, or an empty collection on a miss.
    pub highlight: Value,
}

impl ClickOutcome {
    pub fn selected(tract: &SelectedTract) -> Self {
        Self {
            cursor: Cursor::Pointer,
            panel: Some(PanelText::describe(tract)),
            highlight: tracts::geometry_to_geojson_value(&tract.geometry),
        }
    }

    pub fn cleared() -> Self {
        Self {
            cursor: Cursor::Default,
            panel: None,
            highlight: tracts::empty_feature_collection(),
        }
    }
}
