use layers::basemap::{WATER_FILL_COLOR, WATER_LAYER_ID, WATERWAY_LABEL_LAYER_ID};
use layers::{GeoJsonSource, HIGHLIGHT_SOURCE_ID, TYPOLOGY_DATA_PATH, TYPOLOGY_SOURCE_ID};
use serde_json::json;
use tracts::{LonLat, TractSet};

use crate::config::MapConfig;
use crate::highlight::HighlightSource;
use crate::protocol::{ClickOutcome, Cursor, EngineOp, LayerSpec};
use crate::selection::{SelectedTract, Selection};

/// The style operations applied once the basemap has loaded.
///
/// Ordering contract:
/// - The water recolor precedes everything else.
/// - Each source is added before any layer that reads it.
/// - The fill is anchored beneath the basemap labels; both line layers go
///   on top of the stack, the highlight outline last so it is never hidden
///   by the tract borders.
pub fn style_ops() -> Vec<EngineOp> {
    vec![
        EngineOp::SetPaintProperty {
            layer: WATER_LAYER_ID.to_string(),
            name: "fill-color".to_string(),
            value: json!(WATER_FILL_COLOR),
        },
        EngineOp::AddSource {
            id: TYPOLOGY_SOURCE_ID.to_string(),
            source: GeoJsonSource::from_url(TYPOLOGY_DATA_PATH),
        },
        EngineOp::AddLayer {
            layer: LayerSpec::Fill(layers::typology_fill()),
            before: Some(WATERWAY_LABEL_LAYER_ID.to_string()),
        },
        EngineOp::AddLayer {
            layer: LayerSpec::Line(layers::typology_line()),
            before: None,
        },
        EngineOp::AddSource {
            id: HIGHLIGHT_SOURCE_ID.to_string(),
            source: GeoJsonSource::empty_collection(),
        },
        EngineOp::AddLayer {
            layer: LayerSpec::Line(layers::highlight_line()),
            before: None,
        },
    ]
}

/// Stateless click resolution: what a click at `point` does to the page,
/// given the loaded dataset. Used directly by the HTTP handler and the CLI.
pub fn inspect_at(tracts: &TractSet, point: LonLat) -> ClickOutcome {
    match tracts.hit_test(point) {
        Some((_, tract)) => ClickOutcome::selected(&SelectedTract::from_tract(tract)),
        None => ClickOutcome::cleared(),
    }
}

/// One viewer's session: the dataset, the current selection, and whether
/// the style has been configured yet.
///
/// The engine fires `style.load` once per page; the session enforces the
/// once by handing out the style operations a single time.
#[derive(Debug, Clone)]
pub struct MapSession {
    config: MapConfig,
    tracts: TractSet,
    selection: Selection,
    highlight: HighlightSource,
    cursor: Cursor,
    styled: bool,
}

impl MapSession {
    pub fn new(config: MapConfig, tracts: TractSet) -> Self {
        Self {
            config,
            tracts,
            selection: Selection::Unselected,
            highlight: HighlightSource::new(),
            cursor: Cursor::Default,
            styled: false,
        }
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn tracts(&self) -> &TractSet {
        &self.tracts
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn highlight(&self) -> &HighlightSource {
        &self.highlight
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Returns the style operations on the first call, nothing afterwards.
    /// Re-applying the operations would fail in the engine (duplicate
    /// source and layer ids), so repeats are absorbed here.
    pub fn on_style_loaded(&mut self) -> Vec<EngineOp> {
        if self.styled {
            return Vec::new();
        }
        self.styled = true;
        style_ops()
    }

    /// Resolves a click and records its effect. Every click lands in one of
    /// two states: exactly one tract selected and highlighted, or nothing
    /// selected and the highlight empty.
    pub fn on_click(&mut self, point: LonLat) -> ClickOutcome {
        match self.tracts.hit_test(point) {
            Some((_, tract)) => {
                let selected = SelectedTract::from_tract(tract);
                let outcome = ClickOutcome::selected(&selected);
                self.cursor = Cursor::Pointer;
                self.highlight.set(selected.geometry.clone());
                self.selection = Selection::Selected(selected);
                outcome
            }
            None => {
                self.cursor = Cursor::Default;
                self.highlight.clear();
                self.selection = Selection::Unselected;
                ClickOutcome::cleared()
            }
        }
    }
}
