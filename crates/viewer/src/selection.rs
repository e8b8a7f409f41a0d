use tracts::{Geometry, Tract};

/// Click-selection state. The map shows either no selection or exactly one
/// selected tract; every click resolves to one of the two, so stale
/// highlights cannot survive a later click.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(SelectedTract),
}

impl Selection {
    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    pub fn selected(&self) -> Option<&SelectedTract> {
        match self {
            Selection::Selected(tract) => Some(tract),
            Selection::Unselected => None,
        }
    }
}

/// What the viewer keeps of a clicked tract. Both properties are optional
/// in the dataset; the geometry always exists because the hit test found
/// the tract through it.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedTract {
    pub geoid: Option<String>,
    pub label: Option<String>,
    pub geometry: Geometry,
}

impl SelectedTract {
    pub fn from_tract(tract: &Tract) -> Self {
        Self {
            geoid: tract.geoid(),
            label: tract.typology_label().map(str::to_string),
            geometry: tract.geometry.clone(),
        }
    }
}
