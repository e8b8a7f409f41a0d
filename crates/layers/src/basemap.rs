//! Basemap layers this project touches. The dark style ships with
//! near-black water; recoloring it keeps the shoreline legible next to the
//! blue low-income typology classes.

use typology::Color;

pub const WATER_LAYER_ID: &str = "water";
pub const WATER_FILL_COLOR: Color = Color::rgb(0xa4, 0xbe, 0xe8);

/// First symbol layer of the basemap style; the choropleth fill is inserted
/// beneath it so place labels stay on top.
pub const WATERWAY_LABEL_LAYER_ID: &str = "waterway-label";
