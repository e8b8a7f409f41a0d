//! Census tract dataset: GeoJSON ingest, schema accessors, and
//! point-in-polygon hit testing over the loaded features.

pub mod geojson;
pub mod geometry;
pub mod set;
pub mod tract;

pub use geojson::*;
pub use geometry::*;
pub use set::*;
pub use tract::*;
