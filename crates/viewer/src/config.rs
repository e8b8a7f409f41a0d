use serde::Serialize;

/// Construction parameters for the map: which element to mount into, the
/// basemap style, and the initial camera.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapConfig {
    pub container: String,
    pub style_url: String,
    /// Lon/lat of the initial view, GeoJSON coordinate order.
    pub center: [f64; 2],
    pub zoom: f64,
    pub navigation_control: bool,
}

impl Default for MapConfig {
    /// The published view: dark basemap centered on New York City, zoomed
    /// to show all five boroughs.
    fn default() -> Self {
        Self {
            container: "mapContainer".to_string(),
            style_url: "mapbox://styles/mapbox/dark-v9".to_string(),
            center: [-73.959961, 40.734771],
            zoom: 9.0,
            navigation_control: true,
        }
    }
}
