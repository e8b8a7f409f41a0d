//! Data-driven paint values, serialized in the engine's legacy function
//! syntax: a categorical function for the choropleth fill, interpolated
//! zoom stops for line fading.

use serde::Serialize;
use typology::Color;

/// Categorical paint function keyed on a feature property. Serializes to
/// `{"type": "categorical", "property": ..., "stops": [[match, color], ...],
/// "default": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoricalColor {
    #[serde(rename = "type")]
    kind: &'static str,
    pub property: String,
    pub stops: Vec<(String, Color)>,
    pub default: Color,
}

impl CategoricalColor {
    pub fn new(property: impl Into<String>, stops: Vec<(String, Color)>, default: Color) -> Self {
        Self {
            kind: "categorical",
            property: property.into(),
            stops,
            default,
        }
    }

    /// One stop per catalog legend code, in code order, matching on the
    /// class description text the dataset stores. Unmatched and absent
    /// values fall through to the missing-data color.
    pub fn from_catalog(property: impl Into<String>) -> Self {
        let stops = typology::legend_codes()
            .map(|code| {
                let info = typology::lookup(code);
                (info.description.to_string(), info.color)
            })
            .collect();
        Self::new(property, stops, typology::MISSING_DATA.color)
    }
}

/// Piecewise-linear ramp over zoom. Serializes to `{"stops": [[zoom, value],
/// ...]}`. Stops must be sorted ascending by zoom.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoomRamp {
    pub stops: Vec<(f64, f64)>,
}

impl ZoomRamp {
    pub fn new(stops: Vec<(f64, f64)>) -> Self {
        Self { stops }
    }

    /// Evaluates the ramp the way the engine does: linear between stops,
    /// clamped to the first and last values outside them.
    pub fn eval(&self, zoom: f64) -> f64 {
        let Some(&(first_zoom, first_value)) = self.stops.first() else {
            return 0.0;
        };
        if zoom <= first_zoom {
            return first_value;
        }
        let &(last_zoom, last_value) = self.stops.last().unwrap_or(&(first_zoom, first_value));
        if zoom >= last_zoom {
            return last_value;
        }
        for pair in self.stops.windows(2) {
            let (z0, v0) = pair[0];
            let (z1, v1) = pair[1];
            if zoom <= z1 {
                if z1 <= z0 {
                    return v1;
                }
                let t = (zoom - z0) / (z1 - z0);
                return v0 + t * (v1 - v0);
            }
        }
        last_value
    }
}

/// Line opacity is either flat or zoom-faded. Untagged: a bare number or a
/// ramp object, both forms the engine accepts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LineOpacity {
    Constant(f64),
    Ramp(ZoomRamp),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_stops_follow_code_order() {
        let paint = CategoricalColor::from_catalog("class");
        assert_eq!(paint.stops.len(), 10);
        assert_eq!(
            paint.stops[0],
            (
                "LI - Not Losing Low-Income Households".to_string(),
                Color::rgb(0x00, 0x00, 0xff)
            )
        );
        assert_eq!(
            paint.stops[8],
            (
                "VHI - Super Gentrification or Exclusion".to_string(),
                Color::rgb(0x8b, 0x00, 0x00)
            )
        );
        assert_eq!(paint.stops[9].0, "Missing Data");
        assert_eq!(paint.default, typology::MISSING_DATA.color);
    }

    #[test]
    fn categorical_serializes_in_legacy_function_syntax() {
        let paint = CategoricalColor::new(
            "class",
            vec![("A".to_string(), Color::rgb(0, 0, 255))],
            Color::rgb(0xba, 0xb8, 0xb6),
        );
        assert_eq!(
            serde_json::to_string(&paint).unwrap(),
            r##"{"type":"categorical","property":"class","stops":[["A","#0000ff"]],"default":"#bab8b6"}"##
        );
    }

    #[test]
    fn ramp_serializes_stop_pairs() {
        let ramp = ZoomRamp::new(vec![(14.0, 0.0), (14.8, 1.0)]);
        assert_eq!(
            serde_json::to_string(&ramp).unwrap(),
            r#"{"stops":[[14.0,0.0],[14.8,1.0]]}"#
        );
    }

    #[test]
    fn ramp_interpolates_and_clamps() {
        let ramp = ZoomRamp::new(vec![(14.0, 0.0), (14.8, 1.0)]);
        assert_eq!(ramp.eval(9.0), 0.0);
        assert_eq!(ramp.eval(14.0), 0.0);
        assert!((ramp.eval(14.4) - 0.5).abs() < 1e-9);
        assert_eq!(ramp.eval(14.8), 1.0);
        assert_eq!(ramp.eval(18.0), 1.0);
    }

    #[test]
    fn empty_and_single_stop_ramps() {
        assert_eq!(ZoomRamp::new(vec![]).eval(10.0), 0.0);
        let flat = ZoomRamp::new(vec![(12.0, 0.7)]);
        assert_eq!(flat.eval(5.0), 0.7);
        assert_eq!(flat.eval(20.0), 0.7);
    }

    #[test]
    fn opacity_forms_serialize_distinctly() {
        let constant = serde_json::to_value(LineOpacity::Constant(0.7)).unwrap();
        assert_eq!(constant, serde_json::json!(0.7));
        let ramp =
            serde_json::to_value(LineOpacity::Ramp(ZoomRamp::new(vec![(14.0, 0.0)]))).unwrap();
        assert_eq!(ramp, serde_json::json!({"stops": [[14.0, 0.0]]}));
    }
}
