//! Neighborhood typology catalog.
//!
//! The 2019 New York classification assigns every census tract one of nine
//! gentrification / displacement classes, keyed by an integer code. This
//! module is the single source of truth for those classes: the fill styling,
//! the legend, and the inspection panel all derive their colors and
//! descriptions from here.

use crate::color::Color;

/// Display metadata for one typology class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypologyInfo {
    pub color: Color,
    pub description: &'static str,
}

/// The nine classified typologies, in code order (codes 1 through 9).
///
/// Low-income (LI) classes shade blue to violet, middle/high-income (MHI)
/// classes peach to crimson, very-high-income (VHI) dark red.
pub static CLASSIFIED: [TypologyInfo; 9] = [
    TypologyInfo {
        color: Color::rgb(0x00, 0x00, 0xff),
        description: "LI - Not Losing Low-Income Households",
    },
    TypologyInfo {
        color: Color::rgb(0x65, 0x3d, 0xf4),
        description: "LI - Ongoing Displacement of Low-Income Households",
    },
    TypologyInfo {
        color: Color::rgb(0x8a, 0x62, 0xee),
        description: "LI - At Risk of Gentrification",
    },
    TypologyInfo {
        color: Color::rgb(0x9b, 0x87, 0xde),
        description: "LI - Ongoing Gentrification",
    },
    TypologyInfo {
        color: Color::rgb(0xf7, 0xca, 0xbf),
        description: "MHI - Advanced Gentrification",
    },
    TypologyInfo {
        color: Color::rgb(0xff, 0xa4, 0x74),
        description: "MHI - Stable or Early Stage of Exclusion",
    },
    TypologyInfo {
        color: Color::rgb(0xe7, 0x57, 0x58),
        description: "MHI - Ongoing Exclusion",
    },
    TypologyInfo {
        color: Color::rgb(0xc0, 0x22, 0x3b),
        description: "MHI - Advanced Exclusion",
    },
    TypologyInfo {
        color: Color::rgb(0x8b, 0x00, 0x00),
        description: "VHI - Super Gentrification or Exclusion",
    },
];

/// Fallback class for tracts the survey could not classify.
pub static MISSING_DATA: TypologyInfo = TypologyInfo {
    color: Color::rgb(0xba, 0xb8, 0xb6),
    description: "Missing Data",
};

/// Resolves a typology code to its class. Total: any code outside 1..=9
/// (zero, negative, out of range) resolves to [`MISSING_DATA`].
pub fn lookup(code: i64) -> &'static TypologyInfo {
    match code {
        1..=9 => &CLASSIFIED[(code - 1) as usize],
        _ => &MISSING_DATA,
    }
}

/// Codes shown in the legend: the nine classified codes plus one synthetic
/// code for the missing-data row. `lookup` resolves the synthetic code to
/// [`MISSING_DATA`] like any other unclassified value.
pub fn legend_codes() -> std::ops::RangeInclusive<i64> {
    1..=10
}

/// The classified classes paired with their codes, ascending.
pub fn classified() -> impl Iterator<Item = (i64, &'static TypologyInfo)> {
    CLASSIFIED.iter().enumerate().map(|(i, info)| (i as i64 + 1, info))
}

/// Reverse lookup by description text, matching the dataset's label
/// property. Returns the smallest legend code whose description matches,
/// so `"Missing Data"` maps to the synthetic legend code.
pub fn code_for_description(text: &str) -> Option<i64> {
    legend_codes().find(|&code| lookup(code).description == text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lookup_is_total() {
        for code in [i64::MIN, -1, 0, 10, 11, 255, i64::MAX] {
            assert_eq!(lookup(code), &MISSING_DATA, "code {code}");
        }
        for (code, info) in classified() {
            assert_eq!(lookup(code), info);
        }
    }

    #[test]
    fn classes_cover_the_survey_text() {
        assert_eq!(lookup(1).description, "LI - Not Losing Low-Income Households");
        assert_eq!(lookup(3).description, "LI - At Risk of Gentrification");
        assert_eq!(lookup(3).color.to_string(), "#8a62ee");
        assert_eq!(lookup(9).description, "VHI - Super Gentrification or Exclusion");
        assert_eq!(lookup(9).color.to_string(), "#8b0000");
        assert_eq!(MISSING_DATA.color.to_string(), "#bab8b6");
    }

    #[test]
    fn colors_are_distinct() {
        let mut seen = std::collections::BTreeSet::new();
        for code in legend_codes() {
            assert!(seen.insert(lookup(code).color.to_string()));
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn legend_codes_span_classes_and_fallback() {
        let codes: Vec<i64> = legend_codes().collect();
        assert_eq!(codes.len(), 10);
        assert_eq!(lookup(codes[8]).description, lookup(9).description);
        assert_eq!(lookup(codes[9]), &MISSING_DATA);
    }

    #[test]
    fn description_reverse_lookup() {
        assert_eq!(code_for_description("LI - Ongoing Gentrification"), Some(4));
        assert_eq!(code_for_description("Missing Data"), Some(10));
        assert_eq!(code_for_description("Commercial Overlay"), None);
        for (code, info) in classified() {
            assert_eq!(code_for_description(info.description), Some(code));
        }
    }
}
