use serde::Serialize;
use typology::Color;

/// The legend as rendered next to the map: one color box and one
/// description per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    pub rows: Vec<LegendRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRow {
    pub color: Color,
    pub description: String,
}

impl Legend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row per catalog legend code, ascending, ending with the
    /// missing-data row. Appends rather than replaces: building twice
    /// yields duplicate rows, so build once per page.
    pub fn extend_from_catalog(&mut self) {
        for code in typology::legend_codes() {
            let info = typology::lookup(code);
            self.rows.push(LegendRow {
                color: info.color,
                description: info.description.to_string(),
            });
        }
    }

    pub fn built_from_catalog() -> Self {
        let mut legend = Self::new();
        legend.extend_from_catalog();
        legend
    }

    /// Renders the rows as the HTML fragment the page injects into its
    /// legend container.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str("<div>");
            out.push_str(&format!(
                "<div class=\"legend-color-box\" style=\"background-color:{};\"></div>",
                row.color
            ));
            out.push_str(&row.description);
            out.push_str("</div>\n");
        }
        out
    }
}
