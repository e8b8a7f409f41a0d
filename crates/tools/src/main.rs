use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracts::{LonLat, TractSet};
use viewer::Legend;

#[derive(Parser)]
#[command(name = "tractatlas")]
#[command(about = "Export and check the typology viewer's map configuration")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the style operations the viewer applies once the basemap loads
    StyleOps {
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the legend derived from the typology catalog
    Legend {
        /// Emit the HTML fragment instead of JSON rows
        #[arg(long)]
        html: bool,
        /// Write to a file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Load a dataset and report per-class tract counts
    Validate { dataset: PathBuf },
    /// Resolve a click position against a dataset
    Inspect {
        dataset: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
    },
}

#[derive(Debug, Serialize)]
struct ValidateReport {
    tracts: usize,
    skipped: usize,
    unlabeled: usize,
    unrecognized: usize,
    classes: Vec<ClassCount>,
}

#[derive(Debug, Serialize)]
struct ClassCount {
    code: i64,
    description: &'static str,
    count: usize,
}

fn main() {
    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    match Cli::parse().command {
        Commands::StyleOps { out } => {
            let body = to_pretty_json(&viewer::style_ops())?;
            emit(&body, out.as_deref())
        }
        Commands::Legend { html, out } => {
            let legend = Legend::built_from_catalog();
            let body = if html {
                legend.to_html()
            } else {
                to_pretty_json(&legend)?
            };
            emit(&body, out.as_deref())
        }
        Commands::Validate { dataset } => {
            let set = load_dataset(&dataset)?;
            emit(&to_pretty_json(&validate_report(&set))?, None)
        }
        Commands::Inspect { dataset, lng, lat } => {
            let set = load_dataset(&dataset)?;
            let outcome = viewer::inspect_at(&set, LonLat::new(lng, lat));
            emit(&to_pretty_json(&outcome)?, None)
        }
    }
}

fn load_dataset(path: &Path) -> Result<TractSet, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("read {path:?}: {e}"))?;
    TractSet::from_geojson_str(&text).map_err(|e| format!("parse {path:?}: {e}"))
}

/// Tallies every tract into its catalog class by label text. Labels the
/// catalog does not know land in `unrecognized` so schema drift in a new
/// export is visible immediately.
fn validate_report(set: &TractSet) -> ValidateReport {
    let mut counts = vec![0usize; 10];
    let mut unlabeled = 0usize;
    let mut unrecognized = 0usize;
    for tract in set.iter() {
        match tract.typology_label() {
            None => unlabeled += 1,
            Some(text) => match typology::code_for_description(text) {
                Some(code) => counts[(code - 1) as usize] += 1,
                None => unrecognized += 1,
            },
        }
    }
    let classes = typology::legend_codes()
        .map(|code| ClassCount {
            code,
            description: typology::lookup(code).description,
            count: counts[(code - 1) as usize],
        })
        .collect();
    ValidateReport {
        tracts: set.len(),
        skipped: set.skipped(),
        unlabeled,
        unrecognized,
        classes,
    }
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| e.to_string())
}

fn emit(body: &str, out: Option<&Path>) -> Result<(), String> {
    match out {
        Some(path) => fs::write(path, body).map_err(|e| format!("write {path:?}: {e}")),
        None => {
            println!("{body}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn report_tallies_labels_against_the_catalog() {
        let set = TractSet::from_geojson_value(&json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {
                        "NY January 2019 typology_Type_1.19": "LI - At Risk of Gentrification",
                    },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                    },
                },
                {
                    "type": "Feature",
                    "properties": {
                        "NY January 2019 typology_Type_1.19": "Mixed Use",
                    },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[2.0, 0.0], [3.0, 0.0], [3.0, 1.0], [2.0, 0.0]]],
                    },
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[4.0, 0.0], [5.0, 0.0], [5.0, 1.0], [4.0, 0.0]]],
                    },
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "Point", "coordinates": [0.0, 0.0]},
                },
            ],
        }))
        .unwrap();

        let report = validate_report(&set);
        assert_eq!(report.tracts, 3);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.unlabeled, 1);
        assert_eq!(report.unrecognized, 1);
        assert_eq!(report.classes.len(), 10);
        assert_eq!(report.classes[2].code, 3);
        assert_eq!(report.classes[2].count, 1);
        assert_eq!(report.classes[0].count, 0);
    }
}
