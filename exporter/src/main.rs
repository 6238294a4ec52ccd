//! One-shot export of `data/data.csv` to `data/points.geojson`.
//!
//! Independent of the map viewer server; it only shares the table layout.

mod export;

use env_logger::Env;
use log::{info, warn};
use std::error::Error;
use std::path::Path;

const INPUT_CSV: &str = "data/data.csv";
const OUTPUT_GEOJSON: &str = "data/points.geojson";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let summary = export::export_file(Path::new(INPUT_CSV), Path::new(OUTPUT_GEOJSON))?;
    for skipped in &summary.skipped {
        warn!("Skipping row {}: {}", skipped.row, skipped.reason);
    }
    info!(
        "GeoJSON saved to {} ({} features, {} rows skipped)",
        OUTPUT_GEOJSON,
        summary.collection.features.len(),
        summary.skipped.len()
    );
    Ok(())
}
