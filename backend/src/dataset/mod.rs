//! Loading of the two static input files.
//!
//! Both files are read once at startup:
//! - `points`: the semicolon-delimited table of geocoded places. Coordinates are
//!   split into `lat`/`lon` and the display name is resolved while reading, so the
//!   resulting `PointTable` never changes afterwards.
//! - `metadata`: the JSON list of map descriptions.
//!
//! `selectable_columns` joins the two into the ordered list of map ids offered in
//! the dropdown. Any failure here is fatal for the server.

mod error;
mod metadata;
mod points;

pub use error::{CoordinateError, LoadError};
pub use metadata::load_metadata;
pub use points::{load_points, PointTable};
#[cfg(test)]
pub use metadata::read_metadata;
#[cfg(test)]
pub use points::read_points;

use points::{COORDINATES_COLUMN, LAT_COLUMN, LON_COLUMN};

use common::model::metadata::MapMetadata;

/// Columns that carry location data and are never offered as maps.
const NON_MAP_COLUMNS: [&str; 3] = [COORDINATES_COLUMN, LAT_COLUMN, LON_COLUMN];

/// Map ids that can be selected in the UI, in metadata order.
///
/// An entry qualifies when its `map_id` names a column of the point table and is
/// not one of the coordinate columns. Repeated ids are listed once.
pub fn selectable_columns(metadata: &[MapMetadata], points: &PointTable) -> Vec<String> {
    let mut selectable: Vec<String> = Vec::new();
    for entry in metadata {
        let id = entry.map_id.as_str();
        if NON_MAP_COLUMNS.contains(&id) || !points.has_column(id) {
            continue;
        }
        if !selectable.iter().any(|s| s == id) {
            selectable.push(id.to_string());
        }
    }
    selectable
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(map_id: &str) -> MapMetadata {
        MapMetadata {
            map_id: map_id.to_string(),
            description: format!("opis {map_id}"),
        }
    }

    #[test]
    fn selectable_is_ordered_intersection_without_coordinates() {
        let csv = "Nr;Original City Name;City Name Today;Coordinates;A;B;C\n\
                   1;Puck;;54.72,18.41;x;y;z\n";
        let points = read_points(csv.as_bytes()).unwrap();
        let metadata = vec![
            entry("C"),
            entry("Coordinates"),
            entry("missing"),
            entry("lat"),
            entry("A"),
            entry("lon"),
            entry("C"),
        ];

        assert_eq!(selectable_columns(&metadata, &points), vec!["C", "A"]);
    }

    #[test]
    fn nothing_selectable_without_metadata() {
        let csv = "Nr;Original City Name;City Name Today;Coordinates;A\n1;Puck;;54.72,18.41;x\n";
        let points = read_points(csv.as_bytes()).unwrap();
        assert!(selectable_columns(&[], &points).is_empty());
    }
}
