//! Conversion of the point table into a GeoJSON `FeatureCollection`.
//!
//! Each row becomes a `Point` feature. GeoJSON orders positions as
//! `[longitude, latitude]`, the reverse of the `"lat,lon"` strings in the table.
//! All columns except `Coordinates` are copied into `properties` as strings.
//! Rows whose coordinates cannot be read are skipped and reported, they do not
//! stop the export.

use csv::ReaderBuilder;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, JsonValue, Value};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

pub const COORDINATES_COLUMN: &str = "Coordinates";

/// A row left out of the export.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    /// 1-based data row, header excluded.
    pub row: usize,
    pub reason: String,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub collection: FeatureCollection,
    pub skipped: Vec<SkippedRow>,
}

/// Parses `"lat,lon"` into `(lat, lon)`.
pub fn parse_lat_lon(raw: &str) -> Result<(f64, f64), String> {
    let parts: Vec<&str> = raw.split(',').collect();
    let [lat, lon] = parts.as_slice() else {
        return Err(format!(
            "expected 'lat,lon', got {} component(s) in '{}'",
            parts.len(),
            raw
        ));
    };
    let number = |token: &str| {
        let token = token.trim();
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            Ok(_) => Err(format!("'{}' is not a finite number", token)),
            Err(e) => Err(format!("'{}': {}", token, e)),
        }
    };
    Ok((number(*lat)?, number(*lon)?))
}

/// Builds the feature collection from a semicolon-delimited table.
///
/// Only structural CSV errors (unreadable input, header problems) are returned as
/// `Err`; coordinate problems end up in `ExportSummary::skipped` for the caller
/// to report.
pub fn features_from_reader<R: Read>(reader: R) -> Result<ExportSummary, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut features = Vec::new();
    let mut skipped = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let row = idx + 1;
        let record = record?;

        let mut properties = JsonObject::new();
        let mut coordinates = None;
        // Short rows still carry every header column; missing cells are empty.
        for (i, key) in headers.iter().enumerate() {
            let value = record.get(i).unwrap_or("");
            if key == COORDINATES_COLUMN {
                coordinates = Some(value);
            } else {
                properties.insert(key.to_string(), JsonValue::String(value.to_string()));
            }
        }

        let parsed = coordinates
            .ok_or_else(|| format!("no '{}' value", COORDINATES_COLUMN))
            .and_then(parse_lat_lon);
        match parsed {
            Ok((lat, lon)) => features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![lon, lat]))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }),
            Err(reason) => skipped.push(SkippedRow { row, reason }),
        }
    }

    Ok(ExportSummary {
        collection: FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        },
        skipped,
    })
}

/// Reads `input`, writes the pretty-printed collection to `output`.
pub fn export_file(input: &Path, output: &Path) -> Result<ExportSummary, Box<dyn Error>> {
    let file = File::open(input)
        .map_err(|e| format!("cannot open {}: {}", input.display(), e))?;
    let summary = features_from_reader(BufReader::new(file))?;

    let geojson = GeoJson::FeatureCollection(summary.collection.clone());
    let mut writer = BufWriter::new(File::create(output)?);
    serde_json::to_writer_pretty(&mut writer, &geojson)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
Nr;Original City Name;City Name Today;Coordinates;Mapa 1
1;Putzig;Puck;53.94,18.00;ô
2;Nigdzie;;not-a-number;o
3;Lauenburg;Lębork; 54.54 , 17.75 ;ó
";

    fn point(feature: &Feature) -> Vec<f64> {
        match feature.geometry.as_ref().map(|g| &g.value) {
            Some(Value::Point(position)) => position.clone(),
            other => panic!("expected a point, got {other:?}"),
        }
    }

    #[test]
    fn coordinates_are_reversed_and_dropped_from_properties() {
        let summary = features_from_reader(TABLE.as_bytes()).unwrap();
        let first = &summary.collection.features[0];

        assert_eq!(point(first), vec![18.00, 53.94]);
        let properties = first.properties.as_ref().unwrap();
        assert!(!properties.contains_key("Coordinates"));
        assert_eq!(properties["Nr"], JsonValue::String("1".to_string()));
        assert_eq!(properties["City Name Today"], JsonValue::String("Puck".to_string()));
        assert_eq!(properties["Mapa 1"], JsonValue::String("ô".to_string()));
        assert_eq!(properties.len(), 4);
    }

    #[test]
    fn unparseable_rows_are_skipped_without_stopping() {
        let summary = features_from_reader(TABLE.as_bytes()).unwrap();

        assert_eq!(summary.collection.features.len(), 2);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(summary.skipped[0].row, 2);
        assert_eq!(point(&summary.collection.features[1]), vec![17.75, 54.54]);
    }

    #[test]
    fn feature_count_is_rows_minus_skipped() {
        let rows = TABLE.lines().count() - 1;
        let summary = features_from_reader(TABLE.as_bytes()).unwrap();
        assert_eq!(summary.collection.features.len(), rows - summary.skipped.len());
    }

    #[test]
    fn short_rows_keep_every_column() {
        let table = "Nr;Original City Name;City Name Today;Coordinates;Mapa 1;Mapa 2\n\
                     1;Puck;;54.7,18.4;o\n";
        let summary = features_from_reader(table.as_bytes()).unwrap();
        let properties = summary.collection.features[0].properties.as_ref().unwrap();

        assert_eq!(properties.len(), 5);
        assert_eq!(properties["Mapa 1"], JsonValue::String("o".to_string()));
        assert_eq!(properties["Mapa 2"], JsonValue::String(String::new()));
    }

    #[test]
    fn properties_follow_column_order() {
        let table = "Nr;Zeta;Coordinates;Alfa\n1;z;54.0,18.0;a\n";
        let summary = features_from_reader(table.as_bytes()).unwrap();
        let properties = summary.collection.features[0].properties.as_ref().unwrap();

        let keys: Vec<&str> = properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Nr", "Zeta", "Alfa"]);
    }

    #[test]
    fn values_stay_strings() {
        let table = "Nr;Coordinates;Rok\n007;54.0,18.0;1910\n";
        let summary = features_from_reader(table.as_bytes()).unwrap();
        let properties = summary.collection.features[0].properties.as_ref().unwrap();
        assert_eq!(properties["Nr"], JsonValue::String("007".to_string()));
        assert_eq!(properties["Rok"], JsonValue::String("1910".to_string()));
    }

    #[test]
    fn lat_lon_parsing() {
        assert_eq!(parse_lat_lon("53.94,18.00"), Ok((53.94, 18.0)));
        assert!(parse_lat_lon("not-a-number").is_err());
        assert!(parse_lat_lon("1,2,3").is_err());
        assert!(parse_lat_lon("54.0,").is_err());
        assert!(parse_lat_lon("NaN,18.0").is_err());
    }

    #[test]
    fn export_writes_feature_collection() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("data.csv");
        let output = dir.path().join("points.geojson");
        std::fs::write(&input, TABLE).unwrap();

        let summary = export_file(&input, &output).unwrap();
        assert_eq!(summary.collection.features.len(), 2);

        let written: JsonValue =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["type"], "FeatureCollection");
        assert_eq!(written["features"].as_array().unwrap().len(), 2);
        assert_eq!(written["features"][0]["geometry"]["type"], "Point");
        assert_eq!(written["features"][0]["geometry"]["coordinates"][0], 18.0);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = export_file(&dir.path().join("absent.csv"), &dir.path().join("out.geojson"));
        assert!(result.is_err());
    }
}
