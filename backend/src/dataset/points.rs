use super::{CoordinateError, LoadError};
use csv::{ReaderBuilder, StringRecord};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub const NR_COLUMN: &str = "Nr";
pub const ORIGINAL_NAME_COLUMN: &str = "Original City Name";
pub const TODAY_NAME_COLUMN: &str = "City Name Today";
pub const COORDINATES_COLUMN: &str = "Coordinates";
/// Derived columns. They are not read from the file.
pub const LAT_COLUMN: &str = "lat";
pub const LON_COLUMN: &str = "lon";

const REQUIRED_COLUMNS: [&str; 4] = [
    NR_COLUMN,
    ORIGINAL_NAME_COLUMN,
    TODAY_NAME_COLUMN,
    COORDINATES_COLUMN,
];

/// One row of the point table with its derived fields resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PointRecord {
    pub nr: String,
    pub lat: f64,
    pub lon: f64,
    /// `City Name Today` when filled in, otherwise `Original City Name`.
    pub display_name: String,
    /// Every column of the row as read, keyed by header.
    values: HashMap<String, String>,
}

impl PointRecord {
    pub fn value(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }
}

/// The whole point table. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    columns: Vec<String>,
    records: Vec<PointRecord>,
}

impl PointTable {
    pub fn records(&self) -> &[PointRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True for header columns and for the derived `lat`/`lon` columns.
    pub fn has_column(&self, column: &str) -> bool {
        column == LAT_COLUMN || column == LON_COLUMN || self.columns.iter().any(|c| c == column)
    }

    /// Mean latitude and longitude of all records, `None` for an empty table.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.records.is_empty() {
            return None;
        }
        let n = self.records.len() as f64;
        let (lat_sum, lon_sum) = self
            .records
            .iter()
            .fold((0.0, 0.0), |(lat, lon), r| (lat + r.lat, lon + r.lon));
        Some((lat_sum / n, lon_sum / n))
    }
}

/// Splits a `"lat,lon"` string into its two numeric components.
///
/// Surrounding whitespace around each component is ignored.
pub fn parse_coordinates(raw: &str) -> Result<(f64, f64), CoordinateError> {
    let parts: Vec<&str> = raw.split(',').collect();
    if parts.len() != 2 {
        return Err(CoordinateError::ComponentCount(parts.len()));
    }
    let parse = |token: &str| {
        let token = token.trim();
        token
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CoordinateError::NotANumber(token.to_string()))
    };
    Ok((parse(parts[0])?, parse(parts[1])?))
}

/// Name shown to users: the current name if the cell is non-empty, otherwise
/// the historical one.
pub fn display_name<'a>(name_today: &'a str, original_name: &'a str) -> &'a str {
    if name_today.is_empty() {
        original_name
    } else {
        name_today
    }
}

/// Opens and reads the point table at `path`.
pub fn load_points(path: &Path) -> Result<PointTable, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_points(BufReader::new(file))
}

/// Reads a semicolon-delimited point table. Fails on the first row whose
/// coordinates cannot be parsed.
///
/// Rows shorter than the header are accepted; their missing cells read as empty.
pub fn read_points<R: Read>(reader: R) -> Result<PointTable, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
    for required in REQUIRED_COLUMNS {
        if !columns.iter().any(|c| c == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for (idx, row) in rdr.records().enumerate() {
        records.push(to_record(&columns, &row?, idx + 1)?);
    }

    Ok(PointTable { columns, records })
}

fn to_record(
    columns: &[String],
    row: &StringRecord,
    row_number: usize,
) -> Result<PointRecord, LoadError> {
    let values: HashMap<String, String> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| (column.clone(), row.get(i).unwrap_or_default().to_string()))
        .collect();
    let field = |name: &str| values.get(name).map(String::as_str).unwrap_or_default();

    let raw = field(COORDINATES_COLUMN);
    let (lat, lon) = parse_coordinates(raw).map_err(|source| LoadError::Coordinates {
        row: row_number,
        raw: raw.to_string(),
        source,
    })?;
    let display_name =
        display_name(field(TODAY_NAME_COLUMN), field(ORIGINAL_NAME_COLUMN)).to_string();
    let nr = field(NR_COLUMN).to_string();

    Ok(PointRecord {
        nr,
        lat,
        lon,
        display_name,
        values,
    })
}
