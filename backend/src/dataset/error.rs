use std::path::PathBuf;
use thiserror::Error;

/// Reasons a coordinate string cannot be turned into a `lat,lon` pair.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordinateError {
    #[error("expected exactly two comma-separated components, found {0}")]
    ComponentCount(usize),
    #[error("'{0}' is not a finite number")]
    NotANumber(String),
}

/// Startup failure while reading the point table or the metadata file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("malformed point table: {0}")]
    Csv(#[from] csv::Error),
    #[error("point table is missing required column '{0}'")]
    MissingColumn(String),
    #[error("row {row}: invalid coordinates '{raw}': {source}")]
    Coordinates {
        /// 1-based data row, header excluded.
        row: usize,
        raw: String,
        source: CoordinateError,
    },
    #[error("malformed metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}
