//! Application state shared by all request handlers.
//!
//! `AppState` is built once in `main.rs` from the two input files and handed to
//! Actix as `web::Data` (an `Arc`). Handlers only ever read it; nothing in the
//! server mutates the dataset after startup, so no locking is involved.

use crate::config::AppConfig;
use crate::dataset::{self, LoadError, PointTable};
use common::model::metadata::MapMetadata;

#[derive(Debug, Clone)]
pub struct AppState {
    pub points: PointTable,
    /// Every metadata entry, including ones without a matching column.
    pub metadata: Vec<MapMetadata>,
    /// Dropdown options, see `dataset::selectable_columns`.
    pub selectable: Vec<String>,
}

impl AppState {
    pub fn new(points: PointTable, metadata: Vec<MapMetadata>) -> Self {
        let selectable = dataset::selectable_columns(&metadata, &points);
        Self {
            points,
            metadata,
            selectable,
        }
    }

    /// Reads both input files named by `config`.
    pub fn load(config: &AppConfig) -> Result<Self, LoadError> {
        let points = dataset::load_points(&config.data_path)?;
        let metadata = dataset::load_metadata(&config.metadata_path)?;
        Ok(Self::new(points, metadata))
    }
}
