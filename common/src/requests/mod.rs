use crate::model::figure::MapFigure;
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/maps/view`.
/// `map_id` is optional: an absent selection renders the empty map shell.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MapViewQuery {
    pub map_id: Option<String>,
}

/// Response of `GET /api/maps/view`: both UI regions updated by one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub figure: MapFigure,
    pub description: String,
}

/// Response of `GET /api/maps`: the dropdown options, in metadata order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapCatalog {
    pub maps: Vec<String>,
    pub point_count: usize,
}
