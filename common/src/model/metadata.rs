use serde::{Deserialize, Serialize};

/// Describes one selectable map, i.e. one attribute column of the point table.
///
/// Loaded from `metadata.json` by the backend at startup. Entries whose `map_id`
/// does not name a column of the table are kept for description lookups but never
/// offered in the dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMetadata {
    /// Column name in the point table.
    pub map_id: String,
    /// Free text shown in the description panel when this map is selected.
    pub description: String,
}
