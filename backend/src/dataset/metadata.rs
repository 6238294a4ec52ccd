use super::LoadError;
use common::model::metadata::MapMetadata;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Reads the metadata file, a JSON array of `{ "map_id", "description" }` objects.
pub fn load_metadata(path: &Path) -> Result<Vec<MapMetadata>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_metadata(BufReader::new(file))
}

pub fn read_metadata<R: Read>(reader: R) -> Result<Vec<MapMetadata>, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}
