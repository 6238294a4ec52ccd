use common::model::metadata::MapMetadata;

/// Shown when no metadata entry matches the selection.
pub const FALLBACK_DESCRIPTION: &str = "Brak opisu dla tej mapy.";

/// Description of the first metadata entry whose `map_id` equals `selected`.
///
/// Searches all metadata entries, not only the selectable ones.
pub fn describe<'a>(metadata: &'a [MapMetadata], selected: Option<&str>) -> &'a str {
    selected
        .and_then(|id| metadata.iter().find(|entry| entry.map_id == id))
        .map(|entry| entry.description.as_str())
        .unwrap_or(FALLBACK_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> Vec<MapMetadata> {
        vec![
            MapMetadata {
                map_id: "Mapa 1".to_string(),
                description: "pierwszy opis".to_string(),
            },
            MapMetadata {
                map_id: "Mapa 1".to_string(),
                description: "drugi opis".to_string(),
            },
        ]
    }

    #[test]
    fn known_id_returns_first_matching_description() {
        assert_eq!(describe(&metadata(), Some("Mapa 1")), "pierwszy opis");
    }

    #[test]
    fn unknown_or_missing_id_returns_fallback() {
        assert_eq!(describe(&metadata(), Some("Mapa 9")), FALLBACK_DESCRIPTION);
        assert_eq!(describe(&metadata(), None), FALLBACK_DESCRIPTION);
        assert_eq!(describe(&[], Some("Mapa 1")), FALLBACK_DESCRIPTION);
    }
}
