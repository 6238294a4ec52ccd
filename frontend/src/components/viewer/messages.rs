use common::requests::{MapCatalog, MapView};

pub enum Msg {
    CatalogLoaded(MapCatalog),
    /// Raw `<select>` value; empty means the placeholder option.
    SelectMap(String),
    ViewLoaded {
        map_id: Option<String>,
        view: MapView,
    },
    RequestFailed(String),
}
