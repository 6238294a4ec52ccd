use common::model::figure::MapFigure;

/// Runtime data of the map viewer page.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct ViewerComponent {
    /// Dropdown options, in the order the backend lists them.
    pub maps: Vec<String>,

    /// Number of points loaded by the backend, shown under the dropdown.
    pub point_count: usize,

    /// Current dropdown value. Stays `Some` once a map has been picked.
    pub selected: Option<String>,

    /// Text of the description panel.
    pub description: String,

    /// Latest figure from the backend, `None` before the first response.
    pub figure: Option<MapFigure>,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl ViewerComponent {
    pub fn new() -> Self {
        Self {
            maps: Vec::new(),
            point_count: 0,
            selected: None,
            description: String::new(),
            figure: None,
            loaded: false,
        }
    }
}
