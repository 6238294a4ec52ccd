//! Bridge to the Leaflet map drawn by `renderMapFigure` in `index.html`.
//!
//! The figure is handed over as a JSON string; the JavaScript side owns the
//! Leaflet instance, its tile layer, the marker layer and the legend overlay.

use common::model::figure::MapFigure;
use gloo_console::error;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = renderMapFigure, catch)]
    fn render_map_figure(container_id: &str, figure_json: &str) -> Result<(), JsValue>;
}

/// Draws `figure` into the element with id `container_id`, replacing any
/// markers and legend from the previous figure.
pub fn draw_figure(container_id: &str, figure: &MapFigure) {
    let json = match serde_json::to_string(figure) {
        Ok(json) => json,
        Err(e) => {
            error!(format!("Cannot serialize map figure: {}", e));
            return;
        }
    };
    if let Err(e) = render_map_figure(container_id, &json) {
        error!("Map rendering failed:", e);
    }
}
