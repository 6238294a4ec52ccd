//! # Map View Service
//!
//! Handles `GET /api/maps/view?map_id=<id>`, the request the client sends every
//! time the dropdown value changes. One call produces both artifacts the UI
//! updates: the map figure (`render::render_figure`) and the description text
//! (`describe::describe`).
//!
//! An absent or empty `map_id` is treated as "nothing selected". Unknown ids never
//! fail the request: the figure degrades to the empty shell and the description to
//! the fallback text.

use super::describe::describe;
use super::render::render_figure;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::{MapView, MapViewQuery};
use log::debug;

/// Actix web handler for the `GET /api/maps/view` endpoint.
///
/// # Arguments
/// * `state` - The table and metadata loaded once at startup.
/// * `query` - The optional `map_id` currently selected in the dropdown.
///
/// # Returns
/// - `200 OK` with a `MapView` JSON payload holding the figure and the
///   description. Missing, empty or unknown ids yield the empty shell and the
///   fallback description, never an error status.
pub(crate) async fn process(
    state: web::Data<AppState>,
    query: web::Query<MapViewQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(build_view(&state, query.map_id.as_deref()))
}

fn build_view(state: &AppState, map_id: Option<&str>) -> MapView {
    let selected = map_id.filter(|id| !id.is_empty());
    let figure = render_figure(&state.points, &state.selectable, selected);
    debug!(
        "map view {:?}: {} markers, center {:.4}, {:.4}",
        selected,
        figure.marker_count(),
        figure.center.lat,
        figure.center.lon
    );

    MapView {
        description: describe(&state.metadata, selected).to_string(),
        figure,
    }
}
