use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::MapCatalog;

/// Actix web handler for the `GET /api/maps` endpoint.
///
/// Lists the maps the dropdown offers, in metadata order, together with the
/// number of points loaded at startup.
///
/// # Arguments
/// * `state` - The table and metadata loaded once at startup.
///
/// # Returns
/// - `200 OK` with a `MapCatalog` JSON payload. The handler has no error path;
///   an empty table yields an empty catalog.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(build_catalog(&state))
}

fn build_catalog(state: &AppState) -> MapCatalog {
    MapCatalog {
        maps: state.selectable.clone(),
        point_count: state.points.len(),
    }
}
