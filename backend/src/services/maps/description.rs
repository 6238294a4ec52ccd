use super::describe::describe;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Actix web handler for the `GET /api/maps/{map_id}/description` endpoint.
///
/// # Arguments
/// * `state` - The metadata loaded once at startup.
/// * `map_id` - The map identifier, extracted from the URL path.
///
/// # Returns
/// - `200 OK` with the description as `text/plain`. Unknown ids get the
///   fallback text, never an error status.
pub(crate) async fn process(
    state: web::Data<AppState>,
    map_id: web::Path<String>,
) -> impl Responder {
    let description = describe(&state.metadata, Some(map_id.as_str()));
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(description.to_string())
}
