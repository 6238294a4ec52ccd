//! HTTP API behind the map viewer page.
//!
//! The client loads the catalog once, then calls `/view` whenever the selected map
//! changes. All handlers read the shared `AppState`; none of them write.
//!
//! The provided routes are:
//! - `GET /api/maps`: selectable map ids in metadata order plus the point count.
//! - `GET /api/maps/view?map_id=<id>`: figure and description for one selection.
//!   Without `map_id` it returns the empty map shell and the fallback description.
//! - `GET /api/maps/{map_id}/description`: the description alone, as plain text.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod catalog;
mod describe;
mod description;
mod render;
mod view;

const API_PATH: &str = "/api/maps";

/// Configures and returns the Actix scope for the map routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(catalog::process))
        .route("/view", get().to(view::process))
        .route("/{map_id}/description", get().to(description::process))
}

#[cfg(test)]
mod tests {
    use super::describe::FALLBACK_DESCRIPTION;
    use super::*;
    use crate::state::fixtures::sample_state;
    use actix_web::{test, web, App};
    use common::requests::{MapCatalog, MapView};

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(sample_state()))
                    .service(configure_routes()),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn catalog_lists_selectable_maps() {
        let app = app!();
        let req = test::TestRequest::get().uri("/api/maps").to_request();
        let catalog: MapCatalog = test::call_and_read_body_json(&app, req).await;

        assert_eq!(catalog.maps, vec!["Mapa 2", "Mapa 1"]);
        assert_eq!(catalog.point_count, 4);
    }

    #[actix_web::test]
    async fn view_returns_figure_and_description() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/maps/view?map_id=Mapa%201")
            .to_request();
        let view: MapView = test::call_and_read_body_json(&app, req).await;

        assert_eq!(view.description, "Refleksy o pochylonego.");
        assert_eq!(view.figure.traces.len(), 3);
        assert_eq!(view.figure.marker_count(), 4);
        assert!(view
            .figure
            .traces
            .iter()
            .flat_map(|t| &t.markers)
            .all(|m| !m.label.is_empty() && m.label == m.hover_name));
    }

    #[actix_web::test]
    async fn view_without_selection_is_empty_shell() {
        let app = app!();
        for uri in ["/api/maps/view", "/api/maps/view?map_id="] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let view: MapView = test::call_and_read_body_json(&app, req).await;

            assert!(view.figure.is_empty());
            assert_eq!(view.description, FALLBACK_DESCRIPTION);
        }
    }

    #[actix_web::test]
    async fn view_with_unknown_map_degrades_gracefully() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/maps/view?map_id=Mapa%203")
            .to_request();
        let view: MapView = test::call_and_read_body_json(&app, req).await;

        // Known to the metadata but not a column: no markers, real description.
        assert!(view.figure.is_empty());
        assert_eq!(view.description, "Mapa bez kolumny.");
    }

    #[actix_web::test]
    async fn description_endpoint_returns_plain_text() {
        let app = app!();
        let req = test::TestRequest::get()
            .uri("/api/maps/Mapa%202/description")
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "Nazwy brzozy.".as_bytes());

        let req = test::TestRequest::get()
            .uri("/api/maps/nieznana/description")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, FALLBACK_DESCRIPTION.as_bytes());
    }
}
