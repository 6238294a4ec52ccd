//! Update function for the map viewer component.
//!
//! Elm-style: receives the current `ViewerComponent` state, the `Context`, and a
//! `Msg`, mutates the state, and returns whether the view should re-render.
//! Network calls are spawned here and report back through messages.

use gloo_console::log;
use gloo_net::http::Request;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::{MapCatalog, MapView};

use super::helpers::{is_current, parse_selection, show_toast};
use super::messages::Msg;
use super::state::ViewerComponent;

const CATALOG_URL: &str = "/api/maps";
const VIEW_URL: &str = "/api/maps/view";

pub fn update(component: &mut ViewerComponent, ctx: &Context<ViewerComponent>, msg: Msg) -> bool {
    match msg {
        Msg::CatalogLoaded(catalog) => {
            log!(format!(
                "{} maps for {} points",
                catalog.maps.len(),
                catalog.point_count
            ));
            component.maps = catalog.maps;
            component.point_count = catalog.point_count;
            true
        }
        Msg::SelectMap(value) => {
            let Some(map_id) = parse_selection(&value) else {
                return false;
            };
            if component.selected.as_deref() == Some(map_id.as_str()) {
                return false;
            }
            component.selected = Some(map_id.clone());
            fetch_view(ctx.link().clone(), Some(map_id));
            true
        }
        Msg::ViewLoaded { map_id, view } => {
            if !is_current(component.selected.as_deref(), map_id.as_deref()) {
                return false;
            }
            component.description = view.description;
            component.figure = Some(view.figure);
            true
        }
        Msg::RequestFailed(message) => {
            show_toast(&message);
            false
        }
    }
}

/// Loads the dropdown options.
pub fn fetch_catalog(link: Scope<ViewerComponent>) {
    spawn_local(async move {
        let result = match Request::get(CATALOG_URL).send().await {
            Ok(resp) if resp.ok() => resp.json::<MapCatalog>().await.map_err(|e| e.to_string()),
            Ok(resp) => Err(format!("HTTP {}", resp.status())),
            Err(e) => Err(e.to_string()),
        };
        match result {
            Ok(catalog) => link.send_message(Msg::CatalogLoaded(catalog)),
            Err(e) => link.send_message(Msg::RequestFailed(format!(
                "Nie udało się wczytać listy map: {}",
                e
            ))),
        }
    });
}

/// Loads figure and description for `map_id`; `None` fetches the empty shell.
pub fn fetch_view(link: Scope<ViewerComponent>, map_id: Option<String>) {
    spawn_local(async move {
        let mut request = Request::get(VIEW_URL);
        if let Some(id) = &map_id {
            request = request.query([("map_id", id.as_str())]);
        }
        let result = match request.send().await {
            Ok(resp) if resp.ok() => resp.json::<MapView>().await.map_err(|e| e.to_string()),
            Ok(resp) => Err(format!("HTTP {}", resp.status())),
            Err(e) => Err(e.to_string()),
        };
        match result {
            Ok(view) => link.send_message(Msg::ViewLoaded { map_id, view }),
            Err(e) => link.send_message(Msg::RequestFailed(format!(
                "Nie udało się wczytać mapy: {}",
                e
            ))),
        }
    });
}
