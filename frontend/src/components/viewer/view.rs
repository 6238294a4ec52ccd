//! View rendering for the map viewer.
//!
//! Layout: fixed title bar on top, fixed 300px sidebar on the left (map
//! dropdown and description panel), map panel filling the rest. The dropdown
//! starts on a disabled placeholder, so there is no default selection and a
//! picked map cannot be cleared.

use super::messages::Msg;
use super::state::ViewerComponent;
use crate::components::map_panel::MapPanel;
use crate::components::title_bar::TitleBar;
use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

const TITLE: &str = "Atlas Językowy Kaszubszczyzny";

pub fn view(component: &ViewerComponent, ctx: &Context<ViewerComponent>) -> Html {
    html! {
        <div style="display: flex; flex-direction: row; height: 100vh; font-family: 'Inter', sans-serif;">
            <TitleBar title={TITLE} />
            { build_sidebar(component, ctx.link()) }
            <MapPanel figure={component.figure.clone()} />
        </div>
    }
}

fn build_sidebar(component: &ViewerComponent, link: &Scope<ViewerComponent>) -> Html {
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectMap(select.value())
    });

    html! {
        <div style="
                width: 300px;
                padding: 20px 15px;
                background-color: #f4f4f4;
                box-shadow: 2px 0 5px rgba(0,0,0,0.05);
                height: calc(100vh - 60px);
                position: fixed;
                top: 60px;
                left: 0;
                box-sizing: border-box;
                overflow-y: auto;
            ">
            <label for="map-column" style="display: block; font-weight: 500; margin-top: 20px; margin-bottom: 10px;">
                {"Wybierz mapę:"}
            </label>
            <select id="map-column" style="width: 100%; padding: 6px;" {onchange}>
                <option value="" disabled={true} hidden={true} selected={component.selected.is_none()}>
                    {"Wybierz..."}
                </option>
                { for component.maps.iter().map(|map_id| build_option(map_id, component.selected.as_deref())) }
            </select>
            <div style="font-size: 12px; color: #777; margin-top: 4px;">
                { format!("Punkty: {}", component.point_count) }
            </div>
            <label style="display: block; font-weight: 500; margin-top: 20px; margin-bottom: 10px;">
                {"Opis Mapy:"}
            </label>
            <div id="map-description" style="
                    height: calc(100vh - 190px);
                    overflow-y: auto;
                    padding: 10px;
                    border: 1px solid #ddd;
                    border-radius: 5px;
                    background-color: #f9f9f9;
                    white-space: pre-wrap;
                    font-size: 14px;
                    box-sizing: border-box;
                ">
                { component.description.clone() }
            </div>
        </div>
    }
}

fn build_option(map_id: &str, selected: Option<&str>) -> Html {
    html! {
        <option value={map_id.to_string()} selected={selected == Some(map_id)}>
            { map_id.to_string() }
        </option>
    }
}
