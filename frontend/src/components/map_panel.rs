use crate::map_bridge::draw_figure;
use common::model::figure::MapFigure;
use yew::{html, Component, Context, Html, Properties};

pub const MAP_CONTAINER_ID: &str = "map-graph";

#[derive(Properties, PartialEq)]
pub struct MapPanelProps {
    /// `None` until the first figure arrives from the server.
    #[prop_or_default]
    pub figure: Option<MapFigure>,
}

/// Area right of the sidebar holding the Leaflet map.
///
/// The `<div>` itself stays empty in the virtual DOM; Leaflet fills it. Every
/// time a new figure is passed in, it is redrawn after rendering.
pub struct MapPanel;

impl Component for MapPanel {
    type Message = ();
    type Properties = MapPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MapPanel
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div style="
                    margin-left: 300px;
                    margin-top: 60px;
                    height: calc(100vh - 60px);
                    width: calc(100vw - 300px);
                    box-sizing: border-box;
                ">
                <div id={MAP_CONTAINER_ID} style="height: 100%; width: 100%;" />
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if let Some(figure) = &ctx.props().figure {
            draw_figure(MAP_CONTAINER_ID, figure);
        }
    }
}
