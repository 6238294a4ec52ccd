use crate::app::App;

mod app;
mod components;
mod map_bridge;

fn main() {
    yew::Renderer::<App>::new().render();
}
