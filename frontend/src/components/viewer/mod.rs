//! Map viewer: root module wiring the Yew `Component` implementation with
//! submodules for state, messages, update logic, view rendering, and helpers.
//!
//! On first render the component asks the backend for the map catalog and for
//! the empty map shell, so the page shows a centered map before anything is
//! selected. Afterwards the only input is the map dropdown.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ViewerComponent;

impl Component for ViewerComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ViewerComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            update::fetch_catalog(ctx.link().clone());
            update::fetch_view(ctx.link().clone(), None);
        }
    }
}
