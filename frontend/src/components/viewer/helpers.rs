//! Small utilities for the map viewer component.
//!
//! - **Selection handling**: mapping the raw `<select>` value to a selection and
//!   deciding whether a server response still matches what the user picked.
//! - **User Feedback**: temporary "toast" notifications for failed requests.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Turns a `<select>` value into a selection. The placeholder option has an
/// empty value and cannot be chosen again, so it never clears a selection.
pub fn parse_selection(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// A response for `response_for` is applied only if it is still the current
/// selection; replies to earlier, superseded selections are dropped.
pub fn is_current(selected: Option<&str>, response_for: Option<&str>) -> bool {
    selected == response_for
}

/// Displays a temporary notification message at the bottom of the screen.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "'Inter', sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
