use contracts::usecases::u001_browse_stores::is_near_bottom;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn viewport_near_bottom() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return false;
    };

    let inner_height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let scroll_top = root.scroll_top() as f64;
    let offset_height = root
        .dyn_ref::<web_sys::HtmlElement>()
        .map(|el| el.offset_height())
        .unwrap_or(0) as f64;

    is_near_bottom(inner_height, scroll_top, offset_height)
}

/// Calls `on_near_bottom` on every window scroll that ends near the bottom
/// of the document. The listener lives as long as the calling component.
pub fn on_scroll_near_bottom(on_near_bottom: impl Fn() + 'static) {
    let handle = window_event_listener(ev::scroll, move |_| {
        if viewport_near_bottom() {
            on_near_bottom();
        }
    });
    on_cleanup(move || handle.remove());
}
