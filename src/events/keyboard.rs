use crate::panel;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_panel_toggle_key(key: &str) -> bool {
    key == "h" || key == "H"
}

// Wire an 'H' key handler to show/hide the parameter panel
pub fn wire_panel_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if is_panel_toggle_key(&ev.key()) {
                panel::toggle(&doc);
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
