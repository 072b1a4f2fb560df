use viz_core::{Signal, SignalQueue};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::constants::{PROFILE_EVENT, PROFILE_TAB_DATA_KEY, PROFILE_TAB_SELECTOR};
use crate::input;

/// Dataset selection arrives two ways: the page-level `gg:dept-change` event
/// and direct clicks on `.tab[data-key]` elements.
pub fn wire_profile_selection(document: &web::Document, signals: &SignalQueue) {
    if let Some(window) = web::window() {
        let signals = signals.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::CustomEvent| {
            if let Some(key) = input::profile_key(detail_key(&ev.detail())) {
                signals.push(Signal::SelectProfile(key));
            }
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(PROFILE_EVENT, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    let Ok(tabs) = document.query_selector_all(PROFILE_TAB_SELECTOR) else {
        return;
    };
    for i in 0..tabs.length() {
        let Some(tab) = tabs.item(i).and_then(|n| n.dyn_into::<web::HtmlElement>().ok()) else {
            continue;
        };
        let signals = signals.clone();
        let target = tab.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(key) = input::profile_key(target.dataset().get(PROFILE_TAB_DATA_KEY)) {
                signals.push(Signal::SelectProfile(key));
            }
        }) as Box<dyn FnMut()>);
        _ = tab.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

fn detail_key(detail: &JsValue) -> Option<String> {
    if detail.is_undefined() || detail.is_null() {
        return None;
    }
    js_sys::Reflect::get(detail, &JsValue::from_str("key"))
        .ok()
        .and_then(|v| v.as_string())
}
