//! DOM Helpers
//!
//! Thin lookups over the server-rendered page. Missing nodes come back as
//! `None` / empty so callers can go inert instead of failing.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub fn by_id(id: &str) -> Option<HtmlElement> {
    document()?.get_element_by_id(id)?.dyn_into().ok()
}

/// First match in the document
pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// First match below `root`
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

/// All matches in the document, in document order
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|doc| doc.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Trimmed text of the first match below `root`, empty if absent
pub fn text_of(root: &Element, selector: &str) -> String {
    query_in(root, selector)
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default()
}

pub fn set_display(el: &HtmlElement, value: &str) {
    let _ = el.style().set_property("display", value);
}

/// Attach a listener for the page lifetime
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        log::warn!("failed to bind {} listener: {:?}", event, err);
    }
    cb.forget();
}

/// Run `f` once the document is parsed
pub fn when_ready<F>(f: F)
where
    F: FnOnce() + 'static,
{
    let Some(doc) = document() else {
        return;
    };
    if doc.ready_state() != "loading" {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    let _ = doc.add_event_listener_with_callback("DOMContentLoaded", cb.unchecked_ref());
}
