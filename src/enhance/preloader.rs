//! Preloader
//!
//! Fades the `.preloader` overlay out once the window has loaded.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::dom;

fn fade_out(fade_ms: u32) {
    let Some(preloader) = dom::query(".preloader").and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let _ = preloader.class_list().add_1("fade-out");
    Timeout::new(fade_ms, move || dom::set_display(&preloader, "none")).forget();
}

pub fn init_preloader(fade_ms: u32) {
    let Some(window) = web_sys::window() else {
        return;
    };
    // The wasm bundle may arrive after `load` has already fired
    if dom::document().is_some_and(|doc| doc.ready_state() == "complete") {
        fade_out(fade_ms);
    } else {
        dom::listen(&window, "load", move |_| fade_out(fade_ms));
    }
}
