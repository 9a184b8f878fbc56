//! Lazy Images
//!
//! `img[data-src]` get their real source when they first scroll into view.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry};

use crate::dom;

const LAZY_ATTR: &str = "data-src";

/// Deferred source worth loading, if any
pub fn pending_source(data_src: Option<String>) -> Option<String> {
    data_src.filter(|src| !src.trim().is_empty())
}

fn reveal(img: &Element) {
    if let Some(src) = pending_source(img.get_attribute(LAZY_ATTR)) {
        let _ = img.set_attribute("src", &src);
    }
    let _ = img.remove_attribute(LAZY_ATTR);
}

pub fn init_lazy_images() {
    let images = dom::query_all("img[data-src]");
    if images.is_empty() {
        return;
    }

    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let img = entry.target();
                reveal(&img);
                observer.unobserve(&img);
            }
        },
    );

    let observer = match IntersectionObserver::new(on_intersect.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            log::debug!("IntersectionObserver unavailable, loading images now: {:?}", err);
            images.iter().for_each(reveal);
            return;
        }
    };
    on_intersect.forget();

    for img in &images {
        observer.observe(img);
    }
    log::debug!("lazy loading {} images", images.len());
}
