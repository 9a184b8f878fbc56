//! Smooth Anchor Scrolling
//!
//! In-page `#anchor` links scroll smoothly and stop below the fixed header.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsCast;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// Element id an in-page link points at. `#` alone and Bootstrap's `#bs-*`
/// anchors are not scroll targets.
pub fn anchor_target_id(href: &str) -> Option<String> {
    let fragment = href.strip_prefix('#')?;
    if fragment.is_empty() || fragment.starts_with("bs-") {
        return None;
    }
    Some(percent_decode_str(fragment).decode_utf8_lossy().into_owned())
}

/// Document Y to scroll to so the target clears the header
pub fn scroll_destination(viewport_top: f64, page_offset: f64, header_offset: f64) -> f64 {
    viewport_top + page_offset - header_offset
}

pub fn init_smooth_scroll(header_offset: f64) {
    let anchors = dom::query_all(r##"a[href^="#"]"##);
    log::debug!("smooth scroll on {} anchors", anchors.len());

    for anchor in anchors {
        dom::listen(&anchor, "click", move |ev| {
            let Some(href) = ev
                .current_target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"))
            else {
                return;
            };
            let Some(target) = anchor_target_id(&href)
                .and_then(|id| dom::document()?.get_element_by_id(&id))
            else {
                return;
            };
            let Some(window) = web_sys::window() else {
                return;
            };
            ev.prevent_default();

            let top = scroll_destination(
                target.get_bounding_client_rect().top(),
                window.page_y_offset().unwrap_or(0.0),
                header_offset,
            );
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}
