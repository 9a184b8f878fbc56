//! Header Scroll State
//!
//! The `.header` switches to its `scrolled` style once the page moves past
//! a threshold.

use leptos::ev;
use leptos::prelude::*;

use crate::dom;

pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn init_header_state(threshold: f64) {
    let Some(header) = dom::query(".header") else {
        log::debug!("no .header, scroll state disabled");
        return;
    };

    let (scroll_y, set_scroll_y) = signal(current_scroll_y());
    let scrolled = Memo::new(move |_| is_scrolled(scroll_y.get(), threshold));

    Effect::new(move |_| {
        let classes = header.class_list();
        let result = if scrolled.get() {
            classes.add_1("scrolled")
        } else {
            classes.remove_1("scrolled")
        };
        if let Err(err) = result {
            log::warn!("header class not updated: {:?}", err);
        }
    });

    let _ = window_event_listener(ev::scroll, move |_| set_scroll_y.set(current_scroll_y()));
}
