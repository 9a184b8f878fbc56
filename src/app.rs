//! Yarko Gorod Frontend App
//!
//! Progressive enhancement of the server-rendered pages. Nothing is
//! rendered here; the component only owns the reactive scope the
//! enhancements run in.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::enhance;
use crate::modal;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    modal::init_portfolio_modal(&config.carousel);

    enhance::init_smooth_scroll(config.header_offset_px);
    enhance::init_header_state(config.header_scrolled_after_px);
    enhance::init_contact_form(&config.contact);
    enhance::init_phone_mask(&config.phone);
    enhance::init_lazy_images();
    enhance::init_preloader(config.preloader_fade_ms);
}
