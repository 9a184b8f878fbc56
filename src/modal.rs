//! Portfolio Modal Binding
//!
//! Wires the carousel controller to the server-rendered portfolio page:
//! card clicks, Prev/Next controls, arrow keys and the Bootstrap modal
//! lifecycle. All decisions live in `portfolio_carousel`; this module only
//! reads and writes DOM nodes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlElement, HtmlImageElement};

use portfolio_carousel::{
    CardActivation, CardFields, CarouselConfig, CarouselController, CarouselError, CarouselResult,
    Direction, DisplaySlots, HostPortfolioData, ImageTransition, ImageView, ItemList, KeyOutcome,
    ModalHost, NavKey, TextRules,
};

use crate::dom;
use crate::host;

/// Host global with preloaded items
const PORTFOLIO_DATA_GLOBAL: &str = "portfolioData";

const MODAL_ID: &str = "portfolioModal";
const IMAGE_ID: &str = "portfolioModalImage";
const TITLE_ID: &str = "portfolioModalTitle";
const DESCRIPTION_ID: &str = "portfolioModalDescription";
const SERVICE_ID: &str = "portfolioModalService";
const CLIENT_ID: &str = "portfolioModalClient";
const PREV_ID: &str = "portfolioModalPrev";
const NEXT_ID: &str = "portfolioModalNext";

const CARD_SELECTOR: &str = ".portfolio-work-card";

type DomController = CarouselController<DomSlots, BootstrapModal>;
type SharedController = Rc<RefCell<DomController>>;

// ========================
// Display Slots
// ========================

/// Counts image requests so a delayed fade can tell it was superseded
#[derive(Debug, Clone, Default)]
struct ImageGeneration(Rc<Cell<u64>>);

impl ImageGeneration {
    fn advance(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    fn is_current(&self, generation: u64) -> bool {
        self.0.get() == generation
    }
}

/// The modal's output elements. Any of them may be missing from the page.
pub struct DomSlots {
    image: Option<HtmlImageElement>,
    title: Option<HtmlElement>,
    description: Option<HtmlElement>,
    service: Option<HtmlElement>,
    client: Option<HtmlElement>,
    prev: Option<HtmlElement>,
    next: Option<HtmlElement>,
    fade_ms: u32,
    generation: ImageGeneration,
}

impl DomSlots {
    pub fn lookup(fade_ms: u32) -> Self {
        Self {
            image: dom::by_id(IMAGE_ID).and_then(|el| el.dyn_into().ok()),
            title: dom::by_id(TITLE_ID),
            description: dom::by_id(DESCRIPTION_ID),
            service: dom::by_id(SERVICE_ID),
            client: dom::by_id(CLIENT_ID),
            prev: dom::by_id(PREV_ID),
            next: dom::by_id(NEXT_ID),
            fade_ms,
            generation: ImageGeneration::default(),
        }
    }
}

/// Set text and show with `display`, or clear and hide
fn show_text(slot: Option<&HtmlElement>, text: Option<&str>, display: &str) {
    let Some(el) = slot else {
        return;
    };
    el.set_text_content(Some(text.unwrap_or("")));
    dom::set_display(el, if text.is_some() { display } else { "none" });
}

/// `<i class="bi bi-briefcase"></i> <span>name</span>`
fn fill_client(el: &HtmlElement, name: &str) -> Result<(), JsValue> {
    let doc = el.owner_document().ok_or_else(|| JsValue::from_str("detached client slot"))?;
    let icon = doc.create_element("i")?;
    icon.set_class_name("bi bi-briefcase");
    let label = doc.create_element("span")?;
    label.set_text_content(Some(name));

    el.set_text_content(None);
    el.append_child(&icon)?;
    el.append_child(&doc.create_text_node(" "))?;
    el.append_child(&label)?;
    Ok(())
}

impl DisplaySlots for DomSlots {
    fn set_image(&mut self, image: &ImageView, transition: ImageTransition) {
        let Some(img) = &self.image else {
            return;
        };
        // Any fade still in flight belongs to an older request
        let generation = self.generation.advance();
        match transition {
            ImageTransition::Immediate => {
                img.set_src(&image.src);
                img.set_alt(&image.alt);
                let _ = HtmlElement::style(img).set_property("opacity", "1");
            }
            ImageTransition::Fade => {
                let _ = HtmlElement::style(img).set_property("opacity", "0");
                let img = img.clone();
                let ImageView { src, alt } = image.clone();
                let latest = self.generation.clone();
                Timeout::new(self.fade_ms, move || {
                    if !latest.is_current(generation) {
                        return;
                    }
                    img.set_src(&src);
                    img.set_alt(&alt);
                    let _ = HtmlElement::style(&img).set_property("opacity", "1");
                })
                .forget();
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        if let Some(el) = &self.title {
            el.set_text_content(Some(title));
        }
    }

    fn set_description(&mut self, description: Option<&str>) {
        show_text(self.description.as_ref(), description, "block");
    }

    fn set_service(&mut self, service: Option<&str>) {
        show_text(self.service.as_ref(), service, "inline-block");
    }

    fn set_client(&mut self, client: Option<&str>) {
        let Some(el) = &self.client else {
            return;
        };
        match client {
            Some(name) => match fill_client(el, name) {
                Ok(()) => dom::set_display(el, "flex"),
                Err(err) => log::warn!("client slot not rendered: {:?}", err),
            },
            None => dom::set_display(el, "none"),
        }
    }

    fn set_nav_visible(&mut self, visible: bool) {
        let display = if visible { "flex" } else { "none" };
        for control in [&self.prev, &self.next].into_iter().flatten() {
            dom::set_display(control, display);
        }
    }
}

// ========================
// Modal Host
// ========================

pub struct BootstrapModal {
    element: HtmlElement,
}

impl ModalHost for BootstrapModal {
    fn show(&mut self) -> bool {
        match host::show_bootstrap_modal(&self.element) {
            Ok(()) => true,
            Err(err) => {
                log::error!("bootstrap modal did not open: {:?}", err);
                false
            }
        }
    }
}

// ========================
// Wiring
// ========================

/// Read the fields of every rendered card
fn scrape_cards() -> Vec<CardFields> {
    dom::query_all(CARD_SELECTOR)
        .iter()
        .map(|card| CardFields {
            id: card.get_attribute("data-portfolio-id"),
            title: dom::text_of(card, ".portfolio-work-title"),
            description: dom::text_of(card, ".portfolio-work-description"),
            service: dom::text_of(card, ".portfolio-work-service"),
            image: dom::query_in(card, ".portfolio-work-image img")
                .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
                .map(|img| img.src())
                .unwrap_or_default(),
            client: dom::text_of(card, ".portfolio-work-client span"),
        })
        .collect()
}

/// Explicit index attribute when it names a loaded item, else DOM order
fn card_position(explicit: Option<&str>, dom_position: usize, item_count: usize) -> usize {
    explicit
        .and_then(|raw| raw.trim().parse::<usize>().ok())
        .filter(|&index| index < item_count)
        .unwrap_or(dom_position)
}

fn card_activation(card: &Element, dom_position: usize, item_count: usize) -> CardActivation {
    let explicit = card.get_attribute("data-portfolio-index");
    CardActivation {
        item_id: card.get_attribute("data-portfolio-id"),
        position: Some(card_position(explicit.as_deref(), dom_position, item_count)),
    }
}

/// Clicks on links and buttons inside a card keep their own meaning
fn clicked_interactive(ev: &Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a, button").ok().flatten())
        .is_some()
}

/// Run `f` unless the controller is already mid-operation. Bootstrap fires
/// some lifecycle events synchronously from inside `show()`.
fn with_controller<R>(controller: &SharedController, f: impl FnOnce(&mut DomController) -> R) -> Option<R> {
    match controller.try_borrow_mut() {
        Ok(mut c) => Some(f(&mut c)),
        Err(_) => {
            log::debug!("carousel busy, nested event skipped");
            None
        }
    }
}

fn build_controller(config: &CarouselConfig) -> CarouselResult<(DomController, HtmlElement)> {
    let host_data = host::read_global::<HostPortfolioData>(PORTFOLIO_DATA_GLOBAL).unwrap_or_else(|err| {
        log::warn!("{}", CarouselError::HostData(err));
        None
    });
    let items = ItemList::acquire(host_data, scrape_cards);
    let modal = dom::by_id(MODAL_ID).ok_or_else(|| CarouselError::ModalMissing(MODAL_ID.to_string()))?;
    let rules = TextRules::new(&config.text)?;

    let controller = CarouselController::new(
        items,
        rules,
        DomSlots::lookup(config.image_fade_ms),
        BootstrapModal { element: modal.clone() },
    )?;
    Ok((controller, modal))
}

/// Entry point. Leaves the page untouched when there is nothing to show.
pub fn init_portfolio_modal(config: &CarouselConfig) {
    let (controller, modal) = match build_controller(config) {
        Ok(built) => built,
        Err(err) => {
            log::debug!("portfolio modal inactive: {}", err);
            return;
        }
    };
    log::info!(
        "portfolio modal ready: {} items ({:?})",
        controller.items().len(),
        controller.items().source()
    );
    let controller: SharedController = Rc::new(RefCell::new(controller));

    bind_cards(&controller);
    bind_controls(&controller);
    bind_keyboard(&controller);
    bind_lifecycle(&controller, &modal);
}

fn bind_cards(controller: &SharedController) {
    let item_count = controller.borrow().items().len();
    for (index, card) in dom::query_all(CARD_SELECTOR).into_iter().enumerate() {
        if let Some(card) = card.dyn_ref::<HtmlElement>() {
            let _ = card.style().set_property("cursor", "pointer");
        }
        let activation = card_activation(&card, index, item_count);
        let controller = controller.clone();
        dom::listen(&card, "click", move |ev| {
            if clicked_interactive(&ev) {
                return;
            }
            let _ = with_controller(&controller, |c| c.activate(&activation));
        });
    }
}

fn bind_controls(controller: &SharedController) {
    for (id, direction) in [(PREV_ID, Direction::Prev), (NEXT_ID, Direction::Next)] {
        let Some(button) = dom::by_id(id) else {
            continue;
        };
        let controller = controller.clone();
        dom::listen(&button, "click", move |ev| {
            ev.stop_propagation();
            with_controller(&controller, |c| c.navigate(direction));
        });
    }
}

fn bind_keyboard(controller: &SharedController) {
    let controller = controller.clone();
    let _ = window_event_listener(ev::keydown, move |ev| {
        let key = NavKey::from_key(&ev.key());
        if with_controller(&controller, |c| c.handle_key(key)) == Some(KeyOutcome::Navigated) {
            ev.prevent_default();
        }
    });
}

fn bind_lifecycle(controller: &SharedController, modal: &HtmlElement) {
    let on_show = controller.clone();
    dom::listen(modal, "show.bs.modal", move |_| {
        with_controller(&on_show, |c| c.on_host_opened());
    });

    // Focus so arrow keys reach the page while the dialog is up
    let focus_target = modal.clone();
    dom::listen(modal, "shown.bs.modal", move |_| {
        let _ = focus_target.focus();
    });

    let on_hidden = controller.clone();
    dom::listen(modal, "hidden.bs.modal", move |_| {
        with_controller(&on_hidden, |c| c.on_host_closed());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_position_prefers_valid_index_attribute() {
        assert_eq!(card_position(Some("2"), 0, 3), 2);
        assert_eq!(card_position(Some(" 1 "), 0, 3), 1);
        assert_eq!(card_position(None, 1, 3), 1);
    }

    #[test]
    fn test_card_position_invalid_attribute_uses_dom_order() {
        assert_eq!(card_position(Some("7"), 1, 3), 1);
        assert_eq!(card_position(Some("-1"), 2, 3), 2);
        assert_eq!(card_position(Some("first"), 2, 3), 2);
        assert_eq!(card_position(Some(""), 1, 3), 1);
    }

    #[test]
    fn test_superseded_fade_is_dropped() {
        let latest = ImageGeneration::default();
        let fade = latest.advance();
        assert!(latest.is_current(fade));

        let immediate = latest.advance();
        assert!(!latest.is_current(fade));
        assert!(latest.is_current(immediate));

        // A clone held by a pending timer sees later requests
        let timer_view = latest.clone();
        let newer = latest.advance();
        assert!(timer_view.is_current(newer));
    }
}
