//! Carousel Controller
//!
//! Owns the item list and the current index, decides which item a card
//! activation refers to and pushes the selected item into the display slots.
//!
//! State machine: Closed → (activate / open) → Open → (navigate) → Open,
//! and Open → Closed when the host dismisses the modal.

use crate::error::{CarouselError, CarouselResult};
use crate::item::{parse_item_id, ItemList, PortfolioItem};
use crate::text::{ImageView, RenderedItem, TextRules};

/// Output side of the carousel. Implementations skip slots they cannot find.
pub trait DisplaySlots {
    fn set_image(&mut self, image: &ImageView, transition: ImageTransition);
    fn set_title(&mut self, title: &str);
    /// `None` hides the slot
    fn set_description(&mut self, description: Option<&str>);
    fn set_service(&mut self, service: Option<&str>);
    fn set_client(&mut self, client: Option<&str>);
    /// Prev/Next controls
    fn set_nav_visible(&mut self, visible: bool);
}

/// The external dialog widget
pub trait ModalHost {
    /// False when the dialog could not be shown
    fn show(&mut self) -> bool;
}

/// How a new image replaces the old one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageTransition {
    Immediate,
    /// Fade out, swap source, fade in
    Fade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Prev => -1,
            Direction::Next => 1,
        }
    }
}

/// Keys the carousel cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    /// Left to the host modal's own dismissal
    Escape,
    Other,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => NavKey::ArrowLeft,
            "ArrowRight" => NavKey::ArrowRight,
            "Escape" => NavKey::Escape,
            _ => NavKey::Other,
        }
    }
}

/// Result of a key press. `Navigated` means the default scroll must be suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Navigated,
    Ignored,
}

/// What the user activated: a card's identifier and/or its position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardActivation {
    /// Raw identifier attribute, string typed
    pub item_id: Option<String>,
    /// Explicit index attribute, or the card's order among all cards
    pub position: Option<usize>,
}

/// Which tier of the fallback chain picked the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    ById(usize),
    ByPosition(usize),
    Default,
}

impl Resolution {
    pub fn index(self) -> usize {
        match self {
            Resolution::ById(index) | Resolution::ByPosition(index) => index,
            Resolution::Default => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub current_index: usize,
    pub is_open: bool,
}

pub struct CarouselController<S, M> {
    items: ItemList,
    rules: TextRules,
    state: CarouselState,
    slots: S,
    host: M,
}

impl<S: DisplaySlots, M: ModalHost> CarouselController<S, M> {
    /// An empty list never yields a controller, so it can never be opened
    pub fn new(items: ItemList, rules: TextRules, slots: S, host: M) -> CarouselResult<Self> {
        if items.is_empty() {
            return Err(CarouselError::NoItems);
        }
        Ok(Self {
            items,
            rules,
            state: CarouselState::default(),
            slots,
            host,
        })
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn items(&self) -> &ItemList {
        &self.items
    }

    pub fn current_item(&self) -> Option<&PortfolioItem> {
        self.items.get(self.state.current_index)
    }

    pub fn slots(&self) -> &S {
        &self.slots
    }

    pub fn host(&self) -> &M {
        &self.host
    }

    /// Identifier match, then card position, then the first item
    pub fn resolve(&self, activation: &CardActivation) -> Resolution {
        if let Some(index) = activation
            .item_id
            .as_deref()
            .and_then(parse_item_id)
            .and_then(|id| self.items.position_of(id))
        {
            return Resolution::ById(index);
        }

        match activation.position {
            Some(position) if position < self.items.len() => Resolution::ByPosition(position),
            _ => Resolution::Default,
        }
    }

    pub fn resolve_index_for_activation(&self, activation: &CardActivation) -> usize {
        self.resolve(activation).index()
    }

    /// Resolve a card click and open the modal on it
    pub fn activate(&mut self, activation: &CardActivation) -> bool {
        let resolution = self.resolve(activation);
        log::debug!("card activation {:?} resolved to {:?}", activation, resolution);
        self.open(resolution.index())
    }

    /// Show the item at `index`. Out-of-range indices change nothing.
    /// Stays Closed when the host fails to show its dialog.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            log::warn!("open ignored: index {} out of {}", index, self.items.len());
            return false;
        }

        self.state.current_index = index;
        self.render(ImageTransition::Immediate);
        self.update_nav();
        if !self.host.show() {
            log::warn!("host modal did not open, carousel stays closed");
            self.state.is_open = false;
            return false;
        }
        self.state.is_open = true;
        true
    }

    /// Step with unconditional wrap-around
    pub fn navigate(&mut self, direction: Direction) {
        let len = self.items.len() as isize;
        if len == 0 {
            return;
        }

        let current = self.state.current_index as isize;
        self.state.current_index = (current + direction.delta()).rem_euclid(len) as usize;
        self.render(ImageTransition::Fade);
        self.update_nav();
    }

    /// Arrow keys navigate while the modal is open
    pub fn handle_key(&mut self, key: NavKey) -> KeyOutcome {
        if !self.state.is_open {
            return KeyOutcome::Ignored;
        }

        match key {
            NavKey::ArrowLeft => self.navigate(Direction::Prev),
            NavKey::ArrowRight => self.navigate(Direction::Next),
            NavKey::Escape | NavKey::Other => return KeyOutcome::Ignored,
        }
        KeyOutcome::Navigated
    }

    /// The host reports the modal as shown (also when opened by other means)
    pub fn on_host_opened(&mut self) {
        self.state.is_open = true;
        self.update_nav();
    }

    /// The host dismissed the modal. The index is kept for the next open.
    pub fn on_host_closed(&mut self) {
        self.state.is_open = false;
    }

    pub fn nav_visible(&self) -> bool {
        self.items.len() > 1
    }

    fn update_nav(&mut self) {
        let visible = self.nav_visible();
        self.slots.set_nav_visible(visible);
    }

    fn render(&mut self, transition: ImageTransition) {
        let Some(item) = self.items.get(self.state.current_index) else {
            return;
        };
        let RenderedItem { image, title, description, service, client } = self.rules.render(item);

        self.slots.set_image(&image, transition);
        self.slots.set_title(&title);
        self.slots.set_description(description.as_deref());
        self.slots.set_service(service.as_deref());
        self.slots.set_client(client.as_deref());
    }
}
