//! Portfolio Carousel
//!
//! DOM-free core of the portfolio modal: item acquisition, display text
//! rules and the controller state machine. The host binding implements
//! [`DisplaySlots`] and [`ModalHost`] and forwards clicks and key presses.

mod config;
mod controller;
mod error;
mod item;
mod text;

pub use config::{CarouselConfig, TextConfig, DEFAULT_FALLBACK_TITLE, DEFAULT_PLACEHOLDER_PHRASES};
pub use controller::{
    CardActivation, CarouselController, CarouselState, Direction, DisplaySlots, ImageTransition,
    KeyOutcome, ModalHost, NavKey, Resolution,
};
pub use error::{CarouselError, CarouselResult};
pub use item::{
    parse_item_id, CardFields, HostPortfolioData, ItemId, ItemList, ItemSource, PortfolioItem, RawId,
    RawItem,
};
pub use text::{ImageView, RenderedItem, TextRules};
