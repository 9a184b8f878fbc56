//! Carousel Errors
//!
//! Raised only while the carousel is being assembled. Once a controller
//! exists every operation degrades to a logged no-op instead.

use thiserror::Error;

/// Common result type for carousel construction
pub type CarouselResult<T> = Result<T, CarouselError>;

#[derive(Debug, Error)]
pub enum CarouselError {
    /// Neither host data nor rendered cards produced a single item
    #[error("no portfolio items to show")]
    NoItems,

    /// The host page has no modal element to open
    #[error("modal host element `{0}` not found")]
    ModalMissing(String),

    /// A configured placeholder phrase produced an unusable pattern
    #[error("invalid text pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The host data object exists but does not have the expected shape
    #[error("host portfolio data unreadable: {0}")]
    HostData(String),
}
