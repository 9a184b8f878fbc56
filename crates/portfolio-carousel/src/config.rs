//! Carousel Configuration
//!
//! Vocabulary for the text rules plus presentation timings. Every field has
//! a default so the host may supply any subset.

use serde::{Deserialize, Serialize};

/// Default placeholder phrases left behind by seeded demo content
pub const DEFAULT_PLACEHOLDER_PHRASES: &[&str] = &["Пример работы", "Example work"];

/// Label used when neither title nor service yields anything
pub const DEFAULT_FALLBACK_TITLE: &str = "Работа";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Fade-out duration before the image source is swapped on navigation
    pub image_fade_ms: u32,
    pub text: TextConfig,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            image_fade_ms: 150,
            text: TextConfig::default(),
        }
    }
}

/// Phrase lists and labels consumed by [`crate::TextRules`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextConfig {
    /// Matched case-insensitively, as literal text
    pub placeholder_phrases: Vec<String>,
    pub fallback_title: String,
    pub fallback_image_alt: String,
    /// How many characters a description may add to the service name and
    /// still count as a duplicate of it
    pub near_duplicate_slack: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            placeholder_phrases: DEFAULT_PLACEHOLDER_PHRASES
                .iter()
                .map(|p| p.to_string())
                .collect(),
            fallback_title: DEFAULT_FALLBACK_TITLE.to_string(),
            fallback_image_alt: DEFAULT_FALLBACK_TITLE.to_string(),
            near_duplicate_slack: 5,
        }
    }
}
