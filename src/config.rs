//! Site Configuration
//!
//! Optional `window.siteConfig` object set by the page template. Every field
//! is defaulted, so templates only override what differs.

use serde::Deserialize;
use portfolio_carousel::CarouselConfig;

use crate::host;

/// Name of the host global holding the config
pub const SITE_CONFIG_GLOBAL: &str = "siteConfig";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// `log` level name: off, error, warn, info, debug, trace
    pub log_level: String,
    /// Height of the fixed header, subtracted from anchor scroll targets
    pub header_offset_px: f64,
    /// Scroll distance after which the header switches to its compact style
    pub header_scrolled_after_px: f64,
    pub preloader_fade_ms: u32,
    pub phone: PhoneMaskConfig,
    pub contact: ContactFormConfig,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            header_offset_px: 80.0,
            header_scrolled_after_px: 100.0,
            preloader_fade_ms: 300,
            phone: PhoneMaskConfig::default(),
            contact: ContactFormConfig::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Read from the host page. `Ok(None)` when the page sets no config.
    pub fn from_host() -> Result<Option<Self>, String> {
        host::read_global(SITE_CONFIG_GLOBAL)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneMaskConfig {
    /// Replaces the first typed digit
    pub country_prefix: String,
}

impl Default for PhoneMaskConfig {
    fn default() -> Self {
        Self { country_prefix: "+7".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormConfig {
    pub min_phone_digits: usize,
    pub min_message_chars: usize,
    pub phone_error: String,
    pub message_error: String,
}

impl Default for ContactFormConfig {
    fn default() -> Self {
        Self {
            min_phone_digits: 10,
            min_message_chars: 10,
            phone_error: "Введите корректный номер телефона".to_string(),
            message_error: "Сообщение должно содержать минимум 10 символов".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_site_config() {
        let config: SiteConfig = serde_json::from_str(
            r#"{
                "logLevel": "debug",
                "headerOffsetPx": 64,
                "contact": { "minMessageChars": 20 },
                "carousel": { "imageFadeMs": 0, "text": { "placeholderPhrases": ["Demo"] } }
            }"#,
        ).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.header_offset_px, 64.0);
        assert_eq!(config.header_scrolled_after_px, 100.0);
        assert_eq!(config.contact.min_message_chars, 20);
        assert_eq!(config.contact.min_phone_digits, 10);
        assert_eq!(config.phone.country_prefix, "+7");
        assert_eq!(config.carousel.image_fade_ms, 0);
        assert_eq!(config.carousel.text.placeholder_phrases, vec!["Demo".to_string()]);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
    }
}
