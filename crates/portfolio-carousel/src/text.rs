//! Display Text Rules
//!
//! Turns raw item fields into what the modal shows. Seeded demo content
//! tends to carry titles like "Вывески #3" and descriptions like
//! "<p>Пример работы: Вывески</p>"; these rules keep such placeholders and
//! near-duplicates of the service name off screen.

use regex::Regex;
use std::sync::OnceLock;

use crate::config::TextConfig;
use crate::error::CarouselResult;
use crate::item::PortfolioItem;

/// Markup regexes (lazy loaded)
static TAG_RE: OnceLock<Regex> = OnceLock::new();
static BLOCK_BREAK_RE: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"(?s)</?[A-Za-z!][^>]*>").expect("static pattern"))
}

fn block_break_re() -> &'static Regex {
    BLOCK_BREAK_RE.get_or_init(|| {
        Regex::new(r"(?i)<br\s*/?>|</(?:p|div|li|h[1-6])\s*>").expect("static pattern")
    })
}

/// Numeric placeholder, e.g. `#12`
const NUMBER_MARKER: &str = r"#\s*\d+";

/// Common HTML entities and their text
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&amp;", "&"), // last, so "&amp;lt;" stays "&lt;"
];

/// Image source plus its accessible label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageView {
    pub src: String,
    pub alt: String,
}

/// One item mapped onto the five display slots. `None` means "hide the slot".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    pub image: ImageView,
    pub title: String,
    pub description: Option<String>,
    pub service: Option<String>,
    pub client: Option<String>,
}

/// Compiled text rules
#[derive(Debug, Clone)]
pub struct TextRules {
    title_marker: Regex,
    boilerplate: Option<Regex>,
    fallback_title: String,
    fallback_image_alt: String,
    near_duplicate_slack: usize,
}

impl TextRules {
    pub fn new(config: &TextConfig) -> CarouselResult<Self> {
        let phrases = phrase_alternation(&config.placeholder_phrases);

        let title_marker = match &phrases {
            Some(p) => Regex::new(&format!(r"(?i){NUMBER_MARKER}|{p}\s*:?"))?,
            None => Regex::new(NUMBER_MARKER)?,
        };
        // Phrase, colon, then everything up to a sentence end or line break
        let boilerplate = phrases
            .as_ref()
            .map(|p| Regex::new(&format!(r"(?i){p}\s*:[^.!?\n]*[.!?]?")))
            .transpose()?;

        Ok(Self {
            title_marker,
            boilerplate,
            fallback_title: config.fallback_title.clone(),
            fallback_image_alt: config.fallback_image_alt.clone(),
            near_duplicate_slack: config.near_duplicate_slack,
        })
    }

    pub fn fallback_title(&self) -> &str {
        &self.fallback_title
    }

    /// Title shown in the modal. Never empty.
    pub fn derive_title(&self, title: &str, service: &str) -> String {
        let title = title.trim();
        let service = service.trim();

        let derived = if self.title_marker.is_match(title) {
            if service.is_empty() {
                self.strip_title_markers(title)
            } else {
                service.to_string()
            }
        } else {
            title.to_string()
        };

        if !derived.is_empty() {
            derived
        } else if !service.is_empty() {
            service.to_string()
        } else {
            self.fallback_title.clone()
        }
    }

    fn strip_title_markers(&self, title: &str) -> String {
        let stripped = self.title_marker.replace_all(title, " ");
        collapse_spaces(&stripped)
            .trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '-' | '–' | '—' | ',' | '.'))
            .to_string()
    }

    /// Description as plain text: markup and placeholder sentences removed
    pub fn clean_description(&self, raw: &str) -> String {
        let text = block_break_re().replace_all(raw, "\n");
        let text = tag_re().replace_all(&text, "");
        let mut text = decode_entities(&text);

        if let Some(re) = &self.boilerplate {
            text = re.replace_all(&text, "").into_owned();
        }

        text.lines()
            .map(collapse_spaces)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// True when the cleaned description adds nothing over the service name
    pub fn is_redundant_description(&self, cleaned: &str, service: &str) -> bool {
        if cleaned.is_empty() {
            return true;
        }
        let service = service.trim();
        if service.is_empty() {
            return false;
        }

        let description = cleaned.to_lowercase();
        let service = service.to_lowercase();
        if description == service {
            return true;
        }
        description.starts_with(&service)
            && description.chars().count() - service.chars().count() <= self.near_duplicate_slack
    }

    pub fn render(&self, item: &PortfolioItem) -> RenderedItem {
        let title = self.derive_title(&item.title, &item.service);

        let cleaned = self.clean_description(&item.description);
        let description = (!self.is_redundant_description(&cleaned, &item.service)).then_some(cleaned);

        let service = item.service.trim();
        let service = (!service.is_empty() && service != title).then(|| service.to_string());

        let client = item.client.trim();
        let client = (!client.is_empty()).then(|| client.to_string());

        let alt = if title.is_empty() {
            self.fallback_image_alt.clone()
        } else {
            title.clone()
        };

        RenderedItem {
            image: ImageView { src: item.image.clone(), alt },
            title,
            description,
            service,
            client,
        }
    }
}

/// Escaped, whitespace-tolerant alternation of the configured phrases
fn phrase_alternation(phrases: &[String]) -> Option<String> {
    let escaped: Vec<String> = phrases
        .iter()
        .map(|p| p.split_whitespace().map(regex::escape).collect::<Vec<_>>().join(r"\s+"))
        .filter(|p| !p.is_empty())
        .collect();

    if escaped.is_empty() {
        None
    } else {
        Some(format!("(?:{})", escaped.join("|")))
    }
}

fn decode_entities(text: &str) -> String {
    ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, plain)| acc.replace(entity, plain))
}

fn collapse_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> TextRules {
        TextRules::new(&TextConfig::default()).unwrap()
    }

    fn item(title: &str, description: &str, service: &str, client: &str) -> PortfolioItem {
        PortfolioItem {
            id: 1,
            title: title.to_string(),
            description: description.to_string(),
            service: service.to_string(),
            image: "/media/portfolio/1.jpg".to_string(),
            client: client.to_string(),
        }
    }

    #[test]
    fn test_placeholder_title_becomes_service() {
        let rules = rules();
        assert_eq!(rules.derive_title("Example work: #12", "Branding"), "Branding");
        assert_eq!(rules.derive_title("Вывески #3", "Вывески"), "Вывески");
        assert_eq!(rules.derive_title("пример работы: логотип", "Логотипы"), "Логотипы");
    }

    #[test]
    fn test_placeholder_title_without_service_is_stripped() {
        let rules = rules();
        assert_eq!(rules.derive_title("Logo #3", ""), "Logo");
        assert_eq!(rules.derive_title("Example work: Big sign", ""), "Big sign");
        assert_eq!(rules.derive_title("Example work: #12", ""), "Работа");
    }

    #[test]
    fn test_empty_title_falls_back() {
        let rules = rules();
        assert_eq!(rules.derive_title("", ""), rules.fallback_title());
        assert_eq!(rules.derive_title("   ", "Печать"), "Печать");
    }

    #[test]
    fn test_real_title_is_unchanged() {
        assert_eq!(rules().derive_title("Logo Redesign", "Branding"), "Logo Redesign");
    }

    #[test]
    fn test_clean_description_strips_markup_and_boilerplate() {
        let rules = rules();
        assert_eq!(rules.clean_description("<p>Пример работы: Вывески</p>"), "");
        assert_eq!(
            rules.clean_description("<p>Example work: Branding. Full rebrand for a <b>coffee</b> chain.</p>"),
            "Full rebrand for a coffee chain."
        );
        assert_eq!(
            rules.clean_description("<p>Line&nbsp;one</p><p>Line &amp; two</p>"),
            "Line one\nLine & two"
        );
    }

    #[test]
    fn test_comparison_signs_are_not_markup() {
        let rules = rules();
        assert_eq!(
            rules.clean_description("Prices <100 and >50 guaranteed"),
            "Prices <100 and >50 guaranteed"
        );
        assert_eq!(rules.clean_description("a < b > c"), "a < b > c");
        assert_eq!(rules.clean_description("<!-- note --><em>Neon</em> <= 2m"), "Neon <= 2m");
    }

    #[test]
    fn test_boilerplate_needs_colon() {
        assert_eq!(
            rules().clean_description("Example work shows our range."),
            "Example work shows our range."
        );
    }

    #[test]
    fn test_redundant_descriptions() {
        let rules = rules();
        assert!(rules.is_redundant_description("", "Branding"));
        assert!(rules.is_redundant_description("branding", "Branding"));
        assert!(rules.is_redundant_description("Branding.", "Branding"));
        assert!(rules.is_redundant_description("Branding 2024", "Branding"));
        assert!(!rules.is_redundant_description("Branding for cafes", "Branding"));
        assert!(!rules.is_redundant_description("Short", ""));
        // Counted in characters, not bytes
        assert!(rules.is_redundant_description("Вывески!!", "Вывески"));
    }

    #[test]
    fn test_render_hides_duplicate_service_badge() {
        let rendered = rules().render(&item("Example work: #12", "", "Branding", ""));
        assert_eq!(rendered.title, "Branding");
        assert_eq!(rendered.service, None);
        assert_eq!(rendered.description, None);
        assert_eq!(rendered.client, None);
        assert_eq!(rendered.image.alt, "Branding");
    }

    #[test]
    fn test_render_shows_distinct_slots() {
        let rendered = rules().render(&item(
            "Neon sign",
            "<p>Night cafe neon lettering</p>",
            "Signage",
            " Night Bird ",
        ));
        assert_eq!(rendered.title, "Neon sign");
        assert_eq!(rendered.description.as_deref(), Some("Night cafe neon lettering"));
        assert_eq!(rendered.service.as_deref(), Some("Signage"));
        assert_eq!(rendered.client.as_deref(), Some("Night Bird"));
        assert_eq!(rendered.image.src, "/media/portfolio/1.jpg");
    }

    #[test]
    fn test_custom_vocabulary() {
        let config = TextConfig {
            placeholder_phrases: vec!["Sample (draft)".to_string()],
            fallback_title: "Project".to_string(),
            ..Default::default()
        };
        let rules = TextRules::new(&config).unwrap();

        assert_eq!(rules.derive_title("SAMPLE (DRAFT): x", "Print"), "Print");
        assert_eq!(rules.derive_title("Example work: x", "Print"), "Example work: x");
        assert_eq!(rules.derive_title("", ""), "Project");
    }

    #[test]
    fn test_no_phrases_keeps_number_marker() {
        let config = TextConfig { placeholder_phrases: vec![], ..Default::default() };
        let rules = TextRules::new(&config).unwrap();

        assert_eq!(rules.derive_title("Banner #4", "Print"), "Print");
        assert_eq!(rules.clean_description("Example work: x"), "Example work: x");
    }
}
