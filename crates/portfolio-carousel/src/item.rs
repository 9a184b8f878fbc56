//! Portfolio Items
//!
//! The item model and the acquisition chain that builds the list once per
//! page load: host data first, scraped cards otherwise. The two sources are
//! never merged.

use serde::{Deserialize, Serialize};

/// Externally assigned item identifier
pub type ItemId = i64;

/// One case study as shown in the modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub service: String,
    pub image: String,
    pub client: String,
}

/// Identifier as it arrives from the host: number, numeric string or junk
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawId {
    pub fn as_item_id(&self) -> Option<ItemId> {
        match self {
            RawId::Int(id) => Some(*id),
            RawId::Float(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as ItemId),
            RawId::Float(_) => None,
            RawId::Text(s) => parse_item_id(s),
        }
    }
}

/// Coerce a string-typed identifier (e.g. a `data-*` attribute)
pub fn parse_item_id(raw: &str) -> Option<ItemId> {
    raw.trim().parse().ok()
}

/// Item as supplied by the host data object. Nulls and gaps are tolerated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawItem {
    pub id: Option<RawId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub service: Option<String>,
    pub image: Option<String>,
    pub client: Option<String>,
}

/// Shape of the host-provided data object
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HostPortfolioData {
    pub items: Option<Vec<RawItem>>,
}

/// Text fields read off one rendered card
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardFields {
    /// Raw `data-portfolio-id` value, if any
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub service: String,
    pub image: String,
    pub client: String,
}

/// Which strategy produced the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSource {
    HostData,
    ScrapedCards,
}

/// Ordered, immutable list of items for the session
#[derive(Debug, Clone, PartialEq)]
pub struct ItemList {
    items: Vec<PortfolioItem>,
    source: ItemSource,
}

impl ItemList {
    pub fn from_host(raw: Vec<RawItem>) -> Self {
        let items = raw
            .into_iter()
            .enumerate()
            .map(|(index, raw)| PortfolioItem {
                id: raw
                    .id
                    .as_ref()
                    .and_then(RawId::as_item_id)
                    .unwrap_or(index as ItemId),
                title: raw.title.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
                service: raw.service.unwrap_or_default(),
                image: raw.image.unwrap_or_default(),
                client: raw.client.unwrap_or_default(),
            })
            .collect();
        Self { items, source: ItemSource::HostData }
    }

    pub fn from_cards(cards: Vec<CardFields>) -> Self {
        let items = cards
            .into_iter()
            .enumerate()
            .map(|(index, card)| PortfolioItem {
                id: card
                    .id
                    .as_deref()
                    .and_then(parse_item_id)
                    .unwrap_or(index as ItemId),
                title: card.title.trim().to_string(),
                description: card.description.trim().to_string(),
                service: card.service.trim().to_string(),
                image: card.image,
                client: card.client.trim().to_string(),
            })
            .collect();
        Self { items, source: ItemSource::ScrapedCards }
    }

    /// Host data when present and non-empty, otherwise the card scrape.
    /// The scrape only runs when it is needed.
    pub fn acquire<F>(host: Option<HostPortfolioData>, scrape: F) -> Self
    where
        F: FnOnce() -> Vec<CardFields>,
    {
        match host.and_then(|data| data.items).filter(|items| !items.is_empty()) {
            Some(raw) => {
                log::debug!("portfolio items from host data: {}", raw.len());
                Self::from_host(raw)
            }
            None => {
                let list = Self::from_cards(scrape());
                log::debug!("portfolio items scraped from cards: {}", list.len());
                list
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PortfolioItem> {
        self.items.get(index)
    }

    pub fn source(&self) -> ItemSource {
        self.source
    }

    /// Position of the first item carrying `id`
    pub fn position_of(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PortfolioItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: Option<&str>, title: &str) -> CardFields {
        CardFields {
            id: id.map(str::to_string),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_host_ids_are_coerced() {
        let data: HostPortfolioData = serde_json::from_str(
            r#"{ "items": [
                { "id": 7, "title": "A" },
                { "id": "12", "title": "B" },
                { "id": 3.0, "title": "C" },
                { "id": "abc", "title": "D" },
                { "title": "E", "client": null }
            ] }"#,
        ).unwrap();

        let list = ItemList::acquire(Some(data), || panic!("scrape must not run"));
        let ids: Vec<ItemId> = list.iter().map(|i| i.id).collect();

        assert_eq!(list.source(), ItemSource::HostData);
        assert_eq!(ids, vec![7, 12, 3, 3, 4]);
        assert_eq!(list.get(4).unwrap().client, "");
    }

    #[test]
    fn test_empty_host_list_falls_back_to_cards() {
        let data = HostPortfolioData { items: Some(vec![]) };
        let list = ItemList::acquire(Some(data), || vec![card(Some("5"), "  Sign  "), card(None, "Banner")]);

        assert_eq!(list.source(), ItemSource::ScrapedCards);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().id, 5);
        assert_eq!(list.get(0).unwrap().title, "Sign");
        assert_eq!(list.get(1).unwrap().id, 1);
    }

    #[test]
    fn test_missing_host_and_no_cards_is_empty() {
        let list = ItemList::acquire(None, Vec::new);
        assert!(list.is_empty());
    }

    #[test]
    fn test_position_of_returns_first_duplicate() {
        let list = ItemList::from_cards(vec![card(Some("2"), "a"), card(Some("9"), "b"), card(Some("9"), "c")]);
        assert_eq!(list.position_of(9), Some(1));
        assert_eq!(list.position_of(4), None);
    }

    #[test]
    fn test_parse_item_id_trims() {
        assert_eq!(parse_item_id(" 42 "), Some(42));
        assert_eq!(parse_item_id(""), None);
        assert_eq!(parse_item_id("4x"), None);
    }
}
