//! Guide catalog.
//!
//! Each purchasable guide is a card on the page carrying `data-id`,
//! `data-name` and `data-price` attributes. [`GuideCard`] is the parsed form
//! of those attributes; [`Catalog`] is the list of cards, loaded from
//! `content/guides.json`.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use saber_simples_core::{GuideId, GuideIdError, Price, PriceError};

/// Errors raised while reading guide cards.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid guide id: {0}")]
    InvalidId(#[from] GuideIdError),

    #[error("Guide {id} has no name")]
    MissingName { id: String },

    #[error("Guide {id} has an invalid price: {source}")]
    InvalidPrice {
        id: String,
        #[source]
        source: PriceError,
    },

    #[error("Guide {0} is listed twice")]
    DuplicateId(String),

    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A purchasable guide as described by its card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideCard {
    pub id: GuideId,
    pub name: String,
    pub price: Price,
}

impl GuideCard {
    /// Parse the raw `data-id`, `data-name` and `data-price` attribute values.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the id or name is blank or the price is not a
    /// non-negative number.
    pub fn from_attributes(id: &str, name: &str, price: &str) -> Result<Self, CatalogError> {
        let id = GuideId::parse(id)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(CatalogError::MissingName { id: id.into_inner() });
        }
        let price = Price::parse(price).map_err(|source| CatalogError::InvalidPrice {
            id: id.to_string(),
            source,
        })?;

        Ok(Self {
            id,
            name: name.to_string(),
            price,
        })
    }
}

/// Price as written in the catalog file: attribute text or a JSON number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Deserialize)]
struct RawCard {
    id: String,
    name: String,
    price: RawPrice,
}

/// All guides on offer, in page order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    guides: Vec<GuideCard>,
}

impl Catalog {
    /// Build a catalog from parsed cards.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` if two cards share an id.
    pub fn new(guides: Vec<GuideCard>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for guide in &guides {
            if !seen.insert(guide.id.as_str()) {
                return Err(CatalogError::DuplicateId(guide.id.to_string()));
            }
        }
        Ok(Self { guides })
    }

    /// Parse a JSON array of `{id, name, price}` cards.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or any card is invalid.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawCard> = serde_json::from_str(json)?;
        let guides = raw
            .into_iter()
            .map(|card| {
                let price = match card.price {
                    RawPrice::Text(text) => text,
                    RawPrice::Number(number) => number.to_string(),
                };
                GuideCard::from_attributes(&card.id, &card.name, &price)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(guides)
    }

    /// Load the catalog file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), guides = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Look up a guide.
    #[must_use]
    pub fn get(&self, id: &GuideId) -> Option<&GuideCard> {
        self.guides.iter().find(|guide| &guide.id == id)
    }

    /// Guides in page order.
    pub fn iter(&self) -> impl Iterator<Item = &GuideCard> {
        self.guides.iter()
    }

    /// Number of guides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.guides.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes() {
        let card = GuideCard::from_attributes("g1", " Guide One ", "19.90").unwrap();
        assert_eq!(card.id.as_str(), "g1");
        assert_eq!(card.name, "Guide One");
        assert_eq!(card.price, Price::from_cents(1990));
    }

    #[test]
    fn test_from_attributes_rejects_bad_price() {
        let err = GuideCard::from_attributes("g1", "Guide One", "grátis").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPrice { id, .. } if id == "g1"));
    }

    #[test]
    fn test_from_attributes_rejects_blank_fields() {
        assert!(matches!(
            GuideCard::from_attributes("", "Guide", "1"),
            Err(CatalogError::InvalidId(_))
        ));
        assert!(matches!(
            GuideCard::from_attributes("g1", "  ", "1"),
            Err(CatalogError::MissingName { .. })
        ));
    }

    #[test]
    fn test_json_accepts_text_and_number_prices() {
        let catalog = Catalog::from_json_str(
            r#"[{"id":"g1","name":"A","price":"1.00"},{"id":"g2","name":"B","price":2.5}]"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        let g2 = catalog.get(&GuideId::parse("g2").unwrap()).unwrap();
        assert_eq!(g2.price, Price::from_cents(250));
    }

    #[test]
    fn test_json_rejects_duplicates() {
        let err = Catalog::from_json_str(
            r#"[{"id":"g1","name":"A","price":1},{"id":"g1","name":"B","price":2}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "g1"));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let json = include_str!("../content/guides.json");
        let catalog = Catalog::from_json_str(json).unwrap();
        assert!(!catalog.is_empty());
    }
}
