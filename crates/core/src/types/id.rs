//! Newtype IDs for type-safe entity references.
//!
//! Guides are identified by the opaque string carried in the page's
//! `data-id` attribute; simulated orders get a random UUID.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur when parsing a [`GuideId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GuideIdError {
    /// The input is empty or only whitespace.
    #[error("guide id cannot be empty")]
    Empty,
}

/// Identifier of a purchasable guide.
///
/// Stable across sessions: the same guide always carries the same ID, which
/// is what makes a persisted cart meaningful after a reload.
///
/// ```
/// use saber_simples_core::GuideId;
///
/// let id = GuideId::parse("guia-financas").unwrap();
/// assert_eq!(id.as_str(), "guia-financas");
/// assert!(GuideId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct GuideId(String);

impl GuideId {
    /// Parse a `GuideId`, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`GuideIdError::Empty`] if nothing remains after trimming.
    pub fn parse(s: &str) -> Result<Self, GuideIdError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(GuideIdError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for GuideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for GuideId {
    type Err = GuideIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GuideId {
    type Error = GuideIdError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl AsRef<str> for GuideId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a simulated order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(Uuid);

impl OrderId {
    /// Generate a fresh random order ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}
