//! Durable storage for the cart.
//!
//! The page keeps its cart in a single key-value slot (browser local storage
//! in the original deployment). [`KeyValueStore`] models that store so the
//! cart manager can run against memory in tests and against files from the
//! CLI.
//!
//! # Slot format
//!
//! The slot under [`DEFAULT_STORAGE_KEY`](crate::config::DEFAULT_STORAGE_KEY)
//! holds a JSON array of lines:
//!
//! ```json
//! [{"id": "g1", "name": "Guide One", "price": 1.0, "quantity": 1}]
//! ```

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use saber_simples_core::{Cart, CartLine};

/// Errors raised by a [`KeyValueStore`] or while decoding a slot.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store refused the operation (disabled, quota exceeded, ...).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A string-keyed store of string values.
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The cart's slot in a [`KeyValueStore`].
///
/// Owns the serialize/deserialize pair so that whatever [`CartSlot::save`]
/// writes, [`CartSlot::load`] reads back unchanged.
#[derive(Debug, Clone)]
pub struct CartSlot<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CartSlot<S> {
    /// Create a slot for `key` in `store`.
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The slot key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the persisted cart.
    ///
    /// Duplicate lines in the stored array are dropped, keeping the first.
    /// Ids are trimmed and every quantity is reset to one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the slot does not hold a
    /// valid line array (including a blank id or a negative price), or the
    /// store's own error if it cannot be read.
    pub fn load(&self) -> Result<Option<Cart>, StorageError> {
        let Some(raw) = self.store.get_item(&self.key)? else {
            return Ok(None);
        };
        let lines: Vec<CartLine> = serde_json::from_str(&raw)?;
        let cart = lines
            .into_iter()
            .map(|mut line| {
                if line.quantity != 1 {
                    tracing::warn!(
                        guide_id = %line.id,
                        quantity = line.quantity,
                        "Stored quantity reset to 1"
                    );
                    line.quantity = 1;
                }
                line
            })
            .collect();
        Ok(Some(cart))
    }

    /// Persist `cart`, replacing the slot contents.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be encoded or written.
    pub fn save(&mut self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;
        self.store.set_item(&self.key, &raw)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use saber_simples_core::{GuideId, Price};

    use super::*;

    fn cart() -> Cart {
        [
            CartLine::new(GuideId::parse("g1").unwrap(), "Guide One", Price::from_cents(100)),
            CartLine::new(GuideId::parse("g2").unwrap(), "Guide Two", Price::from_cents(250)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_missing_slot_loads_none() {
        let slot = CartSlot::new(MemoryStore::new(), "cart");
        assert!(slot.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let mut slot = CartSlot::new(MemoryStore::new(), "cart");
        slot.save(&cart()).unwrap();
        assert_eq!(slot.load().unwrap(), Some(cart()));
    }

    #[test]
    fn test_corrupt_slot_is_serialization_error() {
        let mut store = MemoryStore::new();
        store.set_item("cart", "{not json").unwrap();
        let slot = CartSlot::new(store, "cart");
        assert!(matches!(slot.load(), Err(StorageError::Serialization(_))));
    }

    #[test]
    fn test_duplicate_lines_collapse_on_load() {
        let mut store = MemoryStore::new();
        store
            .set_item(
                "cart",
                r#"[{"id":"g1","name":"A","price":1,"quantity":1},
                    {"id":"g1","name":"B","price":2,"quantity":1}]"#,
            )
            .unwrap();
        let cart = CartSlot::new(store, "cart").load().unwrap().unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines().first().unwrap().name, "A");
    }

    #[test]
    fn test_stored_quantity_reset_to_one() {
        let mut store = MemoryStore::new();
        store
            .set_item("cart", r#"[{"id":" g1 ","name":"A","price":1,"quantity":3}]"#)
            .unwrap();
        let cart = CartSlot::new(store, "cart").load().unwrap().unwrap();
        let line = cart.lines().first().unwrap();
        assert_eq!(line.id.as_str(), "g1");
        assert_eq!(line.quantity, 1);
        assert_eq!(cart.total(), Price::from_cents(100));
    }

    #[test]
    fn test_blank_stored_id_is_serialization_error() {
        let mut store = MemoryStore::new();
        store
            .set_item("cart", r#"[{"id":"","name":"A","price":1,"quantity":1}]"#)
            .unwrap();
        let slot = CartSlot::new(store, "cart");
        assert!(matches!(slot.load(), Err(StorageError::Serialization(_))));
    }
}
