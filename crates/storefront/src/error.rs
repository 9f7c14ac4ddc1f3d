//! Error types for the storefront library.
//!
//! Shopper-level rejections (a guide already in the cart, checking out an
//! empty cart) are not errors; they come back as outcomes and notices. What
//! remains here are collaborator faults.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::contact::ContactError;
use crate::storage::StorageError;

/// Failure of a cart operation.
#[derive(Debug, Error)]
pub enum CartError {
    /// The durable slot could not be written. The in-memory cart was left
    /// as it was before the operation.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Application-level error for front-ends driving the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Contact form error: {0}")]
    Contact(#[from] ContactError),

    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias defaulting to `CartError`.
pub type Result<T, E = CartError> = std::result::Result<T, E>;
