//! Core types for Saber Simples.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod price;

pub use cart::{Cart, CartLine};
pub use email::{Email, EmailError};
pub use id::{GuideId, GuideIdError, OrderId};
pub use price::{CurrencyCode, Price, PriceError};
