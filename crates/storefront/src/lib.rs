//! Saber Simples Storefront library.
//!
//! Client-side behavior of the storefront page, independent of any display:
//!
//! - [`cart`] - The cart manager: the single owner of cart state
//! - [`storage`] - Durable key-value slot backing the cart
//! - [`views`] - View models, askama templates and the HTML renderer
//! - [`prompts`] - Confirmation and notification capabilities a front-end provides
//! - [`catalog`] - Guide cards on offer
//! - [`contact`] - Contact form validation
//!
//! # Example
//!
//! ```
//! use saber_simples_core::Price;
//! use saber_simples_storefront::cart::{AddOutcome, CartManager};
//! use saber_simples_storefront::config::CartSettings;
//! use saber_simples_storefront::prompts::{FixedAnswer, LogNotifier, Prompts};
//! use saber_simples_storefront::storage::{CartSlot, MemoryStore};
//!
//! let slot = CartSlot::new(MemoryStore::new(), "saberSimplesCart");
//! let prompts = Prompts::new(FixedAnswer(true), LogNotifier);
//! let mut manager = CartManager::new(slot, prompts, CartSettings::default());
//! manager.load();
//!
//! let id = "g1".parse().unwrap();
//! let outcome = manager.add(id, "Guide One", Price::from_cents(100)).unwrap();
//! assert_eq!(outcome, AddOutcome::Added);
//! assert_eq!(manager.view().cart.total, "R$ 1,00");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod error;
pub mod messages;
pub mod prompts;
pub mod storage;
pub mod views;
