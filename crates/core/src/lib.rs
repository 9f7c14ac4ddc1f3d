//! Saber Simples Core - Shared types library.
//!
//! This crate provides the types shared by all Saber Simples components:
//! - `storefront` - Cart manager, rendering and page behaviors
//! - `cli` - Terminal front-end driving the cart
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for guide IDs, prices, emails and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
