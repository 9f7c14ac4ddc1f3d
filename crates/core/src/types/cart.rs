//! Cart contents.
//!
//! A [`Cart`] is an ordered list of [`CartLine`]s. Each guide can appear at
//! most once and every line has a quantity of one; adding a guide that is
//! already present is rejected rather than accumulated.

use serde::{Deserialize, Serialize};

use super::id::GuideId;
use super::price::Price;

/// One distinct guide held in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Guide identifier.
    pub id: GuideId,
    /// Display label.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Always 1 for lines created by this crate.
    pub quantity: u32,
}

impl CartLine {
    /// Create a line with a quantity of one.
    #[must_use]
    pub fn new(id: GuideId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity: 1,
        }
    }

    /// Price of the line (`price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// Ordered cart lines, oldest addition first.
///
/// Serializes as a bare JSON array of lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// All lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether a line for `id` exists.
    #[must_use]
    pub fn contains(&self, id: &GuideId) -> bool {
        self.lines.iter().any(|line| &line.id == id)
    }

    /// Append a line. Returns `false` without changing anything if a line with
    /// the same ID is already present.
    pub fn insert(&mut self, line: CartLine) -> bool {
        if self.contains(&line.id) {
            return false;
        }
        self.lines.push(line);
        true
    }

    /// Remove the line for `id`, returning it if it was present.
    pub fn remove(&mut self, id: &GuideId) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| &line.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Sum of `price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

impl FromIterator<CartLine> for Cart {
    /// Collects lines, keeping the first occurrence of each ID.
    fn from_iter<T: IntoIterator<Item = CartLine>>(iter: T) -> Self {
        let mut cart = Self::new();
        for line in iter {
            cart.insert(line);
        }
        cart
    }
}
