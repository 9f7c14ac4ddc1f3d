//! Cart view models and templates.

use askama::Template;

use saber_simples_core::{Cart, CartLine, CurrencyCode};

use crate::cart::PanelState;
use crate::messages;

/// Cart line display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub remove_label: String,
}

impl CartItemView {
    fn new(line: &CartLine, currency: CurrencyCode) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.price.display(currency),
            remove_label: messages::remove_label(&line.name),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: usize,
}

impl CartView {
    /// Project `cart` for display in `currency`.
    #[must_use]
    pub fn new(cart: &Cart, currency: CurrencyCode) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView::new(line, currency))
                .collect(),
            total: cart.total().display(currency),
            item_count: cart.len(),
        }
    }

    /// Create an empty cart view.
    #[must_use]
    pub fn empty(currency: CurrencyCode) -> Self {
        Self::new(&Cart::new(), currency)
    }

    /// Whether there is nothing to list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The checkout button is disabled exactly when the cart is empty.
    #[must_use]
    pub fn checkout_disabled(&self) -> bool {
        self.is_empty()
    }
}

/// Everything the cart panel and header badge show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub cart: CartView,
    pub panel: PanelState,
}

impl PanelView {
    /// Project `cart` together with the panel state.
    #[must_use]
    pub fn new(cart: &Cart, panel: PanelState, currency: CurrencyCode) -> Self {
        Self {
            cart: CartView::new(cart, currency),
            panel,
        }
    }
}

/// Slide-in cart panel template.
#[derive(Template)]
#[template(path = "cart/panel.html")]
pub struct CartPanelTemplate<'a> {
    pub cart: &'a CartView,
    pub panel: PanelState,
}

impl<'a> CartPanelTemplate<'a> {
    /// Template for `view`.
    #[must_use]
    pub const fn new(view: &'a PanelView) -> Self {
        Self {
            cart: &view.cart,
            panel: view.panel,
        }
    }
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use saber_simples_core::{GuideId, Price};

    use super::*;

    fn cart(lines: &[(&str, &str, u32)]) -> Cart {
        lines
            .iter()
            .map(|(id, name, cents)| {
                CartLine::new(GuideId::parse(id).unwrap(), *name, Price::from_cents(*cents))
            })
            .collect()
    }

    #[test]
    fn test_view_formats_amounts() {
        let view = CartView::new(
            &cart(&[("g1", "Guide One", 100), ("g2", "Guide Two", 250)]),
            CurrencyCode::BRL,
        );
        assert_eq!(view.item_count, 2);
        assert_eq!(view.total, "R$ 3,50");
        assert_eq!(view.items[1].price, "R$ 2,50");
        assert_eq!(view.items[1].remove_label, "Remover Guide Two");
        assert!(!view.checkout_disabled());
    }

    #[test]
    fn test_empty_view() {
        let view = CartView::empty(CurrencyCode::BRL);
        assert!(view.is_empty());
        assert!(view.checkout_disabled());
        assert_eq!(view.total, "R$ 0,00");
    }

    #[test]
    fn test_panel_items_empty_placeholder() {
        let view = PanelView::new(&Cart::new(), PanelState::CLOSED, CurrencyCode::BRL);
        let html = CartPanelTemplate::new(&view).render().unwrap();
        assert!(html.contains("empty-cart-message"));
        assert!(!html.contains("cart-item\""));
    }

    #[test]
    fn test_panel_items_rows() {
        let view = PanelView::new(
            &cart(&[("g1", "Guide One", 100)]),
            PanelState::OPEN,
            CurrencyCode::BRL,
        );
        let html = CartPanelTemplate::new(&view).render().unwrap();
        assert!(html.contains("<h4>Guide One</h4>"));
        assert!(html.contains("1 x R$ 1,00"));
        assert!(html.contains("data-id=\"g1\""));
        assert!(!html.contains("empty-cart-message"));
    }

    #[test]
    fn test_panel_items_escapes_names() {
        let view = PanelView::new(
            &cart(&[("x", "<script>alert(1)</script>", 100)]),
            PanelState::OPEN,
            CurrencyCode::BRL,
        );
        let html = CartPanelTemplate::new(&view).render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_panel_template_state() {
        let view = PanelView::new(&Cart::new(), PanelState::CLOSED, CurrencyCode::BRL);
        let html = CartPanelTemplate::new(&view).render().unwrap();
        assert!(html.contains("aria-hidden=\"true\""));
        assert!(!html.contains("cart-sidebar open"));
        assert!(html.contains(" disabled>Finalizar Compra"));

        let view = PanelView::new(&cart(&[("g1", "A", 100)]), PanelState::OPEN, CurrencyCode::BRL);
        let html = CartPanelTemplate::new(&view).render().unwrap();
        assert!(html.contains("class=\"cart-sidebar open\""));
        assert!(html.contains("aria-hidden=\"false\""));
        assert!(html.contains("<strong id=\"cart-total-value\">R$ 1,00</strong>"));
        assert!(!html.contains(" disabled>Finalizar Compra"));
    }

    #[test]
    fn test_count_badge() {
        let html = CartCountTemplate { count: 0 }.render().unwrap();
        assert!(html.contains("class=\"cart-counter\""));
        let html = CartCountTemplate { count: 3 }.render().unwrap();
        assert!(html.contains("class=\"cart-counter active\">3<"));
    }
}
