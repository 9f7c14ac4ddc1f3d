//! HTML renderer observing a cart manager.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use askama::Template;

use super::cart::{CartCountTemplate, CartPanelTemplate, PanelView};
use crate::cart::{CartEvent, CartObserver};

/// Latest markup produced by an [`HtmlRenderer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedCart {
    /// `#cart-counter` badge.
    pub badge: String,
    /// `#cart-sidebar` panel.
    pub panel: String,
    /// Whether the page body should stop scrolling.
    pub scroll_locked: bool,
    /// Length of the most recent cart button pulse, if any was requested.
    pub pulse: Option<Duration>,
}

/// Read access to what an [`HtmlRenderer`] produced.
#[derive(Debug, Clone, Default)]
pub struct RenderedHandle(Rc<RefCell<RenderedCart>>);

impl RenderedHandle {
    /// Copy of the latest output.
    #[must_use]
    pub fn snapshot(&self) -> RenderedCart {
        self.0.borrow().clone()
    }
}

/// Re-renders the panel and badge whenever the cart or panel changes.
///
/// Subscribe it to a [`CartManager`](crate::cart::CartManager) and read the
/// output through the handle from [`HtmlRenderer::handle`].
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    output: RenderedHandle,
    last: Option<PanelView>,
}

impl HtmlRenderer {
    /// Create a renderer with empty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the rendered output.
    #[must_use]
    pub fn handle(&self) -> RenderedHandle {
        self.output.clone()
    }

    fn render(&mut self, view: &PanelView) {
        let panel = CartPanelTemplate::new(view).render();
        let badge = CartCountTemplate {
            count: view.cart.item_count,
        }
        .render();

        match (panel, badge) {
            (Ok(panel), Ok(badge)) => {
                let mut out = self.output.0.borrow_mut();
                out.panel = panel;
                out.badge = badge;
                out.scroll_locked = view.panel.scroll_locked();
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!(error = %e, "Failed to render cart");
            }
        }
        self.last = Some(view.clone());
    }
}

impl CartObserver for HtmlRenderer {
    fn on_event(&mut self, event: &CartEvent<'_>) {
        match event {
            CartEvent::Rendered(view) => self.render(view),
            CartEvent::PanelToggled(panel) => {
                if let Some(mut view) = self.last.take() {
                    view.panel = *panel;
                    self.render(&view);
                } else {
                    self.output.0.borrow_mut().scroll_locked = panel.scroll_locked();
                }
            }
            CartEvent::Pulse { clear_after } => {
                self.output.0.borrow_mut().pulse = Some(*clear_after);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use saber_simples_core::{Cart, CurrencyCode};

    use super::*;
    use crate::cart::PanelState;

    #[test]
    fn test_renders_on_event() {
        let mut renderer = HtmlRenderer::new();
        let handle = renderer.handle();
        let view = PanelView::new(&Cart::new(), PanelState::CLOSED, CurrencyCode::BRL);

        renderer.on_event(&CartEvent::Rendered(&view));
        let out = handle.snapshot();
        assert!(out.panel.contains("id=\"cart-sidebar\""));
        assert!(out.badge.contains(">0<"));
        assert!(!out.scroll_locked);
    }

    #[test]
    fn test_panel_toggle_rerenders_last_view() {
        let mut renderer = HtmlRenderer::new();
        let handle = renderer.handle();
        let view = PanelView::new(&Cart::new(), PanelState::CLOSED, CurrencyCode::BRL);

        renderer.on_event(&CartEvent::Rendered(&view));
        renderer.on_event(&CartEvent::PanelToggled(PanelState::OPEN));

        let out = handle.snapshot();
        assert!(out.panel.contains("cart-sidebar open"));
        assert!(out.scroll_locked);
    }

    #[test]
    fn test_pulse_recorded() {
        let mut renderer = HtmlRenderer::new();
        let handle = renderer.handle();
        renderer.on_event(&CartEvent::Pulse {
            clear_after: Duration::from_millis(500),
        });
        assert_eq!(handle.snapshot().pulse, Some(Duration::from_millis(500)));
    }
}
