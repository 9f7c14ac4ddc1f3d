//! Cart manager.
//!
//! [`CartManager`] is the only owner of cart state. It keeps the in-memory
//! [`Cart`] and the durable slot in lockstep and tells observers to re-render
//! after every change.
//!
//! # Write-through
//!
//! Mutations are applied to a copy of the cart, the copy is persisted, and only
//! then does it replace the in-memory cart. If persisting fails the previous
//! cart stays in place, which is still what the slot holds and what was last
//! rendered, and the shopper gets a warning.

mod checkout;
mod events;
mod panel;

pub use checkout::{OrderReceipt, order_summary};
pub use events::{CartEvent, CartObserver};
pub use panel::PanelState;

use tracing::instrument;

use saber_simples_core::{Cart, CartLine, GuideId, Price};

use crate::catalog::GuideCard;
use crate::config::CartSettings;
use crate::error::{CartError, Result};
use crate::messages;
use crate::prompts::{Notice, NoticeLevel, Prompts};
use crate::storage::{CartSlot, KeyValueStore};
use crate::views::PanelView;

/// Result of [`CartManager::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added,
    /// A line with the same ID was already present; nothing changed.
    AlreadyInCart,
}

/// Result of [`CartManager::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Declined,
}

/// Result of [`CartManager::checkout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The shopper confirmed; the cart is now empty.
    Placed(OrderReceipt),
    /// The shopper backed out; nothing changed.
    Declined,
    /// There was nothing to check out.
    EmptyCart,
}

/// Owner of the cart and its durable slot.
pub struct CartManager<S> {
    cart: Cart,
    slot: CartSlot<S>,
    prompts: Prompts,
    settings: CartSettings,
    panel: PanelState,
    observers: Vec<Box<dyn CartObserver>>,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Create a manager with an empty cart and a closed panel.
    ///
    /// Call [`load`](Self::load) once to pick up the persisted cart.
    pub fn new(slot: CartSlot<S>, prompts: Prompts, settings: CartSettings) -> Self {
        Self {
            cart: Cart::new(),
            slot,
            prompts,
            settings,
            panel: PanelState::CLOSED,
            observers: Vec::new(),
        }
    }

    /// Register an observer for future events.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Current cart contents.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Current panel state.
    #[must_use]
    pub const fn panel(&self) -> PanelState {
        self.panel
    }

    /// Runtime settings.
    #[must_use]
    pub const fn settings(&self) -> &CartSettings {
        &self.settings
    }

    /// The durable slot.
    #[must_use]
    pub const fn slot(&self) -> &CartSlot<S> {
        &self.slot
    }

    /// Replace the cart with the persisted one and render.
    ///
    /// A missing slot leaves the cart empty. An unreadable or corrupt slot
    /// is logged and also yields an empty cart; it is left as is until the
    /// next mutation overwrites it.
    #[instrument(skip_all, fields(key = %self.slot.key()))]
    pub fn load(&mut self) -> PanelView {
        self.cart = match self.slot.load() {
            Ok(Some(cart)) => {
                tracing::info!(lines = cart.len(), "Cart restored");
                cart
            }
            Ok(None) => {
                tracing::debug!("No saved cart");
                Cart::new()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Saved cart unreadable, starting empty");
                Cart::new()
            }
        };
        self.render()
    }

    /// Add a guide.
    ///
    /// A guide already in the cart is not added again; the shopper is told so
    /// and nothing is persisted or rendered. Otherwise the line is appended,
    /// persisted and rendered, the cart button pulses, the shopper is told and
    /// the panel opens.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the new cart could not be persisted.
    /// The cart is unchanged in that case.
    #[instrument(skip_all, fields(guide_id = %id))]
    pub fn add(
        &mut self,
        id: GuideId,
        name: impl Into<String>,
        price: Price,
    ) -> Result<AddOutcome> {
        let name = name.into();

        if self.cart.contains(&id) {
            tracing::info!("Guide already in cart");
            self.notify(NoticeLevel::Info, messages::already_in_cart(&name));
            return Ok(AddOutcome::AlreadyInCart);
        }

        let mut next = self.cart.clone();
        next.insert(CartLine::new(id, name.clone(), price));
        self.commit(next)?;
        tracing::info!(lines = self.cart.len(), "Guide added");

        self.emit(&CartEvent::Pulse {
            clear_after: self.settings.pulse,
        });
        self.notify(NoticeLevel::Success, messages::added_to_cart(&name));
        self.toggle_panel(true);

        Ok(AddOutcome::Added)
    }

    /// Add a catalog guide.
    ///
    /// # Errors
    ///
    /// See [`add`](Self::add).
    pub fn add_guide(&mut self, guide: &GuideCard) -> Result<AddOutcome> {
        self.add(guide.id.clone(), guide.name.clone(), guide.price)
    }

    /// Remove the line for `id`. Persists and renders even when `id` was not
    /// in the cart. Returns whether a line was removed.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the cart could not be persisted.
    #[instrument(skip_all, fields(guide_id = %id))]
    pub fn remove(&mut self, id: &GuideId) -> Result<bool> {
        let mut next = self.cart.clone();
        let removed = next.remove(id).is_some();
        self.commit(next)?;
        tracing::info!(removed, lines = self.cart.len(), "Remove handled");
        Ok(removed)
    }

    /// Empty the cart after the shopper confirms.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the empty cart could not be persisted.
    #[instrument(skip_all)]
    pub fn clear(&mut self) -> Result<ClearOutcome> {
        if !self.prompts.confirm.confirm(messages::CONFIRM_CLEAR) {
            tracing::debug!("Clear declined");
            return Ok(ClearOutcome::Declined);
        }

        self.commit(Cart::new())?;
        tracing::info!("Cart cleared");
        Ok(ClearOutcome::Cleared)
    }

    /// Sum of line prices, computed fresh on every call.
    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    /// Run the simulated checkout.
    ///
    /// An empty cart gets a warning and nothing else. Otherwise the shopper
    /// confirms an itemized summary; on yes the cart is emptied, persisted
    /// and rendered, the shopper is told the order went through and the
    /// panel closes.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the emptied cart could not be
    /// persisted. No order is reported and the cart is unchanged.
    #[instrument(skip_all, fields(lines = self.cart.len()))]
    pub fn checkout(&mut self) -> Result<CheckoutOutcome> {
        if self.cart.is_empty() {
            self.notify(NoticeLevel::Warning, messages::EMPTY_AT_CHECKOUT);
            return Ok(CheckoutOutcome::EmptyCart);
        }

        let summary = order_summary(&self.cart, self.settings.currency);
        if !self.prompts.confirm.confirm(&summary) {
            tracing::debug!("Checkout declined");
            return Ok(CheckoutOutcome::Declined);
        }

        let receipt = OrderReceipt::from_cart(&self.cart);
        self.commit(Cart::new())?;
        tracing::info!(
            order_id = %receipt.order_id,
            total = %receipt.total,
            "Simulated order placed"
        );

        self.notify(NoticeLevel::Success, messages::ORDER_SUCCESS);
        self.close_panel();

        Ok(CheckoutOutcome::Placed(receipt))
    }

    /// Current projection of the cart and panel, without notifying anyone.
    #[must_use]
    pub fn view(&self) -> PanelView {
        PanelView::new(&self.cart, self.panel, self.settings.currency)
    }

    /// Build the projection and hand it to every observer.
    pub fn render(&mut self) -> PanelView {
        let view = self.view();
        self.emit(&CartEvent::Rendered(&view));
        view
    }

    /// Open the panel when `force_open` is set or it is closed, otherwise
    /// close it.
    pub fn toggle_panel(&mut self, force_open: bool) -> PanelState {
        self.set_panel(self.panel.toggled(force_open))
    }

    /// Open the panel.
    pub fn open_panel(&mut self) -> PanelState {
        self.set_panel(PanelState::OPEN)
    }

    /// Close the panel.
    pub fn close_panel(&mut self) -> PanelState {
        self.set_panel(PanelState::CLOSED)
    }

    fn set_panel(&mut self, panel: PanelState) -> PanelState {
        self.panel = panel;
        tracing::debug!(open = panel.is_open(), "Panel toggled");
        self.emit(&CartEvent::PanelToggled(panel));
        panel
    }

    /// Persist `next`, then adopt and render it.
    fn commit(&mut self, next: Cart) -> Result<()> {
        if let Err(e) = self.slot.save(&next) {
            tracing::warn!(error = %e, "Failed to persist cart");
            self.notify(NoticeLevel::Warning, messages::SAVE_FAILED);
            return Err(CartError::Storage(e));
        }
        self.cart = next;
        self.render();
        Ok(())
    }

    fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let notice = Notice::new(level, message, self.settings.notifications);
        self.prompts.notifier.notify(&notice);
    }

    fn emit(&mut self, event: &CartEvent<'_>) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}

impl<S> std::fmt::Debug for CartManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("cart", &self.cart)
            .field("panel", &self.panel)
            .field("settings", &self.settings)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
