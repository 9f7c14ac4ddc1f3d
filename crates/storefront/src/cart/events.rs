//! Change notifications emitted by the cart manager.

use std::time::Duration;

use super::panel::PanelState;
use crate::views::PanelView;

/// Something observers may want to reflect on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEvent<'a> {
    /// A fresh projection of the cart and panel. Emitted after every mutation
    /// and on explicit renders.
    Rendered(&'a PanelView),
    /// The cart button should pulse, then reset after `clear_after`.
    Pulse {
        /// How long the pulse lasts.
        clear_after: Duration,
    },
    /// The panel opened or closed.
    PanelToggled(PanelState),
}

/// Receives [`CartEvent`]s synchronously, in subscription order.
pub trait CartObserver {
    /// Handle one event.
    fn on_event(&mut self, event: &CartEvent<'_>);
}

impl<F> CartObserver for F
where
    F: FnMut(&CartEvent<'_>),
{
    fn on_event(&mut self, event: &CartEvent<'_>) {
        self(event);
    }
}
