//! Open/closed state of the slide-in cart panel.

/// Visibility of the cart panel. Not persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelState {
    open: bool,
}

impl PanelState {
    /// A closed panel.
    pub const CLOSED: Self = Self { open: false };
    /// An open panel.
    pub const OPEN: Self = Self { open: true };

    /// Whether the panel is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Background scrolling is locked while the panel is open.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.open
    }

    /// Value of the panel's `aria-hidden` attribute.
    #[must_use]
    pub const fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    /// State after a toggle: opens when forced or currently closed,
    /// otherwise closes.
    #[must_use]
    pub const fn toggled(self, force_open: bool) -> Self {
        if force_open || !self.open {
            Self::OPEN
        } else {
            Self::CLOSED
        }
    }
}
