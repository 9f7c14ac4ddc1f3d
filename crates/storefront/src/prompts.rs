//! User prompts: confirmation requests and notices.
//!
//! The cart manager never talks to a display directly. Whatever front-end is
//! hosting it (a page, a terminal, a test) implements [`Confirm`] and
//! [`Notifier`] and hands them over in a [`Prompts`] bundle.

use std::time::Duration;

use crate::config::NotificationStyle;

/// Blocking yes/no question.
pub trait Confirm {
    /// Ask the user to confirm `message`. Returns `true` on yes.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Delivers notices to the user.
pub trait Notifier {
    /// Show `notice`.
    fn notify(&mut self, notice: &Notice);
}

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

/// A user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Text shown to the user.
    pub message: String,
    /// `None` for blocking dialogs, otherwise when a banner goes away.
    pub dismiss_after: Option<Duration>,
}

impl Notice {
    /// Build a notice delivered according to `style`.
    pub fn new(level: NoticeLevel, message: impl Into<String>, style: NotificationStyle) -> Self {
        let dismiss_after = match style {
            NotificationStyle::Dialog => None,
            NotificationStyle::Banner { dismiss_after } => Some(dismiss_after),
        };
        Self {
            level,
            message: message.into(),
            dismiss_after,
        }
    }

    /// Whether the notice blocks until dismissed.
    #[must_use]
    pub const fn is_blocking(&self) -> bool {
        self.dismiss_after.is_none()
    }
}

/// The prompt capabilities a cart manager needs.
pub struct Prompts {
    pub confirm: Box<dyn Confirm>,
    pub notifier: Box<dyn Notifier>,
}

impl Prompts {
    /// Bundle a confirmation provider and a notifier.
    pub fn new(confirm: impl Confirm + 'static, notifier: impl Notifier + 'static) -> Self {
        Self {
            confirm: Box::new(confirm),
            notifier: Box::new(notifier),
        }
    }
}

impl std::fmt::Debug for Prompts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prompts").finish_non_exhaustive()
    }
}

/// A [`Confirm`] that always gives the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, message: &str) -> bool {
        tracing::debug!(answer = self.0, %message, "Auto-answered confirmation");
        self.0
    }
}

/// A [`Notifier`] that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Warning => tracing::warn!(message = %notice.message, "Notice"),
            NoticeLevel::Info | NoticeLevel::Success => {
                tracing::info!(message = %notice.message, "Notice");
            }
        }
    }
}
