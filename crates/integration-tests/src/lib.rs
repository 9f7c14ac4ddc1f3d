//! Integration tests for Saber Simples.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p saber-simples-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Shopper flows through the cart manager
//! - `persistence` - Reloads against memory- and file-backed slots
//! - `rendering` - Markup produced by the HTML renderer
//!
//! This library holds the shared fixtures: a scripted confirmation provider
//! and a notifier that records what the shopper was shown.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use saber_simples_storefront::cart::CartManager;
use saber_simples_storefront::config::CartSettings;
use saber_simples_storefront::prompts::{Confirm, Notice, Notifier, Prompts};
use saber_simples_storefront::storage::{CartSlot, KeyValueStore};

/// Key the page uses for its cart slot.
pub const CART_KEY: &str = "saberSimplesCart";

/// Everything the shopper was asked and told.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    questions: Rc<RefCell<Vec<String>>>,
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl Transcript {
    /// Confirmation messages, in order.
    #[must_use]
    pub fn questions(&self) -> Vec<String> {
        self.questions.borrow().clone()
    }

    /// Notices, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Notice messages, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.notices
            .borrow()
            .iter()
            .map(|notice| notice.message.clone())
            .collect()
    }
}

/// Answers confirmations from a script; answers no once it runs out.
struct ScriptedConfirm {
    answers: VecDeque<bool>,
    transcript: Transcript,
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, message: &str) -> bool {
        self.transcript
            .questions
            .borrow_mut()
            .push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}

struct RecordingNotifier(Transcript);

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: &Notice) {
        self.0.notices.borrow_mut().push(notice.clone());
    }
}

/// Build and load a cart manager over `store` whose confirmations are
/// answered by `answers`.
pub fn manager<S: KeyValueStore>(
    store: S,
    answers: &[bool],
    settings: CartSettings,
) -> (CartManager<S>, Transcript) {
    let transcript = Transcript::default();
    let prompts = Prompts::new(
        ScriptedConfirm {
            answers: answers.iter().copied().collect(),
            transcript: transcript.clone(),
        },
        RecordingNotifier(transcript.clone()),
    );
    let mut manager = CartManager::new(CartSlot::new(store, CART_KEY), prompts, settings);
    manager.load();
    (manager, transcript)
}
