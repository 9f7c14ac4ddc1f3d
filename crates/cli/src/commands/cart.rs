//! Cart commands.
//!
//! Every command opens the file-backed cart, applies one operation and
//! exits. The slot on disk plays the part of the browser's local storage, so
//! state carries over between invocations.

use std::io::{self, Write};

use tracing::info;

use saber_simples_core::GuideId;
use saber_simples_storefront::cart::{AddOutcome, CartManager, CheckoutOutcome, ClearOutcome};
use saber_simples_storefront::catalog::Catalog;
use saber_simples_storefront::config::StorefrontConfig;
use saber_simples_storefront::error::AppError;
use saber_simples_storefront::prompts::Prompts;
use saber_simples_storefront::storage::{CartSlot, FileStore, KeyValueStore};
use saber_simples_storefront::messages;
use saber_simples_storefront::views::{HtmlRenderer, PanelView};

use crate::terminal::{TerminalConfirm, TerminalNotifier};

/// Open the cart stored under the configured directory.
pub fn open(config: &StorefrontConfig, assume_yes: bool) -> CartManager<FileStore> {
    let slot = CartSlot::new(
        FileStore::new(config.storage_dir.clone()),
        config.storage_key.clone(),
    );
    let prompts = Prompts::new(TerminalConfirm::new(assume_yes), TerminalNotifier);
    let mut manager = CartManager::new(slot, prompts, config.cart);
    manager.load();
    manager
}

/// Print the cart contents, or with `raw` the slot exactly as stored.
///
/// # Errors
///
/// Returns `AppError` if the slot cannot be read or stdout cannot be written.
pub fn show(manager: &CartManager<FileStore>, raw: bool) -> Result<(), AppError> {
    let mut out = io::stdout().lock();

    if raw {
        match stored_slot(manager)? {
            Some(contents) => writeln!(out, "{contents}")?,
            None => info!(key = manager.slot().key(), "Nothing stored"),
        }
        return Ok(());
    }

    print_view(&mut out, &manager.view())
}

/// List the guides on offer.
///
/// # Errors
///
/// Returns `AppError` if stdout cannot be written.
pub fn catalog(catalog: &Catalog, config: &StorefrontConfig) -> Result<(), AppError> {
    let mut out = io::stdout().lock();
    for guide in catalog.iter() {
        writeln!(
            out,
            "{:<24} {:<40} {}",
            guide.id,
            guide.name,
            guide.price.display(config.cart.currency)
        )?;
    }
    Ok(())
}

/// Add the catalog guide `id` to the cart.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown guide and `AppError::Cart` if
/// the cart could not be saved.
pub fn add(
    manager: &mut CartManager<FileStore>,
    catalog: &Catalog,
    id: &str,
) -> Result<(), AppError> {
    let id = GuideId::parse(id).map_err(|e| AppError::NotFound(e.to_string()))?;
    let guide = catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("guide {id}")))?;

    if manager.add_guide(guide)? == AddOutcome::Added {
        info!(guide_id = %id, "Guide added");
    }
    print_view(&mut io::stdout().lock(), &manager.view())
}

/// Remove guide `id` from the cart.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the guide is not in the cart and
/// `AppError::Cart` if the cart could not be saved.
pub fn remove(manager: &mut CartManager<FileStore>, id: &str) -> Result<(), AppError> {
    let id = GuideId::parse(id).map_err(|e| AppError::NotFound(e.to_string()))?;
    if !manager.remove(&id)? {
        return Err(AppError::NotFound(format!("guide {id} in cart")));
    }
    print_view(&mut io::stdout().lock(), &manager.view())
}

/// Empty the cart after confirmation.
///
/// # Errors
///
/// Returns `AppError::Cart` if the cart could not be saved.
pub fn clear(manager: &mut CartManager<FileStore>) -> Result<(), AppError> {
    match manager.clear()? {
        ClearOutcome::Cleared => info!("Cart cleared"),
        ClearOutcome::Declined => info!("Clear declined"),
    }
    Ok(())
}

/// Run the simulated checkout.
///
/// # Errors
///
/// Returns `AppError::Cart` if the emptied cart could not be saved.
pub fn checkout(manager: &mut CartManager<FileStore>) -> Result<(), AppError> {
    match manager.checkout()? {
        CheckoutOutcome::Placed(receipt) => {
            let total = receipt.total.display(manager.settings().currency);
            info!(order_id = %receipt.order_id, total = %total, "Order placed");
            writeln!(io::stdout().lock(), "Pedido {} ({total})", receipt.order_id)?;
        }
        CheckoutOutcome::Declined => info!("Checkout declined"),
        CheckoutOutcome::EmptyCart => info!("Checkout attempted with empty cart"),
    }
    Ok(())
}

/// Print the badge and panel markup.
///
/// # Errors
///
/// Returns `AppError` if stdout cannot be written.
pub fn render(manager: &mut CartManager<FileStore>, open_panel: bool) -> Result<(), AppError> {
    let renderer = HtmlRenderer::new();
    let handle = renderer.handle();
    manager.subscribe(renderer);
    manager.render();
    if open_panel {
        manager.open_panel();
    }

    let rendered = handle.snapshot();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", rendered.badge)?;
    writeln!(out, "{}", rendered.panel)?;
    Ok(())
}

/// The slot text as stored, before any cleanup done on load.
fn stored_slot<S: KeyValueStore>(manager: &CartManager<S>) -> Result<Option<String>, AppError> {
    let slot = manager.slot();
    slot.store()
        .get_item(slot.key())
        .map_err(|e| AppError::Cart(e.into()))
}

fn print_view(out: &mut impl Write, view: &PanelView) -> Result<(), AppError> {
    if view.cart.is_empty() {
        writeln!(out, "{}", messages::EMPTY_CART)?;
        return Ok(());
    }
    for item in &view.cart.items {
        writeln!(out, "{:<24} {:<40} {} x {}", item.id, item.name, item.quantity, item.price)?;
    }
    writeln!(out, "Total: {}", view.cart.total)?;
    Ok(())
}
