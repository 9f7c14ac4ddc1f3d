//! Markup produced by the HTML renderer.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use saber_simples_core::{GuideId, Price};
use saber_simples_integration_tests::manager;
use saber_simples_storefront::catalog::Catalog;
use saber_simples_storefront::config::CartSettings;
use saber_simples_storefront::storage::MemoryStore;
use saber_simples_storefront::views::HtmlRenderer;

fn id(value: &str) -> GuideId {
    GuideId::parse(value).unwrap()
}

#[test]
fn test_renderer_follows_every_change() {
    let (mut cart, _) = manager(MemoryStore::new(), &[true], CartSettings::default());
    let renderer = HtmlRenderer::new();
    let output = renderer.handle();
    cart.subscribe(renderer);

    cart.render();
    let empty = output.snapshot();
    assert!(empty.panel.contains("empty-cart-message"));
    assert!(empty.badge.contains(">0<"));
    assert!(!empty.scroll_locked);

    cart.add(id("g1"), "Guide One", Price::from_cents(100)).unwrap();
    let added = output.snapshot();
    assert!(added.panel.contains("<h4>Guide One</h4>"));
    assert!(added.panel.contains("R$ 1,00"));
    assert!(added.badge.contains("cart-counter active\">1<"));
    assert!(added.scroll_locked);
    assert_eq!(added.pulse, Some(Duration::from_millis(500)));

    cart.checkout().unwrap();
    let done = output.snapshot();
    assert!(done.panel.contains("empty-cart-message"));
    assert!(done.badge.contains(">0<"));
    assert!(!done.scroll_locked);
}

#[test]
fn test_catalog_guides_render() {
    let catalog = Catalog::from_json_str(include_str!(
        "../../storefront/content/guides.json"
    ))
    .unwrap();
    let (mut cart, _) = manager(MemoryStore::new(), &[], CartSettings::default());
    let renderer = HtmlRenderer::new();
    let output = renderer.handle();
    cart.subscribe(renderer);

    for guide in catalog.iter() {
        cart.add_guide(guide).unwrap();
    }

    let rendered = output.snapshot();
    for guide in catalog.iter() {
        assert!(rendered.panel.contains(&format!("data-id=\"{}\"", guide.id)));
    }
    assert_eq!(cart.cart().len(), catalog.len());
}
