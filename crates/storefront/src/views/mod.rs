//! Display data and HTML rendering.
//!
//! Views are plain structs with every amount already formatted, built fresh
//! from the cart each time. Templates live in `crates/storefront/templates/`.

mod cart;
mod renderer;

pub use cart::{CartCountTemplate, CartItemView, CartPanelTemplate, CartView, PanelView};
pub use renderer::{HtmlRenderer, RenderedCart, RenderedHandle};
