//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use crate::models::{CartLine, Product};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Full product catalog, in feed order
    pub products: Vec<Product>,
    /// Cart lines, one per distinct product
    pub cart: Vec<CartLine>,
    /// False until the catalog load finishes
    pub catalog_ready: bool,
}

impl ShopState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add one unit of a product to a cart: bump the existing line or open one
pub fn add_line(cart: &mut Vec<CartLine>, product: &Product) {
    match cart.iter_mut().find(|line| line.product_id == product.id) {
        Some(line) => line.quantity += 1,
        None => cart.push(CartLine::new(product)),
    }
}

/// Add one unit of a product to the store's cart
pub fn store_add_to_cart(store: &ShopStore, product: &Product) {
    add_line(&mut store.cart().write(), product);
}

/// Total units across all cart lines
pub fn cart_units(cart: &[CartLine]) -> u32 {
    cart.iter().map(|line| line.quantity).sum()
}
