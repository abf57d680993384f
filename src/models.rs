//! Frontend Models
//!
//! Data structures matching the catalog feed.

use serde::{Deserialize, Serialize};

/// Product data structure (matches the catalog feed)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub details: String,
    pub price: f64,
    pub image_path: String,
}

/// One line in the cart: a product and how many of it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }
}
