//! Product Catalog
//!
//! Seed catalog embedded at build time. Stands in for the backend feed:
//! the whole list is available up front and paging never goes upstream.

use crate::models::Product;

/// Catalog feed embedded into the binary
const CATALOG_JSON: &str = include_str!("../assets/products.json");

/// Parse the embedded catalog.
///
/// A malformed seed degrades to an empty catalog (the grid shows its
/// empty state) instead of taking the whole app down.
pub fn load_catalog() -> Vec<Product> {
    match serde_json::from_str(CATALOG_JSON) {
        Ok(products) => products,
        Err(err) => {
            web_sys::console::error_1(&format!("[CATALOG] Seed parse failed: {}", err).into());
            Vec::new()
        }
    }
}
