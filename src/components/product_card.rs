//! Product Card Grid Component
//!
//! Paginated catalog grid. Pages are cut client-side from the injected
//! product list; changing page never goes back to the data source.

use leptos::prelude::*;
use leptos_paginate::create_pager;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::components::Pagination;
use crate::models::Product;
use crate::store::{store_add_to_cart, use_shop_store};

/// Products shown per page
const PRODUCTS_PER_PAGE: usize = 4;

/// Characters escaped when an image path is embedded in a URL
const IMAGE_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?');

/// Resolve a catalog image path to the asset URL the grid renders
fn image_url(image_path: &str) -> String {
    format!("/products/{}", utf8_percent_encode(image_path, IMAGE_ENCODE_SET))
}

/// Format a price for display
fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

/// Paginated product card grid
///
/// The product list is an injected read-only dependency; this component
/// never reorders or mutates it, only windows into it.
#[component]
pub fn ProductCard(products: Signal<Vec<Product>>) -> impl IntoView {
    let store = use_shop_store();
    let pager = create_pager(Signal::derive(move || products.get().len()), PRODUCTS_PER_PAGE);

    // Products on the current page
    let current_products = move || {
        let items = products.get();
        pager.window(&items).to_vec()
    };

    view! {
        <div class="catalog">
            <div class="product-grid">
                <For
                    each=current_products
                    key=|product| product.id
                    children=move |product| {
                        let add_product = product.clone();
                        let add_to_cart = move |_| {
                            store_add_to_cart(&store, &add_product);
                        };
                        view! {
                            <div class="product-card">
                                <img
                                    class="product-image"
                                    src=image_url(&product.image_path)
                                    alt=product.name.clone()
                                />
                                <h5 class="product-name">{product.name.clone()}</h5>
                                <div class="product-details">{product.details.clone()}</div>
                                <span class="product-price">{format_price(product.price)}</span>
                                <button class="add-to-cart-btn" on:click=add_to_cart>
                                    "Agregar al carrito"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            {move || if products.get().is_empty() {
                view! { <div class="no-products-message">"No hay productos para mostrar"</div> }.into_any()
            } else {
                view! { <div></div> }.into_any()
            }}

            <Pagination pager=pager />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_two_decimals() {
        assert_eq!(format_price(54999.0), "$54999.00");
        assert_eq!(format_price(28500.5), "$28500.50");
        assert_eq!(format_price(79999.99), "$79999.99");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_image_url_plain_path() {
        assert_eq!(image_url("termo-acero.webp"), "/products/termo-acero.webp");
    }

    #[test]
    fn test_image_url_escapes_reserved_characters() {
        assert_eq!(
            image_url("mate imperial.webp"),
            "/products/mate%20imperial.webp"
        );
        assert_eq!(image_url("promo#1.webp"), "/products/promo%231.webp");
    }
}
