//! Navbar Component
//!
//! Top bar with brand, page links and the live cart badge.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::store::{cart_units, use_shop_store, ShopStateStoreFields};

/// Top navigation bar
#[component]
pub fn Navbar() -> impl IntoView {
    let store = use_shop_store();
    let cart_count = move || cart_units(&store.cart().get());

    view! {
        <header class="navbar">
            <div class="navbar-brand">
                <A href="/">"Bahía Shop"</A>
            </div>
            <nav class="navbar-links">
                <A href="/">"Productos"</A>
                <A href="/contacto">"Contacto"</A>
            </nav>
            <div class="cart-badge" title="Carrito">
                <span class="cart-icon">"🛒"</span>
                <span class="cart-count">{cart_count}</span>
            </div>
        </header>
    }
}
