//! Bahía Shop Frontend App
//!
//! Root component: shared shop store, simulated catalog fetch, routing
//! between the catalog and the contact page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{ContactPage, Footer, Loader, Navbar, ProductCard};
use crate::store::{use_shop_store, ShopState, ShopStateStoreFields};

/// Simulated latency for the embedded catalog, so the home page
/// exercises its loading state the way a real fetch would
const CATALOG_DELAY_MS: u32 = 300;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(ShopState::new());

    // Provide the store to all children
    provide_context(store);

    // Load the catalog on mount
    Effect::new(move |_| {
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(CATALOG_DELAY_MS).await;
            let products = catalog::load_catalog();
            web_sys::console::log_1(
                &format!("[APP] Catalog ready, {} products", products.len()).into(),
            );
            store.products().set(products);
            store.catalog_ready().set(true);
        });
    });

    view! {
        <Router>
            <div class="app-layout">
                <Navbar/>
                <main class="main-content">
                    <Routes fallback=|| view! { <p class="not-found">"Página no encontrada"</p> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/contacto") view=ContactPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}

/// Home page: the product catalog behind its loading state
#[component]
fn HomePage() -> impl IntoView {
    let store = use_shop_store();
    let products = Signal::derive(move || store.products().get());

    view! {
        <Show
            when=move || store.catalog_ready().get()
            fallback=|| view! { <div class="loading-screen"><Loader/></div> }
        >
            <h1 class="catalog-title">"Nuestros Productos"</h1>
            <ProductCard products=products/>
        </Show>
    }
}
