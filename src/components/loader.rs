//! Loader Component
//!
//! Centered spinner shown while a page or the catalog is not ready yet.

use leptos::prelude::*;

/// Full-area loading spinner
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader-wrapper">
            <div class="loader-spinner" aria-label="Cargando"></div>
        </div>
    }
}
