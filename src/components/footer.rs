//! Footer Component

use leptos::prelude::*;
use leptos_router::components::A;

/// Page footer with contact info and copyright line
#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer-info">
                <span>"info@bahia-shop.com"</span>
                <span>"Av. Principal 1234, Bahía Blanca, Argentina"</span>
                <A href="/contacto">"Contáctanos"</A>
            </div>
            <div class="footer-copy">
                {format!("© {} Bahía Shop", year)}
            </div>
        </footer>
    }
}
