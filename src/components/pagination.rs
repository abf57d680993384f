//! Pagination Control Component
//!
//! Page navigation under the product grid: previous/next plus one button
//! per page. Feeds page-change events to the pager, which clamps them.

use leptos::prelude::*;
use leptos_paginate::PagerSignals;

/// 1-indexed page numbers the control offers, in order
fn page_numbers(total: usize) -> Vec<usize> {
    (1..=total).collect()
}

/// Page navigation control
#[component]
pub fn Pagination(pager: PagerSignals) -> impl IntoView {
    // Nothing to page over, nothing to render
    let has_pages = move || pager.total_pages.get() > 0;
    let pages = move || page_numbers(pager.total_pages.get());
    let at_first = move || pager.current_page.get() <= 1;
    let at_last = move || pager.current_page.get() >= pager.total_pages.get();

    let go_prev = move |_| {
        let current = pager.current_page.get_untracked();
        pager.go_to(current.saturating_sub(1));
    };
    let go_next = move |_| {
        let current = pager.current_page.get_untracked();
        pager.go_to(current + 1);
    };

    view! {
        <Show when=has_pages>
            <nav class="pagination" aria-label="Paginación">
                <button class="page-btn prev" disabled=at_first on:click=go_prev>
                    "‹"
                </button>
                <For
                    each=pages
                    key=|page| *page
                    children=move |page| {
                        let is_current = move || pager.current_page.get() == page;
                        view! {
                            <button
                                class=move || if is_current() { "page-btn active" } else { "page-btn" }
                                on:click=move |_| pager.go_to(page)
                            >
                                {page}
                            </button>
                        }
                    }
                />
                <button class="page-btn next" disabled=at_last on:click=go_next>
                    "›"
                </button>
            </nav>
        </Show>
    }
}
