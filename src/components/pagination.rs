//! Pagination Controls
//!
//! Previous/Next plus the page-number strip. Out-of-range moves are not
//! possible because the edge buttons are disabled.

use leptos::prelude::*;

use crate::view::{ListView, PageLink};

#[component]
pub fn Pagination(
    list_view: Memo<ListView>,
    #[prop(into)] on_page: Callback<usize>,
) -> impl IntoView {
    let current = move || list_view.with(|v| v.current_page);

    view! {
        <nav class="pagination-controls" aria-label="Pagination Navigation">
            <button
                type="button"
                class="pagination-button"
                aria-label="Go to previous page"
                disabled=move || !list_view.with(|v| v.has_previous())
                on:click=move |_| on_page.run(current() - 1)
            >
                "Previous"
            </button>

            {move || {
                let active = current();
                list_view.with(|v| v.links.clone()).into_iter().map(|link| match link {
                    PageLink::Page(page) => view! {
                        <button
                            type="button"
                            class=if page == active { "pagination-button active" } else { "pagination-button" }
                            aria-label=format!("Go to page {}", page)
                            on:click=move |_| on_page.run(page)
                        >
                            {page}
                        </button>
                    }.into_any(),
                    PageLink::Ellipsis => view! {
                        <span class="current-page-info" aria-hidden="true">"..."</span>
                    }.into_any(),
                }).collect_view()
            }}

            <button
                type="button"
                class="pagination-button"
                aria-label="Go to next page"
                disabled=move || !list_view.with(|v| v.has_next())
                on:click=move |_| on_page.run(current() + 1)
            >
                "Next"
            </button>
        </nav>
    }
}
