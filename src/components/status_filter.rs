//! Status Filter Menu
//!
//! Dropdown of status filter options.

use leptos::prelude::*;

use crate::models::StatusFilter;

#[component]
pub fn StatusFilterMenu(
    #[prop(into)] current: Signal<StatusFilter>,
    #[prop(into)] on_change: Callback<StatusFilter>,
) -> impl IntoView {
    let (open, set_open) = signal(false);

    view! {
        <div class="filter-dropdown">
            <button
                type="button"
                class="filter-dropdown-button"
                aria-label="Filter todos"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "⏷ Filter: " {move || current.get().label()}
            </button>
            <Show when=move || open.get()>
                <ul class="filter-menu" role="menu" aria-label="Filter todos by status">
                    {StatusFilter::ALL.iter().map(|&filter| {
                        let is_selected = move || current.get() == filter;
                        view! {
                            <li
                                role="menuitemradio"
                                data-filter=filter.as_str()
                                aria-checked=move || is_selected().to_string()
                                class=move || if is_selected() { "filter-option active" } else { "filter-option" }
                                on:click=move |_| {
                                    on_change.run(filter);
                                    set_open.set(false);
                                }
                            >
                                {filter.label()}
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </div>
    }
}
