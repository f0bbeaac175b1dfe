//! Header Bar Component
//!
//! Board title, add button, search box, status filter and theme toggle.

use leptos::prelude::*;

use crate::components::StatusFilterMenu;
use crate::context::{AppContext, Theme};
use crate::models::StatusFilter;
use crate::view::ViewQuery;

#[component]
pub fn HeaderBar(
    query: RwSignal<ViewQuery>,
    #[prop(into)] on_add: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let next_theme = move || ctx.theme.get().toggled().as_str();

    view! {
        <header class="todo-list-header">
            <h2>"TODO BOARD"</h2>
            <div class="header-controls-row">
                <button
                    type="button"
                    class="primary-button add-todo-button"
                    aria-label="Add new todo"
                    on:click=move |_| on_add.run(())
                >
                    "+ Add New Todo"
                </button>

                <label for="search-todo" class="visually-hidden">"Search Todos"</label>
                <input
                    id="search-todo"
                    class="search-input"
                    type="search"
                    placeholder="Search"
                    aria-label="Search todos by title"
                    prop:value=move || query.with(|q| q.search().to_string())
                    on:input=move |ev| query.update(|q| q.set_search(event_target_value(&ev)))
                />

                <StatusFilterMenu
                    current=Signal::derive(move || query.with(|q| q.status()))
                    on_change=move |status: StatusFilter| query.update(|q| q.set_status(status))
                />

                <button
                    type="button"
                    class="theme-toggle-button"
                    aria-label=move || format!("Switch to {} mode", next_theme())
                    on:click=move |_| ctx.toggle_theme()
                >
                    {move || if ctx.theme.get() == Theme::Light { "🌙" } else { "☀" }}
                </button>
            </div>
        </header>
    }
}
