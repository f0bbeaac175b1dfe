//! Todo Card Component
//!
//! One item in the list grid.

use leptos::prelude::*;

use crate::models::Item;
use crate::route::Route;

#[component]
pub fn TodoCard(
    item: Item,
    #[prop(into)] on_edit: Callback<Item>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let id = item.id;
    let completed = item.completed;
    let title = item.title.clone();
    let state = if completed { "completed" } else { "not completed" };

    view! {
        <div class="todo-item-card">
            <div class="todo-item-card-content">
                <input
                    type="checkbox"
                    checked=completed
                    disabled=true
                    aria-label=format!("Todo {} is {}", title, state)
                />
                <span class=if completed { "todo-item-title completed-text" } else { "todo-item-title" }>
                    {title.clone()}
                </span>
            </div>
            <div class="todo-card-footer">
                <button
                    type="button"
                    class="action-button edit-button"
                    aria-label=format!("Edit todo: {}", title)
                    on:click=move |_| on_edit.run(item.clone())
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    class="action-button delete-button"
                    aria-label=format!("Delete todo: {}", title)
                    on:click=move |_| on_delete.run(id)
                >
                    "Delete"
                </button>
                <a
                    href=Route::Detail(id).to_hash()
                    class="action-button view-button"
                    aria-label=format!("View details for todo: {}", title)
                >
                    "View"
                </a>
            </div>
        </div>
    }
}
