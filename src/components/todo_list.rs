//! Todo List Page
//!
//! Header controls, the current page of cards, pagination and the
//! add/edit/delete dialogs.

use leptos::prelude::*;

use crate::components::{AddTodoModal, DeleteConfirmModal, EditTodoModal, HeaderBar, Pagination, TodoCard};
use crate::context::AppContext;
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields, LoadState};
use crate::view::{ListView, ViewQuery};

#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let view_config = ctx.config().view;

    let query = RwSignal::new(ViewQuery::default());
    let list_view = Memo::new(move |_| {
        let query = query.get();
        let items = store.items().read();
        ListView::derive(items.as_slice(), &query, &view_config)
    });

    // Dialog state
    let (adding, set_adding) = signal(false);
    let (editing, set_editing) = signal::<Option<Item>>(None);
    let (deleting, set_deleting) = signal::<Option<u32>>(None);

    let on_page = Callback::new(move |page: usize| {
        let total = list_view.with_untracked(|v| v.total_pages);
        query.update(|q| {
            q.go_to(page, total);
        });
    });
    let on_edit = Callback::new(move |item: Item| set_editing.set(Some(item)));
    let on_delete = Callback::new(move |id: u32| set_deleting.set(Some(id)));

    view! {
        <main class="todo-list-container">
            <div class="todo-list-wrapper">
                {move || match store.load_state().get() {
                    LoadState::Loading => view! {
                        <div class="loading-state-container" role="status" aria-live="polite">
                            <div class="loading-spinner"></div>
                            <p class="loading-text">"Loading todos, please wait..."</p>
                        </div>
                    }.into_any(),
                    LoadState::Failed(message) => view! {
                        <div role="alert" aria-live="assertive">
                            <p class="error-message">"Error: " {message}</p>
                            <p class="error-message">"Please check your network connection or try again later."</p>
                        </div>
                    }.into_any(),
                    LoadState::Ready => view! {
                        <HeaderBar query=query on_add=move |_| set_adding.set(true) />

                        <section class="todo-items-grid" aria-live="polite">
                            <Show
                                when=move || !list_view.with(|v| v.is_empty())
                                fallback=|| view! {
                                    <p class="no-todos-message">"No todos found matching your criteria."</p>
                                }
                            >
                                <For
                                    each=move || list_view.with(|v| v.page_items.clone())
                                    key=|item| (item.id, item.title.clone(), item.completed)
                                    children=move |item| view! {
                                        <TodoCard item=item on_edit=on_edit on_delete=on_delete />
                                    }
                                />
                            </Show>
                        </section>

                        <Pagination list_view=list_view on_page=on_page />
                        <p class="item-count">
                            {move || format!("{} todos match", list_view.with(|v| v.filtered_len))}
                        </p>
                    }.into_any(),
                }}
            </div>

            {move || adding.get().then(|| view! {
                <AddTodoModal on_close=move |_| set_adding.set(false) />
            })}
            {move || editing.get().map(|item| view! {
                <EditTodoModal item=item on_close=move |_| set_editing.set(None) />
            })}
            {move || deleting.get().map(|id| view! {
                <DeleteConfirmModal id=id on_close=move |_| set_deleting.set(None) />
            })}
        </main>
    }
}
