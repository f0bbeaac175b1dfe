//! Todo Details Page
//!
//! Fetches one item by id on every id change. Responses from superseded
//! requests are dropped.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ItemStore;
use crate::context::AppContext;
use crate::detail::{settle, DetailState, RequestGeneration};
use crate::route::Route;

#[component]
pub fn TodoDetails(id: Memo<Option<u32>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (state, set_state) = signal(DetailState::Loading);
    let generation = StoredValue::new(RequestGeneration::default());

    Effect::new(move |_| {
        let Some(item_id) = id.get() else { return };
        let mut token = 0;
        generation.update_value(|g| token = g.begin());
        set_state.set(DetailState::Loading);

        let api = ctx.api();
        spawn_local(async move {
            let result = api.get(item_id).await;
            if let Err(e) = &result {
                log::warn!("[DETAIL] lookup of {} failed: {}", item_id, e);
            }
            // Page may have moved on to another id, or unmounted
            match generation.try_with_value(|g| settle(g, token, result)).flatten() {
                Some(next) => set_state.set(next),
                None => log::debug!("[DETAIL] dropping stale response for {}", item_id),
            }
        });
    });

    view! {
        <main class="todo-detail-container">
            <div class="todo-detail-wrapper">
                {move || match state.get() {
                    DetailState::Loading => view! {
                        <p class="loading-message" role="status" aria-live="polite">"Loading todo details..."</p>
                    }.into_any(),
                    DetailState::Failed(err) => view! {
                        <p class="error-message" role="alert" aria-live="assertive">{err.to_string()}</p>
                    }.into_any(),
                    DetailState::Loaded(item) => {
                        let status_class = if item.completed { "status-completed" } else { "status-pending" };
                        let status = item.status_label();
                        view! {
                            <header class="detail-header">
                                <h2>"Todo Details"</h2>
                            </header>
                            <section class="detail-info">
                                <p><strong>"Title: "</strong>{item.title}</p>
                                <p><strong>"ID: "</strong>{item.id}</p>
                                <p><strong>"User ID: "</strong>{item.owner_id}</p>
                                <p>
                                    <strong>"Status: "</strong>
                                    <span class=status_class>{status}</span>
                                </p>
                            </section>
                        }.into_any()
                    }
                }}
                <a href=Route::List.to_hash() class="back-button" aria-label="Back to todo list">
                    "Back to Todo List"
                </a>
            </div>
        </main>
    }
}
