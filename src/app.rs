//! Todo Board App
//!
//! Root component: owns the store and context, loads the list once, and
//! switches pages on hash changes.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{NoticeStack, NotFound, TodoDetails, TodoList};
use crate::config::AppConfig;
use crate::context::{AppContext, NoticeKind, Theme};
use crate::route::{Page, Route};
use crate::store::{store_apply, store_set_load_state, AppState, LoadState};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let store = Store::new(AppState::default());
    let route = signal(Route::current());
    let theme = signal(Theme::default());
    let ctx = AppContext::new(config, route, theme);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Back/forward and link clicks only change the hash
    let _hash_listener = window_event_listener(leptos::ev::hashchange, move |_| ctx.sync_route());

    Effect::new(move |_| {
        let theme = ctx.theme.get();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
    });

    // Load items once per app mount, so local changes survive visiting a detail page
    Effect::new(move |_| {
        let api = ctx.api();
        log::info!("[APP] Loading items");
        spawn_local(async move {
            match actions::load(&api).await {
                Ok(mutation) => {
                    store_apply(&store, mutation);
                    store_set_load_state(&store, LoadState::Ready);
                }
                Err(e) => {
                    log::error!("[APP] list failed: {}", e);
                    ctx.notify(NoticeKind::Error, "API Error", e.to_string());
                    store_set_load_state(&store, LoadState::Failed(e.to_string()));
                }
            }
        });
    });

    let page = Memo::new(move |_| ctx.route.get().page());
    let detail_id = Memo::new(move |_| ctx.route.get().item_id());

    view! {
        <div class=move || format!("app-shell {}", ctx.theme.get().as_str())>
            {move || match page.get() {
                Page::List => view! { <TodoList /> }.into_any(),
                Page::Detail => view! { <TodoDetails id=detail_id /> }.into_any(),
                Page::NotFound => view! { <NotFound /> }.into_any(),
            }}
            <NoticeStack />
            <footer class="app-footer">
                <p>"Todo Board · data from a mock API, changes are not saved"</p>
            </footer>
        </div>
    }
}
