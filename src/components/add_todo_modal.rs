//! Add Todo Modal
//!
//! Title form for creating a new item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, ActionError};
use crate::components::Modal;
use crate::context::{AppContext, NoticeKind};
use crate::models::validate_title;
use crate::store::{store_apply, use_app_store};

use super::NOT_PERSISTED_NOTE;

#[component]
pub fn AddTodoModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() { return; }
        let raw = title.get_untracked();
        // Nothing goes over the wire for a bad title
        if let Err(e) = validate_title(&raw) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let api = ctx.api();
        spawn_local(async move {
            match actions::add(&api, &raw).await {
                Ok(mutation) => {
                    store_apply(&store, mutation);
                    ctx.notify(
                        NoticeKind::Success,
                        "Todo Added Successfully!",
                        format!("\"{}\" has been added. {}", raw.trim(), NOT_PERSISTED_NOTE),
                    );
                    on_close.run(());
                }
                Err(ActionError::Validation(e)) => {
                    set_submitting.set(false);
                    set_error.set(Some(e.to_string()));
                }
                Err(ActionError::Store(e)) => {
                    log::error!("[APP] create failed: {}", e);
                    set_submitting.set(false);
                    ctx.notify(NoticeKind::Error, "Add Todo Failed", e.to_string());
                }
            }
        });
    };

    view! {
        <Modal title="Add New Todo" on_close=on_close>
            <form class="todo-form" aria-label="Add Todo Form" on:submit=on_submit>
                <label for="add-title">"Title"</label>
                <input
                    id="add-title"
                    type="text"
                    placeholder="Enter todo title"
                    aria-label="Todo title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
                <button type="submit" class="primary-button block" disabled=move || submitting.get()>
                    "Add Todo"
                </button>
            </form>
        </Modal>
    }
}
