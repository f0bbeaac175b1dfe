//! Edit Todo Modal
//!
//! Title and completion form for an existing item.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{self, ActionError};
use crate::components::Modal;
use crate::context::{AppContext, NoticeKind};
use crate::models::{validate_title, Item};
use crate::store::{store_apply, use_app_store};

use super::NOT_PERSISTED_NOTE;

#[component]
pub fn EditTodoModal(
    item: Item,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (title, set_title) = signal(item.title.clone());
    let (completed, set_completed) = signal(item.completed);
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);
    let original = StoredValue::new(item);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() { return; }
        let raw = title.get_untracked();
        if let Err(e) = validate_title(&raw) {
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        set_submitting.set(true);

        let api = ctx.api();
        let original = original.get_value();
        let done = completed.get_untracked();
        spawn_local(async move {
            match actions::edit(&api, &original, &raw, done).await {
                Ok(mutation) => {
                    store_apply(&store, mutation);
                    ctx.notify(
                        NoticeKind::Success,
                        "Todo Updated Successfully!",
                        format!("\"{}\" has been updated. {}", raw.trim(), NOT_PERSISTED_NOTE),
                    );
                    on_close.run(());
                }
                Err(ActionError::Validation(e)) => {
                    set_submitting.set(false);
                    set_error.set(Some(e.to_string()));
                }
                Err(ActionError::Store(e)) => {
                    log::error!("[APP] update of {} failed: {}", original.id, e);
                    set_submitting.set(false);
                    ctx.notify(NoticeKind::Error, "Update Todo Failed", e.to_string());
                }
            }
        });
    };

    view! {
        <Modal title="Edit Todo" on_close=on_close>
            <form class="todo-form" aria-label="Edit Todo Form" on:submit=on_submit>
                <label for="edit-title">"Title"</label>
                <input
                    id="edit-title"
                    type="text"
                    placeholder="Edit todo title"
                    aria-label="Edit todo title"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! { <p class="field-error">{message}</p> })}
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        aria-label="Mark as completed"
                        prop:checked=move || completed.get()
                        on:change=move |ev| set_completed.set(event_target_checked(&ev))
                    />
                    "Completed"
                </label>
                <button type="submit" class="primary-button block" disabled=move || submitting.get()>
                    "Update Todo"
                </button>
            </form>
        </Modal>
    }
}
