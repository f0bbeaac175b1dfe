//! Delete Confirm Modal
//!
//! Asks before deleting; the item leaves the list only after the server
//! accepted the delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::Modal;
use crate::context::{AppContext, NoticeKind};
use crate::store::{store_apply, use_app_store};

use super::NOT_PERSISTED_NOTE;

#[component]
pub fn DeleteConfirmModal(
    id: u32,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (pending, set_pending) = signal(false);

    let on_confirm = move |_| {
        if pending.get_untracked() { return; }
        set_pending.set(true);
        let api = ctx.api();
        spawn_local(async move {
            match actions::remove(&api, id).await {
                Ok(mutation) => {
                    store_apply(&store, mutation);
                    ctx.notify(
                        NoticeKind::Success,
                        "Todo Deleted Successfully!",
                        format!("The todo has been removed. {}", NOT_PERSISTED_NOTE),
                    );
                }
                Err(e) => {
                    log::error!("[APP] delete of {} failed: {}", id, e);
                    ctx.notify(NoticeKind::Error, "Delete Todo Failed", e.to_string());
                }
            }
            on_close.run(());
        });
    };

    view! {
        <Modal title="Confirm Delete" on_close=on_close>
            <p>"Are you sure you want to delete this todo?"</p>
            <div class="modal-actions">
                <button type="button" class="secondary-button" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button type="button" class="danger-button" disabled=move || pending.get() on:click=on_confirm>
                    "Delete"
                </button>
            </div>
        </Modal>
    }
}
