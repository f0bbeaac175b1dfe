//! Modal Shell
//!
//! Backdrop + dialog frame shared by the add, edit and delete dialogs.

use leptos::prelude::*;

/// Dialog frame. Clicking the backdrop or × calls `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let label = title.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                aria-label=label
                on:click=|ev| ev.stop_propagation()
            >
                <header class="modal-header">
                    <h3>{title}</h3>
                    <button type="button" class="modal-close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </header>
                {children()}
            </div>
        </div>
    }
}
