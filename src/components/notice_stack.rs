//! Notice Stack
//!
//! Toasts raised through `AppContext::notify`. Click to dismiss early.

use leptos::prelude::*;

use crate::context::{AppContext, NoticeKind};

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="notice-stack">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let (class, role) = match notice.kind {
                        NoticeKind::Success => ("notice success", "status"),
                        NoticeKind::Error => ("notice error", "alert"),
                    };
                    view! {
                        <div class=class role=role on:click=move |_| ctx.dismiss(id)>
                            <strong>{notice.title}</strong>
                            <p>{notice.message}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
