//! Not Found Page
//!
//! Fallback for unknown hash routes.

use leptos::prelude::*;

use crate::route::Route;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="todo-list-container not-found-container" role="alert" aria-live="assertive">
            <h1>"404"</h1>
            <p>"Page Not Found"</p>
            <a href=Route::List.to_hash() class="back-button">"Go to Home"</a>
        </main>
    }
}
