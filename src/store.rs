//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection::{ItemCollection, Mutation};

/// Progress of the one list fetch issued on mount
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items known to the UI, in display order
    pub items: ItemCollection,
    /// Initial list load
    pub load_state: LoadState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply a collection change produced by a successful remote call
pub fn store_apply(store: &AppStore, mutation: Mutation) {
    store.items().write().apply(mutation);
}

pub fn store_set_load_state(store: &AppStore, state: LoadState) {
    *store.load_state().write() = state;
}
