//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::TodoApi;
use crate::config::AppConfig;
use crate::route::Route;

/// How long a toast stays up
const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient toast message
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
    /// Light/dark - read
    pub theme: ReadSignal<Theme>,
    /// Light/dark - write
    set_theme: WriteSignal<Theme>,
    /// Visible toasts, oldest first
    pub notices: RwSignal<Vec<Notice>>,
    next_notice_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        config: AppConfig,
        route: (ReadSignal<Route>, WriteSignal<Route>),
        theme: (ReadSignal<Theme>, WriteSignal<Theme>),
    ) -> Self {
        Self {
            config: StoredValue::new(config),
            route: route.0,
            set_route: route.1,
            theme: theme.0,
            set_theme: theme.1,
            notices: RwSignal::new(Vec::new()),
            next_notice_id: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Remote store client for the configured base URL
    pub fn api(&self) -> TodoApi {
        self.config.with_value(|config| TodoApi::new(&config.api))
    }

    /// Sync the route signal after a `hashchange`
    pub fn sync_route(&self) {
        let route = Route::current();
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }

    pub fn toggle_theme(&self) {
        self.set_theme.update(|theme| *theme = theme.toggled());
    }

    /// Show a toast that hides itself after a few seconds
    pub fn notify(&self, kind: NoticeKind, title: impl Into<String>, message: impl Into<String>) {
        let id = self.next_notice_id.get_value();
        self.next_notice_id.set_value(id.wrapping_add(1));
        self.notices.update(|notices| {
            notices.push(Notice { id, kind, title: title.into(), message: message.into() })
        });

        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            ctx.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        // The stack may already be gone if the app unmounted
        let _ = self.notices.try_update(|notices| notices.retain(|notice| notice.id != id));
    }
}
