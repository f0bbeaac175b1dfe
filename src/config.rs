//! Application Configuration
//!
//! Compile-time defaults, optionally overridden by `<meta>` tags in index.html.

use log::LevelFilter;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/todos";

/// `<meta name="todo-api-base" content="...">`
const META_API_BASE: &str = "todo-api-base";
/// `<meta name="todo-log-level" content="debug">`
const META_LOG_LEVEL: &str = "todo-log-level";

/// Remote store settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Collection URL, without trailing slash
    pub base_url: String,
    /// Owner id sent with newly created items
    pub default_owner_id: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_owner_id: 1,
        }
    }
}

/// List view settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub page_size: usize,
    /// Page buttons shown before the strip collapses into a window
    pub max_page_buttons: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self { page_size: 10, max_page_buttons: 5 }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            view: ViewConfig::default(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Apply raw override values; blank or unparsable values keep the default
    pub fn with_overrides(mut self, base_url: Option<String>, log_level: Option<String>) -> Self {
        if let Some(url) = base_url {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        if let Some(level) = log_level.and_then(|l| l.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        self
    }

    /// Read overrides from the host page
    pub fn from_document() -> Self {
        let meta = |name: &str| -> Option<String> {
            let document = web_sys::window()?.document()?;
            document
                .query_selector(&format!(r#"meta[name="{}"]"#, name))
                .ok()
                .flatten()?
                .get_attribute("content")
        };
        Self::default().with_overrides(meta(META_API_BASE), meta(META_LOG_LEVEL))
    }
}
