//! Remote Store Adapter
//!
//! HTTP bindings to the todo resource. Every call either yields the decoded
//! body or a `StoreError`; nothing is retried.

mod error;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;

use crate::config::ApiConfig;
use crate::models::Item;

pub use error::{Lookup, StoreError, StoreResult};

/// Item operations against a remote store
///
/// Futures are `?Send` because the browser client is single-threaded.
#[async_trait(?Send)]
pub trait ItemStore {
    /// Fetch the whole collection
    async fn list(&self) -> StoreResult<Vec<Item>>;

    /// Fetch one item by id
    async fn get(&self, id: u32) -> StoreResult<Item>;

    /// Create an item; the returned id is advisory
    async fn create(&self, title: &str) -> StoreResult<Item>;

    /// Replace title and completion flag of an item
    async fn update(&self, id: u32, title: &str, completed: bool) -> StoreResult<()>;

    /// Delete an item
    async fn delete(&self, id: u32) -> StoreResult<()>;
}

// ========================
// Request Bodies
// ========================

#[derive(Serialize)]
struct CreateItemBody<'a> {
    title: &'a str,
    completed: bool,
    #[serde(rename = "userId")]
    user_id: u32,
}

#[derive(Serialize)]
struct UpdateItemBody<'a> {
    id: u32,
    title: &'a str,
    completed: bool,
}

// ========================
// HTTP Store
// ========================

/// JSON-over-HTTP item store
#[derive(Clone)]
pub struct TodoApi {
    client: Client,
    base_url: String,
    default_owner_id: u32,
}

impl TodoApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            default_owner_id: config.default_owner_id,
        }
    }

    fn item_url(&self, id: u32) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

/// Send a request and turn any non-2xx status into an error
async fn send(request: RequestBuilder, lookup: Lookup) -> StoreResult<Response> {
    let response = request.send().await.map_err(|e| {
        log::warn!("[API] transport failure: {}", e);
        StoreError::from(e)
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    log::warn!("[API] {} {}", status.as_u16(), response.url());
    Err(StoreError::from_status(status.as_u16(), status.canonical_reason().unwrap_or_default(), lookup))
}

#[async_trait(?Send)]
impl ItemStore for TodoApi {
    async fn list(&self) -> StoreResult<Vec<Item>> {
        log::debug!("[API] GET {}", self.base_url);
        let response = send(self.client.get(&self.base_url), Lookup::Other).await?;
        let items: Vec<Item> = response.json().await?;
        log::info!("[API] Loaded {} items", items.len());
        Ok(items)
    }

    async fn get(&self, id: u32) -> StoreResult<Item> {
        let url = self.item_url(id);
        log::debug!("[API] GET {}", url);
        let response = send(self.client.get(&url), Lookup::ById).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, title: &str) -> StoreResult<Item> {
        log::debug!("[API] POST {}", self.base_url);
        let body = CreateItemBody { title, completed: false, user_id: self.default_owner_id };
        let response = send(self.client.post(&self.base_url).json(&body), Lookup::Other).await?;
        Ok(response.json().await?)
    }

    async fn update(&self, id: u32, title: &str, completed: bool) -> StoreResult<()> {
        let url = self.item_url(id);
        log::debug!("[API] PUT {}", url);
        let body = UpdateItemBody { id, title, completed };
        send(self.client.put(&url).json(&body), Lookup::Other).await?;
        Ok(())
    }

    async fn delete(&self, id: u32) -> StoreResult<()> {
        let url = self.item_url(id);
        log::debug!("[API] DELETE {}", url);
        send(self.client.delete(&url), Lookup::Other).await?;
        Ok(())
    }
}
