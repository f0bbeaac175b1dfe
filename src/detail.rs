//! Detail Lookup State
//!
//! One item fetched by id, kept apart from the collection. Each fetch is
//! stamped with a generation; only the newest generation may land.

use crate::api::{StoreError, StoreResult};
use crate::models::Item;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Failed(StoreError),
    Loaded(Item),
}

/// Monotonic request counter for detail fetches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    /// Start a new request and return its token
    pub fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether a response tagged `token` is still the newest
    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

/// State a finished fetch tagged `token` lands as, or `None` when a newer
/// fetch has started since
pub fn settle(generation: &RequestGeneration, token: u64, result: StoreResult<Item>) -> Option<DetailState> {
    if !generation.is_current(token) {
        return None;
    }
    Some(match result {
        Ok(item) => DetailState::Loaded(item),
        Err(e) => DetailState::Failed(e),
    })
}

/// Parse the `{id}` route segment; anything but a plain integer is rejected
pub fn parse_item_id(segment: &str) -> Option<u32> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
