//! Item Collection
//!
//! Ordered, id-unique list of the items known to the UI. Only successful
//! remote calls produce changes; see `Mutation`.

use std::collections::HashSet;

use crate::models::Item;

/// Lowest id a locally created item can get is one above this, so it never
/// collides with the ids the mock server hands out
pub const SYNTHETIC_ID_FLOOR: u32 = 200;

/// A change to apply after a remote call succeeded
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    ReplaceAll(Vec<Item>),
    Prepend(Item),
    ReplaceOne(u32, Item),
    RemoveOne(u32),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemCollection {
    items: Vec<Item>,
}

impl ItemCollection {
    /// Discard prior state. Later duplicates of an id are dropped.
    pub fn replace_all(&mut self, items: Vec<Item>) {
        let mut seen = HashSet::with_capacity(items.len());
        self.items = items.into_iter().filter(|item| seen.insert(item.id)).collect();
    }

    /// Insert at the front under a freshly synthesized id, which is returned.
    /// `None` when every id above the floor is taken; nothing is inserted.
    pub fn prepend(&mut self, mut item: Item) -> Option<u32> {
        let id = self.next_id()?;
        item.id = id;
        self.items.insert(0, item);
        Some(id)
    }

    /// Replace in place; id and owner are kept from the existing entry.
    /// Returns false when no item has `id`.
    pub fn replace_one(&mut self, id: u32, item: Item) -> bool {
        match self.items.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                existing.title = item.title;
                existing.completed = item.completed;
                true
            }
            None => false,
        }
    }

    pub fn remove_one(&mut self, id: u32) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::ReplaceAll(items) => self.replace_all(items),
            Mutation::Prepend(item) => {
                if self.prepend(item).is_none() {
                    log::warn!("[STATE] no free id left for a new item");
                }
            }
            Mutation::ReplaceOne(id, item) => {
                if !self.replace_one(id, item) {
                    log::warn!("[STATE] replace of unknown item {}", id);
                }
            }
            Mutation::RemoveOne(id) => {
                self.remove_one(id);
            }
        }
    }

    /// `max(existing ids, SYNTHETIC_ID_FLOOR) + 1`. If the maximum is
    /// `u32::MAX`, the lowest unused id above the floor instead.
    pub fn next_id(&self) -> Option<u32> {
        let max = self.items.iter().map(|item| item.id).fold(SYNTHETIC_ID_FLOOR, u32::max);
        if let Some(id) = max.checked_add(1) {
            return Some(id);
        }
        let taken: HashSet<u32> = self.items.iter().map(|item| item.id).collect();
        (SYNTHETIC_ID_FLOOR + 1..=u32::MAX).find(|id| !taken.contains(id))
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }
}
