//! User Actions
//!
//! Validate input, call the remote store, and describe the resulting
//! collection change. Nothing is mutated here; callers apply the returned
//! `Mutation` only on success.

use thiserror::Error;

use crate::api::{ItemStore, StoreError};
use crate::collection::Mutation;
use crate::models::{validate_title, Item, TitleError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] TitleError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ActionResult = Result<Mutation, ActionError>;

pub async fn load<S: ItemStore + ?Sized>(store: &S) -> ActionResult {
    let items = store.list().await?;
    Ok(Mutation::ReplaceAll(items))
}

pub async fn add<S: ItemStore + ?Sized>(store: &S, raw_title: &str) -> ActionResult {
    let title = validate_title(raw_title)?;
    let created = store.create(&title).await?;
    Ok(Mutation::Prepend(Item { title, ..created }))
}

pub async fn edit<S: ItemStore + ?Sized>(store: &S, original: &Item, raw_title: &str, completed: bool) -> ActionResult {
    let title = validate_title(raw_title)?;
    store.update(original.id, &title, completed).await?;
    let updated = Item { title, completed, ..original.clone() };
    Ok(Mutation::ReplaceOne(original.id, updated))
}

pub async fn remove<S: ItemStore + ?Sized>(store: &S, id: u32) -> ActionResult {
    store.delete(id).await?;
    Ok(Mutation::RemoveOne(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::StoreResult;
    use crate::collection::ItemCollection;
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// In-memory store that records calls and can be told to fail
    #[derive(Default)]
    struct FakeStore {
        items: Vec<Item>,
        fail_with: Option<StoreError>,
        calls: RefCell<Vec<String>>,
    }

    impl FakeStore {
        fn failing(err: StoreError) -> Self {
            Self { fail_with: Some(err), ..Default::default() }
        }

        fn check(&self, call: String) -> StoreResult<()> {
            self.calls.borrow_mut().push(call);
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ItemStore for FakeStore {
        async fn list(&self) -> StoreResult<Vec<Item>> {
            self.check("list".into())?;
            Ok(self.items.clone())
        }

        async fn get(&self, id: u32) -> StoreResult<Item> {
            self.check(format!("get {}", id))?;
            self.items.iter().find(|item| item.id == id).cloned().ok_or(StoreError::NotFound)
        }

        async fn create(&self, title: &str) -> StoreResult<Item> {
            self.check(format!("create {}", title))?;
            Ok(Item { id: 201, owner_id: 1, title: title.to_string(), completed: false })
        }

        async fn update(&self, id: u32, title: &str, completed: bool) -> StoreResult<()> {
            self.check(format!("update {} {} {}", id, title, completed))
        }

        async fn delete(&self, id: u32) -> StoreResult<()> {
            self.check(format!("delete {}", id))
        }
    }

    fn find(collection: &ItemCollection, id: u32) -> Option<&Item> {
        collection.as_slice().iter().find(|item| item.id == id)
    }

    fn make_item(id: u32, title: &str, completed: bool) -> Item {
        Item { id, owner_id: 7, title: title.to_string(), completed }
    }

    #[tokio::test]
    async fn test_load_then_add_edit_remove() {
        let store = FakeStore { items: vec![make_item(1, "abc", false), make_item(2, "xyz", true)], ..Default::default() };
        let mut collection = ItemCollection::default();

        collection.apply(load(&store).await.unwrap());
        assert_eq!(collection.as_slice().len(), 2);

        collection.apply(add(&store, "  buy milk ").await.unwrap());
        let first = &collection.as_slice()[0];
        assert_eq!(first.id, 201);
        assert_eq!(first.title, "buy milk");

        let original = find(&collection, 1).unwrap().clone();
        collection.apply(edit(&store, &original, "abcd", true).await.unwrap());
        let edited = find(&collection, 1).unwrap();
        assert_eq!(edited.title, "abcd");
        assert!(edited.completed);
        assert_eq!(edited.owner_id, 7);

        collection.apply(remove(&store, 2).await.unwrap());
        assert!(find(&collection, 2).is_none());

        assert_eq!(
            *store.calls.borrow(),
            vec!["list", "create buy milk", "update 1 abcd true", "delete 2"]
        );
    }

    #[tokio::test]
    async fn test_invalid_title_never_reaches_store() {
        let store = FakeStore::default();
        assert_eq!(add(&store, "ab").await, Err(ActionError::Validation(TitleError::TooShort)));
        assert_eq!(
            edit(&store, &make_item(1, "abc", false), " ", true).await,
            Err(ActionError::Validation(TitleError::Empty))
        );
        assert!(store.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failures_produce_no_mutation() {
        let store = FakeStore::failing(StoreError::Network);
        assert_eq!(add(&store, "valid title").await, Err(ActionError::Store(StoreError::Network)));
        assert_eq!(remove(&store, 3).await, Err(ActionError::Store(StoreError::Network)));
        assert_eq!(load(&store).await, Err(ActionError::Store(StoreError::Network)));
    }

    #[test]
    fn test_error_messages_pass_through() {
        assert_eq!(ActionError::from(TitleError::Empty).to_string(), "Please enter a todo title");
        assert_eq!(ActionError::from(StoreError::NotFound).to_string(), "Item not found.");
    }
}
