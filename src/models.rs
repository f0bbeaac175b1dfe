//! Frontend Models
//!
//! Data structures matching the remote todo resource.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length of a user-entered title (after trimming)
pub const MIN_TITLE_LEN: usize = 3;

/// Item data structure (matches the remote JSON shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    #[serde(rename = "userId")]
    pub owner_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Item {
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}

/// Status filter applied before the search term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl StatusFilter {
    pub const ALL: [StatusFilter; 3] = [StatusFilter::All, StatusFilter::Completed, StatusFilter::Incomplete];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Incomplete => "incomplete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Completed => "Completed",
            StatusFilter::Incomplete => "Incomplete",
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Completed => item.completed,
            StatusFilter::Incomplete => !item.completed,
        }
    }
}

/// Rejected title input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("Please enter a todo title")]
    Empty,
    #[error("Title must be at least 3 characters long")]
    TooShort,
}

/// Trim and check a user-entered title
pub fn validate_title(raw: &str) -> Result<String, TitleError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(TitleError::Empty);
    }
    if title.chars().count() < MIN_TITLE_LEN {
        return Err(TitleError::TooShort);
    }
    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, completed: bool) -> Item {
        Item { id, owner_id: 1, title: format!("Item {}", id), completed }
    }

    #[test]
    fn test_item_json_uses_user_id() {
        let item: Item = serde_json::from_str(r#"{"userId":3,"id":7,"title":"x","completed":true}"#).unwrap();
        assert_eq!(item.owner_id, 3);
        assert_eq!(item.id, 7);

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["userId"], 3);
        assert!(json.get("owner_id").is_none());
    }

    #[test]
    fn test_status_filter_matches() {
        let done = make_item(1, true);
        let open = make_item(2, false);
        assert!(StatusFilter::All.matches(&done) && StatusFilter::All.matches(&open));
        assert!(StatusFilter::Completed.matches(&done));
        assert!(!StatusFilter::Completed.matches(&open));
        assert!(StatusFilter::Incomplete.matches(&open));
        assert!(!StatusFilter::Incomplete.matches(&done));
    }

    #[test]
    fn test_status_filter_keys() {
        let keys: Vec<_> = StatusFilter::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(keys, vec!["all", "completed", "incomplete"]);
        assert_eq!(StatusFilter::default(), StatusFilter::All);
    }

    #[test]
    fn test_validate_title() {
        assert_eq!(validate_title(""), Err(TitleError::Empty));
        assert_eq!(validate_title("   "), Err(TitleError::Empty));
        assert_eq!(validate_title(" ab "), Err(TitleError::TooShort));
        assert_eq!(validate_title(" abc "), Ok("abc".to_string()));
        assert_eq!(TitleError::TooShort.to_string(), "Title must be at least 3 characters long");
    }
}
