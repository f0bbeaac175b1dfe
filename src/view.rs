//! List View Derivation
//!
//! Filtering, search and pagination over the item collection. Everything
//! here is pure so the list component only maps a `ListView` to markup.

use crate::config::ViewConfig;
use crate::models::{Item, StatusFilter};

/// User-controlled view state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    search: String,
    status: StatusFilter,
    /// 1-based
    page: usize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self { search: String::new(), status: StatusFilter::All, page: 1 }
    }
}

impl ViewQuery {
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status(&self) -> StatusFilter {
        self.status
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Changing the search term sends the user back to page 1
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.search {
            self.search = search;
            self.page = 1;
        }
    }

    /// Changing the status filter sends the user back to page 1
    pub fn set_status(&mut self, status: StatusFilter) {
        if status != self.status {
            self.status = status;
            self.page = 1;
        }
    }

    /// Move to `page` if it lies in `1..=total_pages`. Out-of-range
    /// requests are refused, not clamped.
    pub fn go_to(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages {
            return false;
        }
        self.page = page;
        true
    }
}

/// One entry of the page-number strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Status filter first, then case-insensitive title search
pub fn filter_items<'a>(items: &'a [Item], status: StatusFilter, search: &str) -> Vec<&'a Item> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| status.matches(item))
        .filter(|item| needle.is_empty() || item.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Items on a 1-based page; empty when the page is out of range
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    if page == 0 || page_size == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Page-number strip with a sliding window of `max_buttons` around `current`.
/// First and last pages are always present; an ellipsis marks a gap.
pub fn page_links(current: usize, total: usize, max_buttons: usize) -> Vec<PageLink> {
    if total <= max_buttons {
        return (1..=total).map(PageLink::Page).collect();
    }

    let mut start = current.saturating_sub(max_buttons / 2).max(1);
    let end = (start + max_buttons - 1).min(total);
    if end == total {
        start = (total + 1).saturating_sub(max_buttons).max(1);
    }

    let mut links = Vec::with_capacity(max_buttons + 4);
    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links.extend((start..=end).map(PageLink::Page));
    if end < total {
        if end + 1 < total {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total));
    }
    links
}

/// Everything the list component renders
#[derive(Debug, Clone, PartialEq)]
pub struct ListView {
    pub page_items: Vec<Item>,
    pub filtered_len: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub links: Vec<PageLink>,
}

impl ListView {
    pub fn derive(items: &[Item], query: &ViewQuery, config: &ViewConfig) -> Self {
        let filtered = filter_items(items, query.status(), query.search());
        let total_pages = total_pages(filtered.len(), config.page_size);
        let page_items = page_slice(&filtered, query.page(), config.page_size)
            .iter()
            .map(|item| (*item).clone())
            .collect();

        Self {
            page_items,
            filtered_len: filtered.len(),
            current_page: query.page(),
            total_pages,
            links: page_links(query.page(), total_pages, config.max_page_buttons),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.page_items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.total_pages > 0 && self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageLink::{Ellipsis, Page};

    fn make_item(id: u32, title: &str, completed: bool) -> Item {
        Item { id, owner_id: 1, title: title.to_string(), completed }
    }

    fn numbered(count: u32) -> Vec<Item> {
        (1..=count).map(|id| make_item(id, &format!("Todo {}", id), id % 2 == 0)).collect()
    }

    #[test]
    fn test_completed_then_search() {
        let items = vec![make_item(1, "abc", true), make_item(2, "xyz", false)];
        let filtered = filter_items(&items, StatusFilter::Completed, "a");
        assert_eq!(filtered, vec![&items[0]]);

        let mut query = ViewQuery::default();
        query.set_status(StatusFilter::Completed);
        query.set_search("a");
        let view = ListView::derive(&items, &query, &ViewConfig::default());
        assert_eq!(view.filtered_len, 1);
        assert_eq!(view.page_items, vec![items[0].clone()]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![make_item(1, "Buy MILK", false), make_item(2, "walk dog", false)];
        let filtered = filter_items(&items, StatusFilter::All, "milk");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filter_items(&items, StatusFilter::All, "").len(), 2);
    }

    #[test]
    fn test_incomplete_filter() {
        let items = numbered(6);
        let filtered = filter_items(&items, StatusFilter::Incomplete, "");
        assert!(filtered.iter().all(|item| !item.completed));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_twenty_five_items() {
        let items = numbered(25);
        let config = ViewConfig::default();
        let mut query = ViewQuery::default();

        let view = ListView::derive(&items, &query, &config);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.filtered_len, 25);
        assert_eq!(view.links, vec![Page(1), Page(2), Page(3)]);
        assert_eq!(view.page_items.len(), 10);

        assert!(query.go_to(3, view.total_pages));
        let view = ListView::derive(&items, &query, &config);
        assert_eq!(view.page_items.len(), 5);
        assert_eq!(view.page_items[0].id, 21);
        assert!(!view.has_next());
        assert!(view.has_previous());
    }

    #[test]
    fn test_empty_view() {
        let view = ListView::derive(&[], &ViewQuery::default(), &ViewConfig::default());
        assert_eq!(view.total_pages, 0);
        assert!(view.links.is_empty());
        assert!(view.is_empty());
        assert!(!view.has_next());
        assert!(!view.has_previous());
    }

    #[test]
    fn test_filter_changes_reset_page() {
        let mut query = ViewQuery::default();
        assert!(query.go_to(4, 10));

        query.set_search("milk");
        assert_eq!(query.page(), 1);

        assert!(query.go_to(2, 10));
        query.set_status(StatusFilter::Completed);
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_unchanged_filter_keeps_page() {
        let mut query = ViewQuery::default();
        query.set_search("a");
        assert!(query.go_to(3, 5));
        query.set_search("a");
        query.set_status(StatusFilter::All);
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn test_go_to_refuses_out_of_range() {
        let mut query = ViewQuery::default();
        assert!(!query.go_to(0, 3));
        assert!(!query.go_to(4, 3));
        assert!(!query.go_to(1, 0));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items = numbered(12);
        assert_eq!(page_slice(&items, 2, 10).len(), 2);
        assert!(page_slice(&items, 3, 10).is_empty());
        assert!(page_slice(&items, 0, 10).is_empty());
    }

    #[test]
    fn test_page_links_window() {
        assert_eq!(page_links(1, 10, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(10)]);
        assert_eq!(page_links(5, 10, 5), vec![Page(1), Ellipsis, Page(3), Page(4), Page(5), Page(6), Page(7), Ellipsis, Page(10)]);
        assert_eq!(page_links(10, 10, 5), vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9), Page(10)]);
    }

    #[test]
    fn test_page_links_no_ellipsis_next_to_edge() {
        // Window 2..=6 touches page 1 and sits one short of 7
        assert_eq!(page_links(4, 7, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6), Page(7)]);
        assert_eq!(page_links(3, 6, 5), vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]);
    }

    #[test]
    fn test_list_twice_gives_same_view() {
        let config = ViewConfig::default();
        let mut query = ViewQuery::default();
        query.set_search("1");
        query.set_status(StatusFilter::Incomplete);

        let first = ListView::derive(&numbered(40), &query, &config);
        let second = ListView::derive(&numbered(40), &query, &config);
        assert_eq!(first, second);
    }
}
