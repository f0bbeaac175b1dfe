//! Hash Routes
//!
//! `#/` is the list, `#/todos/{id}` a detail page. Anything else is a 404.

use crate::detail::parse_item_id;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Detail(u32),
    NotFound,
}

/// Which page a route renders, ignoring its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    List,
    Detail,
    NotFound,
}

impl Route {
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/').trim_end_matches('/');
        let mut segments = path.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(""), None, None) => Route::List,
            (Some("todos"), Some(id), None) => parse_item_id(id).map_or(Route::NotFound, Route::Detail),
            _ => Route::NotFound,
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::List => Page::List,
            Route::Detail(_) => Page::Detail,
            Route::NotFound => Page::NotFound,
        }
    }

    pub fn item_id(&self) -> Option<u32> {
        match self {
            Route::Detail(id) => Some(*id),
            _ => None,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::List => "#/".to_string(),
            Route::Detail(id) => format!("#/todos/{}", id),
            Route::NotFound => "#/not-found".to_string(),
        }
    }

    /// Route for the current `window.location`
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::parse(&hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        assert_eq!(Route::parse(""), Route::List);
        assert_eq!(Route::parse("#"), Route::List);
        assert_eq!(Route::parse("#/"), Route::List);
    }

    #[test]
    fn test_parse_detail() {
        assert_eq!(Route::parse("#/todos/12"), Route::Detail(12));
        assert_eq!(Route::parse("#/todos/12/"), Route::Detail(12));
        assert_eq!(Route::parse("#/todos/abc"), Route::NotFound);
        assert_eq!(Route::parse("#/todos"), Route::NotFound);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(Route::parse("#/settings"), Route::NotFound);
        assert_eq!(Route::parse("#/todos/1/edit"), Route::NotFound);
    }

    #[test]
    fn test_detail_routes_share_a_page() {
        assert_eq!(Route::Detail(1).page(), Route::Detail(2).page());
        assert_eq!(Route::Detail(2).item_id(), Some(2));
        assert_eq!(Route::List.item_id(), None);
    }

    #[test]
    fn test_hash_round_trip() {
        for route in [Route::List, Route::Detail(7)] {
            assert_eq!(Route::parse(&route.to_hash()), route);
        }
    }
}
