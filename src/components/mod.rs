//! UI Components
//!
//! Reusable Leptos components.

mod modal;
mod add_todo_modal;
mod edit_todo_modal;
mod delete_confirm_modal;
mod status_filter;
mod header_bar;
mod todo_card;
mod pagination;
mod todo_list;
mod todo_details;
mod not_found;
mod notice_stack;

pub use modal::Modal;
pub use add_todo_modal::AddTodoModal;
pub use edit_todo_modal::EditTodoModal;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use status_filter::StatusFilterMenu;
pub use header_bar::HeaderBar;
pub use todo_card::TodoCard;
pub use pagination::Pagination;
pub use todo_list::TodoList;
pub use todo_details::TodoDetails;
pub use not_found::NotFound;
pub use notice_stack::NoticeStack;

/// Appended to success notices; the mock API accepts writes but keeps nothing
pub(crate) const NOT_PERSISTED_NOTE: &str = "(Note: the mock API simulates this; data is not persistent)";
