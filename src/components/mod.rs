//! UI Components
//!
//! Leptos components for the todo list.

mod error_notification;
mod filter_bar;
mod new_todo_form;
mod todo_item;
mod todo_list;
mod toggle_all_button;

pub use error_notification::ErrorNotification;
pub use filter_bar::FilterBar;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use toggle_all_button::ToggleAllButton;
