//! Todo Sync
//!
//! Keeps an in-memory todo collection consistent with a remote
//! list-of-records endpoint. UI-free: hosts plug in their own
//! [`TodoStore`] (a reactive signal, a `RefCell`, ...).

pub mod api;
pub mod config;
pub mod controller;
pub mod edit;
pub mod error;
pub mod models;
pub mod state;
pub mod store;


pub use api::{RestClient, TodoApi};
pub use config::{ApiConfig, ERROR_HIDE_DELAY};
pub use controller::TodoController;
pub use edit::{resolve_edit, toggled, EditOutcome};
pub use error::{TodoError, TodoResult};
pub use models::{Filter, NewTodo, Todo, TodoPatch};
pub use state::{ErrorBanner, TodoState};
pub use store::TodoStore;
