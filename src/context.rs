//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use todo_sync::{RestClient, TodoController};

use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Authoritative todo state
    pub store: AppStore,
    /// REST client, kept local: its futures only run on the UI thread
    api: StoredValue<RestClient, LocalStorage>,
}

impl AppContext {
    pub fn new(api: RestClient) -> Self {
        Self {
            store: AppStore::new(),
            api: StoredValue::new_local(api),
        }
    }

    /// Controller bound to this context's client and store
    pub fn controller(&self) -> TodoController<RestClient, AppStore> {
        TodoController::new(self.api.get_value(), self.store)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
