//! Global Application State Store
//!
//! Reactive handle around the authoritative [`TodoState`].

use leptos::prelude::*;
use todo_sync::{TodoState, TodoStore};

/// Copyable reactive store; the controller writes through [`TodoStore`],
/// views read with [`AppStore::with`].
#[derive(Clone, Copy)]
pub struct AppStore(RwSignal<TodoState>);

impl AppStore {
    pub fn new() -> Self {
        Self(RwSignal::new(TodoState::new()))
    }

    /// Tracked read, re-runs the calling view or effect on change
    pub fn with<R>(&self, f: impl FnOnce(&TodoState) -> R) -> R {
        self.0.with(f)
    }
}

impl TodoStore for AppStore {
    fn view_state<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn mutate(&self, f: impl FnOnce(&mut TodoState)) {
        if self.0.try_update(f).is_none() {
            tracing::debug!("todo store disposed, dropping update");
        }
    }
}
