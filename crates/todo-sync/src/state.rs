//! Todo State
//!
//! The authoritative in-memory collection plus the transient view state
//! around it: active filter, create placeholder, pending ids, error banner.

use std::collections::BTreeSet;

use crate::error::TodoError;
use crate::models::{Filter, Todo};

/// Currently shown error message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBanner {
    pub error: TodoError,
    /// Bumped on every `show_error`, lets a stale auto-hide timer be ignored
    pub generation: u64,
}

/// Application state owned by the root component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoState {
    /// Server order, successful creates appended. Ids are unique.
    pub todos: Vec<Todo>,
    pub filter: Filter,
    /// Unsaved todo shown while a create is in flight
    pub placeholder: Option<Todo>,
    /// Ids awaiting a server round-trip
    pub pending: BTreeSet<u32>,
    pub error: Option<ErrorBanner>,
    error_generation: u64,
    /// Bumped whenever the new-todo field should take focus again
    pub focus_requests: u64,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self { todos, ..Self::default() }
    }

    // ========================
    // Collection
    // ========================

    /// Replace the whole collection with a freshly loaded one
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    /// Id for a newly created todo: `max(ids ∪ {0}) + 1`
    pub fn next_id(&self) -> u32 {
        self.todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1
    }

    /// Append a todo, replacing any existing one with the same id
    pub fn add_item(&mut self, todo: Todo) {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(existing) => *existing = todo,
            None => self.todos.push(todo),
        }
    }

    /// Splice an updated todo in at its id. Unknown ids are ignored.
    pub fn update_item(&mut self, updated: Todo) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == updated.id) {
            Some(todo) => {
                *todo = updated;
                true
            }
            None => false,
        }
    }

    pub fn remove_item(&mut self, id: u32) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        self.todos.len() != before
    }

    pub fn get(&self, id: u32) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    // ========================
    // Derived views
    // ========================

    /// Todos passing the active filter, in collection order
    pub fn visible(&self) -> Vec<Todo> {
        self.todos
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .cloned()
            .collect()
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.len() - self.active_count()
    }

    pub fn completed_ids(&self) -> Vec<u32> {
        self.todos
            .iter()
            .filter(|todo| todo.completed)
            .map(|todo| todo.id)
            .collect()
    }

    /// True for an empty collection too
    pub fn all_completed(&self) -> bool {
        self.todos.iter().all(|todo| todo.completed)
    }

    /// Records a toggle-all should send.
    ///
    /// All completed: every todo flipped to incomplete. Otherwise only the
    /// incomplete ones, flipped to complete.
    pub fn toggle_all_targets(&self) -> Vec<Todo> {
        let all_completed = self.all_completed();
        self.todos
            .iter()
            .filter(|todo| all_completed || !todo.completed)
            .map(|todo| Todo { completed: !all_completed, ..todo.clone() })
            .collect()
    }

    // ========================
    // Pending set
    // ========================

    pub fn mark_pending(&mut self, ids: impl IntoIterator<Item = u32>) {
        self.pending.extend(ids);
    }

    pub fn release_pending(&mut self, ids: impl IntoIterator<Item = u32>) {
        for id in ids {
            self.pending.remove(&id);
        }
    }

    pub fn is_pending(&self, id: u32) -> bool {
        self.pending.contains(&id)
    }

    // ========================
    // Error banner
    // ========================

    /// Show `error`, overwriting any current message. Returns the generation
    /// an auto-hide timer should pass back to `expire_error`.
    pub fn show_error(&mut self, error: TodoError) -> u64 {
        self.error_generation += 1;
        self.error = Some(ErrorBanner { error, generation: self.error_generation });
        self.error_generation
    }

    pub fn hide_error(&mut self) {
        self.error = None;
    }

    /// Hide the banner only if it is still the one shown at `generation`
    pub fn expire_error(&mut self, generation: u64) {
        if self.error.is_some_and(|banner| banner.generation == generation) {
            self.error = None;
        }
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.map(|banner| banner.error.to_string())
    }

    pub fn request_focus(&mut self) {
        self.focus_requests += 1;
    }
}
