//! Root Controller
//!
//! Orchestrates every remote call and reconciles the results into the
//! authoritative [`TodoState`]. Failures never abort a batch: each one
//! overwrites the error banner and the loop moves on.

use futures::future::join_all;

use crate::api::TodoApi;
use crate::edit::{resolve_edit, toggled, EditOutcome};
use crate::error::{TodoError, TodoResult};
use crate::models::{Filter, Todo};
use crate::state::TodoState;
use crate::store::TodoStore;

#[derive(Clone)]
pub struct TodoController<A, S> {
    api: A,
    store: S,
}

impl<A: TodoApi, S: TodoStore> TodoController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    // ========================
    // Synchronous view state
    // ========================

    pub fn set_filter(&self, filter: Filter) {
        self.store.mutate(|state| state.filter = filter);
    }

    pub fn hide_error(&self) {
        self.store.mutate(TodoState::hide_error);
    }

    /// Auto-hide callback for the banner shown at `generation`
    pub fn expire_error(&self, generation: u64) {
        self.store.mutate(|state| state.expire_error(generation));
    }

    fn report(&self, error: TodoError) {
        self.store.mutate(|state| {
            state.show_error(error);
        });
    }

    // ========================
    // Remote operations
    // ========================

    /// Replace the collection with the owner's todos
    pub async fn load(&self) {
        self.hide_error();
        match self.api.list().await {
            Ok(todos) => {
                tracing::info!(count = todos.len(), "loaded todos");
                self.store.mutate(|state| state.replace_all(todos));
            }
            Err(err) => self.report(err),
        }
    }

    /// Create a todo from `title`.
    ///
    /// A placeholder (id 0) is shown while the request is in flight. On
    /// success the new todo gets the next local id, not the server's.
    pub async fn create(&self, title: &str) -> TodoResult<Todo> {
        let title = title.trim();
        if title.is_empty() {
            self.report(TodoError::EmptyTitle);
            return Err(TodoError::EmptyTitle);
        }

        let user_id = self.api.user_id();
        self.store.mutate(|state| {
            state.hide_error();
            state.placeholder = Some(Todo::placeholder(user_id, title));
        });

        let result = match self.api.create(title).await {
            Ok(_) => {
                let mut created = None;
                self.store.mutate(|state| {
                    let todo = Todo {
                        id: state.next_id(),
                        user_id,
                        title: title.to_string(),
                        completed: false,
                    };
                    state.add_item(todo.clone());
                    created = Some(todo);
                });
                if let Some(todo) = &created {
                    tracing::info!(id = todo.id, "created todo");
                }
                created.ok_or(TodoError::CreateFailed)
            }
            Err(err) => {
                self.report(err);
                Err(err)
            }
        };

        self.store.mutate(|state| state.placeholder = None);
        result
    }

    /// Delete `ids` one after another. Failed ids stay in the collection.
    /// Asks for the new-todo field to be focused once the batch settles.
    pub async fn delete(&self, ids: &[u32]) {
        self.delete_batch(ids).await;
        self.store.mutate(TodoState::request_focus);
    }

    async fn delete_batch(&self, ids: &[u32]) {
        self.store.mutate(|state| {
            state.hide_error();
            state.mark_pending(ids.iter().copied());
        });

        for &id in ids {
            let result = self.api.delete(id).await;
            self.store.mutate(|state| {
                match result {
                    Ok(()) => {
                        state.remove_item(id);
                    }
                    Err(err) => {
                        state.show_error(err);
                    }
                }
                state.release_pending([id]);
            });
        }
    }

    /// Send `todos` one after another, splicing each server record in.
    /// Every successful update asks for the new-todo field to be focused.
    pub async fn update(&self, todos: &[Todo]) {
        self.store.mutate(|state| {
            state.hide_error();
            state.mark_pending(todos.iter().map(|todo| todo.id));
        });

        for todo in todos {
            let result = self.api.update(todo).await;
            self.store.mutate(|state| {
                match result {
                    Ok(updated) => {
                        if !state.update_item(updated) {
                            tracing::debug!(id = todo.id, "updated todo no longer in collection");
                        }
                        state.request_focus();
                    }
                    Err(err) => {
                        state.show_error(err);
                    }
                }
                state.release_pending([todo.id]);
            });
        }
    }

    /// Complete every incomplete todo, or reopen all if all are completed.
    /// The updates are issued concurrently; each releases its own id.
    pub async fn toggle_all(&self) {
        let Some(targets) = self.store.view_state(TodoState::toggle_all_targets) else {
            return;
        };
        if targets.is_empty() {
            return;
        }

        self.store
            .mutate(|state| state.mark_pending(targets.iter().map(|todo| todo.id)));

        join_all(
            targets
                .iter()
                .map(|todo| self.update(std::slice::from_ref(todo))),
        )
        .await;
    }

    /// Status checkbox: flip `completed` and send it right away
    pub async fn toggle(&self, todo: &Todo) {
        self.update(&[toggled(todo)]).await;
    }

    /// Finish an inline edit. A cleared title deletes the todo without
    /// moving focus away from the list.
    pub async fn apply_edit(&self, todo: &Todo, previous: &str, draft: &str) -> EditOutcome {
        let outcome = resolve_edit(todo, previous, draft);
        match &outcome {
            EditOutcome::Unchanged => {}
            EditOutcome::Update(updated) => self.update(std::slice::from_ref(updated)).await,
            EditOutcome::Delete(id) => self.delete_batch(&[*id]).await,
        }
        outcome
    }

    /// Delete every completed todo
    pub async fn clear_completed(&self) {
        let Some(ids) = self.store.view_state(TodoState::completed_ids) else {
            return;
        };
        self.delete(&ids).await;
    }
}
