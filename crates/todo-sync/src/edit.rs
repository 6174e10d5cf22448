//! Edit Policy
//!
//! What an inline title edit or a status checkbox click turns into.

use crate::models::Todo;

/// Result of finishing an inline edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Same trimmed title, leave edit mode without a request
    Unchanged,
    /// Send this record
    Update(Todo),
    /// Title was cleared, delete the todo instead
    Delete(u32),
}

/// Resolve a text edit of `todo`.
///
/// `previous` is the title snapshot taken when edit mode was entered,
/// `draft` the current field contents. `completed` is preserved.
pub fn resolve_edit(todo: &Todo, previous: &str, draft: &str) -> EditOutcome {
    let title = draft.trim();

    if title == previous.trim() {
        return EditOutcome::Unchanged;
    }
    if title.is_empty() {
        return EditOutcome::Delete(todo.id);
    }

    EditOutcome::Update(Todo {
        title: title.to_string(),
        ..todo.clone()
    })
}

/// Checkbox path: flip `completed`, keep the title
pub fn toggled(todo: &Todo) -> Todo {
    Todo {
        completed: !todo.completed,
        ..todo.clone()
    }
}
