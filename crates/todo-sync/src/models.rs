//! Todo Models
//!
//! Data structures matching the remote `/todos` resource.

use serde::{Deserialize, Serialize};

/// Todo record (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Server-assigned id, 0 for the unsaved placeholder
    pub id: u32,
    pub user_id: u32,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Id reserved for the locally-synthesized placeholder
    pub const PLACEHOLDER_ID: u32 = 0;

    /// Unsaved todo shown while a create request is in flight
    pub fn placeholder(user_id: u32, title: &str) -> Self {
        Self {
            id: Self::PLACEHOLDER_ID,
            user_id,
            title: title.trim().to_string(),
            completed: false,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == Self::PLACEHOLDER_ID
    }
}

/// `POST /todos` body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTodo<'a> {
    pub title: &'a str,
    pub completed: bool,
    pub user_id: u32,
}

impl<'a> NewTodo<'a> {
    pub fn new(title: &'a str, user_id: u32) -> Self {
        Self { title, completed: false, user_id }
    }
}

/// `PATCH /todos/<id>` body
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch<'a> {
    pub id: u32,
    pub title: &'a str,
    pub completed: bool,
    pub user_id: u32,
}

impl<'a> From<&'a Todo> for TodoPatch<'a> {
    fn from(todo: &'a Todo) -> Self {
        Self {
            id: todo.id,
            title: &todo.title,
            completed: todo.completed,
            user_id: todo.user_id,
        }
    }
}

/// List view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Filter::All => "#/",
            Filter::Active => "#/active",
            Filter::Completed => "#/completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_wire_format() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 5,
            "userId": 2039,
            "title": "buy milk",
            "completed": true,
        }))
        .unwrap();
        assert_eq!(todo.id, 5);
        assert_eq!(todo.user_id, 2039);
        assert!(todo.completed);
    }

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_value(NewTodo::new("walk", 2039)).unwrap();
        assert_eq!(body, json!({ "title": "walk", "completed": false, "userId": 2039 }));

        let todo = Todo { id: 3, user_id: 2039, title: "read".into(), completed: true };
        let body = serde_json::to_value(TodoPatch::from(&todo)).unwrap();
        assert_eq!(body, json!({ "id": 3, "title": "read", "completed": true, "userId": 2039 }));
    }

    #[test]
    fn test_placeholder_is_trimmed() {
        let todo = Todo::placeholder(1, "  b  ");
        assert!(todo.is_placeholder());
        assert_eq!(todo.title, "b");
        assert!(!todo.completed);
    }

    #[test]
    fn test_filter_matches() {
        let open = Todo { id: 1, user_id: 1, title: "a".into(), completed: false };
        let done = Todo { id: 2, user_id: 1, title: "b".into(), completed: true };

        assert!(Filter::All.matches(&open) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open) && !Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&open) && Filter::Completed.matches(&done));
    }
}
