//! Row type, form commands, and the partial update patch.
//!
//! # Design
//! `NewTodo` and `UpdateTitle` are the typed commands produced by the add
//! and edit forms; they carry exactly the fields the forms submit.
//! `TodoPatch` is what reaches the store: every field is optional, and an
//! omitted field keeps its stored value.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::priority::Priority;

/// A single persisted to-do row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    pub priority: Priority,
}

/// Command from the add form. New todos always start open at normal
/// priority, so the title is the only input.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTodo {
    pub title: String,
}

/// Command from the edit form on the detail page.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTitle {
    pub title: String,
}

/// Partial update applied to an existing row. Only the `Some` fields are
/// written; the rest remain unchanged.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub done: Option<bool>,
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: Uuid::nil(),
            title: "Test".to_string(),
            done: false,
            priority: Priority::Normal,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["title"], "Test");
        assert_eq!(json["done"], false);
        assert_eq!(json["priority"], "normal");
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: Uuid::new_v4(),
            title: "Roundtrip".to_string(),
            done: true,
            priority: Priority::High,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn new_todo_requires_title() {
        let result: Result<NewTodo, _> = serde_json::from_str(r#"{}"#);
        assert!(result.is_err());

        let input: NewTodo = serde_json::from_str(r#"{"title":"Buy milk"}"#).unwrap();
        assert_eq!(input.title, "Buy milk");
    }

    #[test]
    fn patch_defaults_to_no_changes() {
        let patch = TodoPatch::default();
        assert!(patch.title.is_none());
        assert!(patch.done.is_none());
        assert!(patch.priority.is_none());
    }
}
