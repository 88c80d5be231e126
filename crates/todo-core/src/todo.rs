//! The todo entity and its validated creation input

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};

/// Storage-assigned identifier of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl TodoId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for TodoId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub content: String,
    pub completed: bool,
}

/// Content for a todo that has not been inserted yet
///
/// Construction is the only validation point: content must be non-empty.
/// No trimming is applied, so whitespace-only content is accepted as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    content: String,
}

impl NewTodo {
    pub fn new(content: impl Into<String>) -> Result<Self> {
        let content = content.into();
        if content.is_empty() {
            return Err(TodoError::Validation(
                "Content cannot be empty.".to_string(),
            ));
        }
        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_rejects_empty() {
        let err = NewTodo::new("").unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
    }

    #[test]
    fn test_new_todo_keeps_content_verbatim() {
        let todo = NewTodo::new("  buy milk ").unwrap();
        assert_eq!(todo.content(), "  buy milk ");

        let single = NewTodo::new(" ").unwrap();
        assert_eq!(single.content(), " ");
    }

    #[test]
    fn test_todo_id_display() {
        assert_eq!(TodoId(42).to_string(), "42");
        assert_eq!(TodoId::from(7).value(), 7);
    }
}
