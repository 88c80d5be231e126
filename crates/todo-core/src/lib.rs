//! Todo Core - entity, validation and storage for htmx-todo
//!
//! This crate provides everything below the HTTP layer:
//!
//! - **Todo**: the single persisted entity (id, content, completed flag)
//! - **Validation**: `NewTodo` rejects empty content before any storage call
//! - **Persistence**: SQLite-backed `Repository` with one statement per operation
//! - **Error**: `TodoError` covering validation, not-found and storage failures
//!
//! # Lifecycle
//!
//! ```text
//! nonexistent --create--> active(false) <--toggle--> active(true)
//!                              |                          |
//!                              +---------delete-----------+--> nonexistent
//! ```

pub mod error;
pub mod persistence;
pub mod todo;

pub use error::{PersistenceError, Result, TodoError};
pub use persistence::{Repository, Schema};
pub use todo::{NewTodo, Todo, TodoId};
