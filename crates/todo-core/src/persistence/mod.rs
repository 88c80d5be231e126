//! Persistence layer for todos
//!
//! Provides SQLite-backed storage for the `todos` table.

mod repository;
mod schema;

pub use repository::Repository;
pub use schema::Schema;
