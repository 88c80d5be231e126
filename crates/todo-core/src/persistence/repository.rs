//! Repository for CRUD operations on todos
//!
//! Every method runs exactly one statement against the connection.

use std::path::Path;

use super::schema::{Schema, SCHEMA_VERSION};
use crate::error::{PersistenceError, Result};
use crate::todo::{NewTodo, Todo, TodoId};

const TODO_COLUMNS: &str = "id, content, completed";

/// Repository for persisting todos
pub struct Repository {
    conn: rusqlite::Connection,
}

impl Repository {
    /// Open (or create) the database at the given path
    ///
    /// SQLite treats the path `:memory:` as a private in-memory database.
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let conn = rusqlite::Connection::open(path.as_ref())?;
        let repo = Self { conn };
        repo.initialize()?;
        tracing::info!("Opened todo database at {:?}", path.as_ref());
        Ok(repo)
    }

    /// Create an in-memory repository (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        let repo = Self { conn };
        repo.initialize()?;
        Ok(repo)
    }

    /// Create the tables and stamp the schema version on first open
    fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(Schema::create_tables())?;

        if self.get_schema_version()?.is_none() {
            self.set_schema_version(SCHEMA_VERSION)?;
            tracing::debug!("Created todo schema v{}", SCHEMA_VERSION);
        }

        Ok(())
    }

    fn get_schema_version(&self) -> Result<Option<u32>> {
        let result = self.conn.query_row(
            "SELECT version FROM schema_version ORDER BY applied_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        );

        match result {
            Ok(version) => Ok(Some(version)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(PersistenceError::from(e).into()),
        }
    }

    fn set_schema_version(&self, version: u32) -> Result<()> {
        self.conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [version],
        )?;
        Ok(())
    }

    // ==================== Todo Operations ====================

    /// Get all todos in insertion order
    pub fn list_todos(&self) -> Result<Vec<Todo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {} FROM todos ORDER BY id", TODO_COLUMNS))?;

        let todos = stmt
            .query_map([], Self::row_to_todo)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(todos)
    }

    /// Get a todo by ID
    pub fn get_todo(&self, id: TodoId) -> Result<Option<Todo>> {
        let result = self.conn.query_row(
            &format!("SELECT {} FROM todos WHERE id = ?1", TODO_COLUMNS),
            [id.value()],
            Self::row_to_todo,
        );

        match result {
            Ok(todo) => Ok(Some(todo)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(PersistenceError::from(e).into()),
        }
    }

    /// Insert a new, uncompleted todo and return the stored row
    pub fn create_todo(&self, new_todo: &NewTodo) -> Result<Todo> {
        let todo = self.conn.query_row(
            &format!(
                "INSERT INTO todos (content, completed) VALUES (?1, 0) RETURNING {}",
                TODO_COLUMNS
            ),
            [new_todo.content()],
            Self::row_to_todo,
        )?;

        Ok(todo)
    }

    /// Flip `completed` in a single statement
    ///
    /// Returns `None` when no row has the given id.
    pub fn toggle_todo(&self, id: TodoId) -> Result<Option<Todo>> {
        let result = self.conn.query_row(
            &format!(
                "UPDATE todos SET completed = NOT completed WHERE id = ?1 RETURNING {}",
                TODO_COLUMNS
            ),
            [id.value()],
            Self::row_to_todo,
        );

        match result {
            Ok(todo) => Ok(Some(todo)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(PersistenceError::from(e).into()),
        }
    }

    /// Delete a todo, returning whether a row was removed
    pub fn delete_todo(&self, id: TodoId) -> Result<bool> {
        let affected = self
            .conn
            .execute("DELETE FROM todos WHERE id = ?1", [id.value()])?;
        Ok(affected > 0)
    }

    /// Count stored todos
    pub fn count_todos(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM todos", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_todo(row: &rusqlite::Row) -> rusqlite::Result<Todo> {
        Ok(Todo {
            id: TodoId(row.get(0)?),
            content: row.get(1)?,
            completed: row.get(2)?,
        })
    }
}
