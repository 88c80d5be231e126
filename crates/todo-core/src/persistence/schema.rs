//! SQLite schema for todo storage

/// Schema version stamped on first open
pub const SCHEMA_VERSION: u32 = 1;

/// SQLite schema definition
pub struct Schema;

impl Schema {
    /// Get the complete schema SQL
    ///
    /// `AUTOINCREMENT` keeps ids from being reused after a delete.
    pub fn create_tables() -> &'static str {
        r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0
);
"#
    }
}
