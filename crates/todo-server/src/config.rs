//! Server configuration
//!
//! Resolved from built-in defaults, then an optional TOML file named by
//! `TODO_CONFIG`, then the `TODO_ADDR` / `TODO_DB` environment variables:
//!
//! ```toml
//! addr = "127.0.0.1:3000"
//! database_path = "/var/lib/htmx-todo/todos.db"
//! ```

use std::env::VarError;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable naming a TOML config file
pub const CONFIG_ENV: &str = "TODO_CONFIG";
/// Environment variable overriding the listen address
pub const ADDR_ENV: &str = "TODO_ADDR";
/// Environment variable overriding the database path
pub const DB_ENV: &str = "TODO_DB";

/// Errors that can occur while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error reading {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("{var} is not valid UTF-8: {value}")]
    NotUnicode { var: &'static str, value: String },
}

/// Read an environment variable, treating only absence as unset
fn env_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    parse_var(key, std::env::var(key))
}

fn parse_var(
    key: &'static str,
    value: Result<String, VarError>,
) -> Result<Option<String>, ConfigError> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(ConfigError::NotUnicode {
            var: key,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

/// Listener and storage settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind
    pub addr: String,
    /// SQLite file, or `:memory:`
    pub database_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:3000".to_string(),
            database_path: PathBuf::from("todos.db"),
        }
    }
}

impl ServerConfig {
    /// Parse a TOML document; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read and parse a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply overrides from a variable lookup
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup(ADDR_ENV) {
            self.addr = addr;
        }
        if let Some(db) = lookup(DB_ENV) {
            self.database_path = PathBuf::from(db);
        }
        self
    }

    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let base = match env_var(CONFIG_ENV)? {
            Some(path) => {
                tracing::info!("Loading config from {}", path);
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        let addr = env_var(ADDR_ENV)?;
        let database_path = env_var(DB_ENV)?;
        Ok(base.with_overrides(|key| match key {
            ADDR_ENV => addr.clone(),
            DB_ENV => database_path.clone(),
            _ => None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "0.0.0.0:3000");
        assert_eq!(config.database_path, PathBuf::from("todos.db"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ServerConfig::from_toml_str(r#"database_path = "/tmp/x.db""#).unwrap();
        assert_eq!(config.addr, "0.0.0.0:3000");
        assert_eq!(config.database_path, PathBuf::from("/tmp/x.db"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = ServerConfig::from_toml_str("addr = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"addr = "127.0.0.1:8081""#).unwrap();

        let config = ServerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.addr, "127.0.0.1:8081");
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::from_file("/nonexistent/todo.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_parse_var_absent_and_present() {
        assert_eq!(parse_var(CONFIG_ENV, Err(VarError::NotPresent)).unwrap(), None);
        assert_eq!(
            parse_var(ADDR_ENV, Ok("127.0.0.1:1".to_string())).unwrap(),
            Some("127.0.0.1:1".to_string())
        );
    }

    #[test]
    fn test_parse_var_rejects_non_unicode() {
        let raw = std::ffi::OsString::from("todo.toml");
        let err = parse_var(CONFIG_ENV, Err(VarError::NotUnicode(raw))).unwrap_err();
        assert!(matches!(err, ConfigError::NotUnicode { var: CONFIG_ENV, .. }));
    }

    #[test]
    fn test_overrides_win() {
        let vars: HashMap<&str, &str> = [(ADDR_ENV, "127.0.0.1:9000"), (DB_ENV, ":memory:")]
            .into_iter()
            .collect();

        let config = ServerConfig::from_toml_str(r#"addr = "0.0.0.0:1""#)
            .unwrap()
            .with_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.addr, "127.0.0.1:9000");
        assert_eq!(config.database_path, PathBuf::from(":memory:"));
    }
}
