//! Database location.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// In-memory database path understood by libSQL.
pub const MEMORY_PATH: &str = ":memory:";

fn default_path() -> String {
    ".cq/cq.db".to_string()
}

const fn default_busy_timeout_ms() -> u64 {
    5_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,

    /// How long a write waits for another process's lock, in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            busy_timeout_ms: default_busy_timeout_ms(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == MEMORY_PATH
    }

    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_into_project_dir() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, ".cq/cq.db");
        assert!(!config.is_in_memory());
        assert_eq!(config.busy_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn memory_path_detected() {
        let config = DatabaseConfig {
            path: MEMORY_PATH.into(),
            ..DatabaseConfig::default()
        };
        assert!(config.is_in_memory());
    }
}
