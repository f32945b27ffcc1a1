//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeftConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Container assembly configuration
    pub container: ContainerConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Enable JSON output format
    pub json_format: bool,

    /// Log to a daily rolling file in addition to stdout
    pub file_output: Option<PathBuf>,

    /// Maximum number of rotated files to keep
    pub max_files: usize,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
            max_files: LOG_MAX_FILES,
        }
    }
}

/// How the container is assembled
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// Create `container` scoped resources while bootstrapping
    pub eager_init: bool,

    /// Run resource verifiers after the container is built
    pub verify: bool,

    /// Registered scopes to declare; empty declares all of them
    pub scopes: Vec<String>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            eager_init: false,
            verify: true,
            scopes: Vec::new(),
        }
    }
}

impl ContainerConfig {
    /// Whether the registered scope `name` is declared
    pub fn is_enabled(&self, name: &str) -> bool {
        self.scopes.is_empty() || self.scopes.iter().any(|scope| scope == name)
    }
}
