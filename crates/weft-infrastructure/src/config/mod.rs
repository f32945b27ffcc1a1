//! Configuration management
//!
//! Defaults, an optional TOML file and `WEFT__`-prefixed environment variables
//! are merged by figment into one [`WeftConfig`].

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ContainerConfig, LoggingConfig, WeftConfig};
