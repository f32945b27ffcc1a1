//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the container.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`bootstrap`] | Standard scope declarations and container assembly |
//! | [`config`] | TOML/environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//! | [`error_ext`] | Context extension for foreign errors |
//! | [`logging`] | Structured logging with tracing |

// Force linkme registration of the scope implementations
extern crate weft_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{bootstrap_container, standard_descriptors};
pub use config::{ConfigLoader, ContainerConfig, LoggingConfig, WeftConfig};
pub use error_ext::ErrorContext;
