//! # Weft - Scope Implementations
//!
//! This crate contains the pluggable caching policies of Weft. Each scope
//! implements the `Scope` port defined in `weft-domain` and registers itself
//! in the scope registry declared by `weft-application`.
//!
//! ## Scopes
//!
//! | Scope | Implementation | Caching |
//! |-------|----------------|---------|
//! | `application` | [`ApplicationScope`] | one value per resource |
//! | `dependency` | [`DependencyScope`] | one value per full dependency hierarchy |
//! | `dependencyType` | [`DependencyScope`] | one value per requested type |
//! | `dependencyInstance` | [`DependencyScope`] | one value per requested name and type |
//! | `targetInstance` | [`DependencyScope`] | one value per target hierarchy |
//! | `thread` | [`ThreadScope`] | one value per resource and thread |
//! | `worker` | [`WorkerScope`] | one value per resource and allocated context |
//! | `injection` | [`InjectionScope`] | none |
//!
//! ## Feature Flags
//!
//! Each scope can be enabled/disabled via feature flags for minimal builds:
//!
//! ```toml
//! [dependencies]
//! weft-providers = { version = "0.1", default-features = false, features = ["scope-thread"] }
//! ```

// Re-export weft-domain types commonly used with scopes
pub use weft_domain::error::{Error, Result};
pub use weft_domain::ports::{Controller, Provider, Scope};

/// Scope implementations
pub mod scope;

#[cfg(feature = "scope-application")]
pub use scope::ApplicationScope;
#[cfg(feature = "scope-dependency")]
pub use scope::DependencyScope;
#[cfg(feature = "scope-injection")]
pub use scope::InjectionScope;
#[cfg(feature = "scope-thread")]
pub use scope::ThreadScope;
#[cfg(feature = "scope-worker")]
pub use scope::{WorkerController, WorkerScope};
