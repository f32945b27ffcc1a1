//! # Weft
//!
//! A dependency injection container with pluggable scopes.
//!
//! Resources are declared as [`ResourceDescriptor`]s, each bound to a named
//! scope. The container indexes them by type, picks the most specific match
//! for every request, and refuses to embed a value into a consumer that
//! outlives it.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use weft::{Dependency, Instance, Locator, ResourceDescriptor, Resolver, Type, Value};
//!
//! let container = weft::bootstrap(vec![ResourceDescriptor::new(
//!     Locator::new(Instance::default_of(Type::named("Greeting"))),
//!     "application",
//!     |_: &Dependency, _: &dyn Resolver| Ok(Arc::new("hello") as Value),
//! )])?;
//! let greeting = container.resolve(&Dependency::of_type(Type::named("Greeting")))?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - value types, the dependency chain, scoping, errors and ports
//! - `application` - the resource registry, generators and the container
//! - `providers` - the scope implementations
//! - `infrastructure` - configuration, logging and bootstrap

/// Domain layer - value types, scoping, errors and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use weft_domain::*;
}

/// Application layer - registry, generators and container
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use weft_application::*;
}

/// Scope implementations
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use weft_providers::*;
}

/// Infrastructure layer - config, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use weft_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

pub use application::Container;
pub use infrastructure::{ConfigLoader, WeftConfig};

/// Load the configuration, then build a container with the standard scopes
/// and `descriptors`
///
/// Logging is left to the caller; see
/// [`init_logging`](weft_infrastructure::logging::init_logging).
pub fn bootstrap(descriptors: Vec<ResourceDescriptor>) -> Result<Container> {
    let config = ConfigLoader::new().load()?;
    weft_infrastructure::bootstrap_container(&config.container, descriptors)
}
