//! Scope Implementations
//!
//! ## Scope Selection Guide
//!
//! - **Process-wide values**: `application`, or the built-in `container` scope
//! - **Keyed by request shape**: the `dependency*` and `targetInstance` scopes
//! - **Per thread**: `thread`
//! - **Per unit of work that may hop threads**: `worker`, driven by its controller
//! - **Never cached**: `injection`

#[cfg(feature = "scope-application")]
pub mod application;
#[cfg(feature = "scope-dependency")]
pub mod dependency;
#[cfg(feature = "scope-injection")]
pub mod injection;
#[cfg(feature = "scope-thread")]
pub mod thread;
#[cfg(feature = "scope-worker")]
pub mod worker;

// Re-export for convenience
#[cfg(feature = "scope-application")]
pub use application::ApplicationScope;
#[cfg(feature = "scope-dependency")]
pub use dependency::DependencyScope;
#[cfg(feature = "scope-injection")]
pub use injection::InjectionScope;
#[cfg(feature = "scope-thread")]
pub use thread::ThreadScope;
#[cfg(feature = "scope-worker")]
pub use worker::{WorkerController, WorkerScope};
