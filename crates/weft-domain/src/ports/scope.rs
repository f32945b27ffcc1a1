//! Scope Port
//!
//! A scope is the caching policy of a family of resources. The registry hands
//! it a dense serial id per resource, the total resource count (so caches can
//! be allocated at a fixed size) and a single-shot [`Provider`] for the value.
//!
//! ## Contract
//!
//! A scope invokes the provider at most once per live cache key. A scope that
//! cannot serve a request right now (no allocated context) fails with
//! [`Error::scope_error`](crate::error::Error::scope_error).

use std::sync::Arc;

use super::resolver::Value;
use crate::dependency::Dependency;
use crate::error::Result;

/// Supplies the value of one resource for one resolution
pub trait Provider {
    fn provide(&self) -> Result<Value>;
}

impl<F> Provider for F
where
    F: Fn() -> Result<Value>,
{
    fn provide(&self) -> Result<Value> {
        self()
    }
}

/// Pluggable caching and lifetime policy
pub trait Scope: Send + Sync {
    /// Return the cached value for `serial_id`, supplying it when absent
    fn provide(
        &self,
        serial_id: usize,
        resources: usize,
        dependency: &Dependency,
        provider: &dyn Provider,
    ) -> Result<Value>;

    /// The allocate/deallocate handle of a controller-based scope
    fn controller(&self) -> Option<Arc<dyn Controller>> {
        None
    }
}

/// Explicit lifecycle handle of a thread-transferable scope context
///
/// `allocate` establishes (or adopts) the context for the calling thread.
/// `deallocate` tears it down for the calling thread and is idempotent.
pub trait Controller: Send + Sync {
    fn allocate(&self);

    fn deallocate(&self);
}

/// Wrap a scope as a resolvable value
pub fn scope_value(scope: Arc<dyn Scope>) -> Value {
    Arc::new(scope)
}

/// Recover a scope from a resolved value
pub fn as_scope(value: Value) -> Option<Arc<dyn Scope>> {
    value
        .downcast::<Arc<dyn Scope>>()
        .ok()
        .map(|scope| Arc::clone(&*scope))
}
