//! Resolver Port
//!
//! The lookup surface exposed by a built container and, in narrowed form, by
//! the bootstrap resolver.

use std::any::{Any, type_name};
use std::sync::Arc;

use crate::dependency::Dependency;
use crate::error::{Error, Result};

/// A resolved instance
pub type Value = Arc<dyn Any + Send + Sync>;

/// Resolves dependencies to instances
pub trait Resolver {
    /// Resolve the most specific resource applicable to `dependency`
    fn resolve(&self, dependency: &Dependency) -> Result<Value>;

    /// Resolve every applicable resource, most specific first
    fn resolve_all(&self, dependency: &Dependency) -> Result<Vec<Value>> {
        self.resolve(dependency).map(|value| vec![value])
    }
}

/// Typed access on top of [`Resolver`]
pub trait ResolverExt: Resolver {
    /// Resolve and downcast to a concrete type
    fn resolve_as<T: Any + Send + Sync>(&self, dependency: &Dependency) -> Result<Arc<T>> {
        self.resolve(dependency)?.downcast::<T>().map_err(|_| {
            Error::internal(format!(
                "Value resolved for {dependency} is not a {}",
                type_name::<T>()
            ))
        })
    }
}

impl<R: Resolver + ?Sized> ResolverExt for R {}
