//! The container
//!
//! Top-level resolve surface over a built [`Resources`] set. The container is
//! read-only after build; the only mutable state lives inside the scopes and
//! the generators' one-shot cells.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, trace};
use weft_domain::ports::{Controller, ResourceDescriptor, Resolver, Scope, Value, as_scope};
use weft_domain::{Dependency, Error, Instance, Name, Result, Type};

use super::generators::ScopeLookup;
use super::resource::Resource;
use super::resources::Resources;

/// A built, read-only registry of resources
pub struct Container {
    resources: Resources,
}

impl Container {
    /// Build a container from descriptors
    ///
    /// Scopes are themselves resources: the scope named X is the resource of
    /// the scope type named X, resolved through the container on first use.
    pub fn build(descriptors: Vec<ResourceDescriptor>) -> Result<Self> {
        debug!(descriptors = descriptors.len(), "Building container");
        let lookup: ScopeLookup = Arc::new(lookup_scope);
        let resources = Resources::new(descriptors, lookup)?;
        info!(resources = resources.len(), "Container built");
        Ok(Self { resources })
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Construct every eager resource; call once after build
    pub fn init_eager(&self) -> Result<()> {
        debug!("Initializing eager resources");
        self.resources.init_eager(self)
    }

    /// Run every resource verifier against this container
    pub fn verify(&self) -> Result<()> {
        debug!("Verifying resources");
        self.resources.verify_in(self)
    }

    /// The scope implementation registered under `name`
    pub fn scope(&self, name: impl Into<Name>) -> Result<Arc<dyn Scope>> {
        lookup_scope(&name.into(), self)
    }

    /// The controller of a controller-based scope, if it has one
    pub fn controller(&self, scope: impl Into<Name>) -> Result<Option<Arc<dyn Controller>>> {
        Ok(self.scope(scope)?.controller())
    }

    fn candidates(&self, ty: &Type) -> Vec<&Arc<Resource>> {
        if ty.is_upper_bound() && !ty.is_wildcard() {
            self.resources.for_upper_bound(ty)
        } else {
            self.resources.for_type(ty).iter().collect()
        }
    }
}

fn lookup_scope(name: &Name, context: &dyn Resolver) -> Result<Arc<dyn Scope>> {
    let value = context.resolve(&Dependency::new(Instance::new(name.clone(), Type::scope())))?;
    as_scope(value).ok_or_else(|| Error::internal(format!("Resource `{name}` is not a scope")))
}

impl Resolver for Container {
    fn resolve(&self, dependency: &Dependency) -> Result<Value> {
        trace!(dependency = %dependency, "Resolving");
        let candidates = self.candidates(dependency.ty());
        match candidates.iter().find(|r| r.is_matching(dependency)) {
            Some(resource) => resource.generate(dependency, self),
            None => Err(Error::no_resource_for(
                dependency,
                candidates.iter().map(|r| r.describe()).collect(),
            )),
        }
    }

    fn resolve_all(&self, dependency: &Dependency) -> Result<Vec<Value>> {
        trace!(dependency = %dependency, "Resolving all");
        self.candidates(dependency.ty())
            .into_iter()
            .filter(|r| r.is_matching(dependency))
            .map(|r| r.generate(dependency, self))
            .collect()
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.resources, f)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("resources", &self.resources)
            .finish()
    }
}
