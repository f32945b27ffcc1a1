//! Resource descriptors
//!
//! A descriptor is the bind-time declaration of one resource. Descriptors are
//! produced by the binding layer and consumed once, when the registry is built.
//! Within each raw-type group they are expected most specific first.

use std::fmt;
use std::sync::Arc;

use super::resolver::{Resolver, Value};
use super::scope::{Scope, scope_value};
use crate::constants::CONTAINER;
use crate::dependency::Dependency;
use crate::error::Result;
use crate::scoping::Scoping;
use crate::value_objects::{Instance, Locator, Name, Source, Target, Type};

/// Produces the raw value of a resource
pub type Supplier = Arc<dyn Fn(&Dependency, &dyn Resolver) -> Result<Value> + Send + Sync>;

/// Post-build sanity check of a resource against the complete context
pub type Verifier = Arc<dyn Fn(&Locator, &dyn Resolver) -> Result<()> + Send + Sync>;

/// Adapts a produced value to the dependency that requested it
pub type ContextAwareHook = Arc<dyn Fn(Value, &Dependency) -> Result<Value> + Send + Sync>;

/// Decides how the value of a resource is produced
pub trait Generator: Send + Sync {
    fn generate(&self, dependency: &Dependency, context: &dyn Resolver) -> Result<Value>;
}

/// How a descriptor supplies its value
#[derive(Clone)]
pub enum Supply {
    /// Plain supplier; the registry wraps it in the generator of its scope
    Supplier(Supplier),
    /// Custom generator used as is
    Generator(Arc<dyn Generator>),
}

/// Classification set by the binding layer and resolved once at build time
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum DescriptorKind {
    /// A scope permanence record, built during bootstrap
    Permanence,
    /// A scope implementation, always a container singleton
    Scope,
    Default,
}

/// Bind-time declaration of a resource
#[derive(Clone)]
pub struct ResourceDescriptor {
    pub signature: Locator,
    pub scope: Name,
    pub kind: DescriptorKind,
    pub supply: Supply,
    pub source: Source,
    pub verifier: Option<Verifier>,
    pub context_aware: Option<ContextAwareHook>,
}

impl ResourceDescriptor {
    /// Declare a resource supplied by `supplier` in `scope`
    pub fn new<F>(signature: Locator, scope: impl Into<Name>, supplier: F) -> Self
    where
        F: Fn(&Dependency, &dyn Resolver) -> Result<Value> + Send + Sync + 'static,
    {
        Self::with_supply(
            signature,
            scope,
            DescriptorKind::Default,
            Supply::Supplier(Arc::new(supplier)),
        )
    }

    /// Declare a resource produced by a custom generator
    pub fn generated(
        signature: Locator,
        scope: impl Into<Name>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self::with_supply(
            signature,
            scope,
            DescriptorKind::Default,
            Supply::Generator(generator),
        )
    }

    /// Declare the permanence of a scope
    pub fn permanence(scoping: Scoping) -> Self {
        let scope = scoping.scope().clone();
        let value: Value = Arc::new(scoping);
        Self::with_supply(
            permanence_locator(scope),
            CONTAINER,
            DescriptorKind::Permanence,
            Supply::Supplier(Arc::new(move |_: &Dependency, _: &dyn Resolver| {
                Ok(Arc::clone(&value))
            })),
        )
    }

    /// Declare the permanence of a scope that refers to other permanences
    ///
    /// `factory` runs during bootstrap with a resolver limited to permanences.
    pub fn permanence_with<F>(scope: impl Into<Name>, factory: F) -> Self
    where
        F: Fn(&dyn Resolver) -> Result<Scoping> + Send + Sync + 'static,
    {
        Self::with_supply(
            permanence_locator(scope.into()),
            CONTAINER,
            DescriptorKind::Permanence,
            Supply::Supplier(Arc::new(move |_: &Dependency, context: &dyn Resolver| {
                factory(context).map(|scoping| Arc::new(scoping) as Value)
            })),
        )
    }

    /// Declare a scope implementation under `name`
    pub fn scope<F>(name: impl Into<Name>, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Scope> + Send + Sync + 'static,
    {
        Self::with_supply(
            Locator::new(Instance::new(name, Type::scope())),
            CONTAINER,
            DescriptorKind::Scope,
            Supply::Supplier(Arc::new(move |_: &Dependency, _: &dyn Resolver| {
                Ok(scope_value(factory()))
            })),
        )
    }

    fn with_supply(
        signature: Locator,
        scope: impl Into<Name>,
        kind: DescriptorKind,
        supply: Supply,
    ) -> Self {
        Self {
            signature,
            scope: scope.into(),
            kind,
            supply,
            source: Source::default(),
            verifier: None,
            context_aware: None,
        }
    }

    pub fn with_target(mut self, target: Target) -> Self {
        self.signature.target = target;
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_verifier<F>(mut self, verifier: F) -> Self
    where
        F: Fn(&Locator, &dyn Resolver) -> Result<()> + Send + Sync + 'static,
    {
        self.verifier = Some(Arc::new(verifier));
        self
    }

    pub fn with_context_aware<F>(mut self, hook: F) -> Self
    where
        F: Fn(Value, &Dependency) -> Result<Value> + Send + Sync + 'static,
    {
        self.context_aware = Some(Arc::new(hook));
        self
    }

    pub fn is_permanence(&self) -> bool {
        self.kind == DescriptorKind::Permanence
    }
}

fn permanence_locator(scope: Name) -> Locator {
    Locator::new(Instance::new(scope, Type::permanence()))
}

impl fmt::Debug for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("signature", &self.signature)
            .field("scope", &self.scope)
            .field("kind", &self.kind)
            .field("source", &self.source)
            .field("verifier", &self.verifier.is_some())
            .field("context_aware", &self.context_aware.is_some())
            .finish_non_exhaustive()
    }
}
