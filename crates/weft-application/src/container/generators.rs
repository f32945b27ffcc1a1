//! Generator strategies
//!
//! Every resource is bound to exactly one generator, chosen at build time
//! from its descriptor kind and scope name.
//!
//! | Generator | Used for | Caching |
//! |-----------|----------|---------|
//! | [`SingletonGenerator`] | `container` scope and scope implementations | exactly once per container |
//! | [`ReferenceGenerator`] | `reference` scope | none, lifetime check bypassed |
//! | [`ScopedGenerator`] | every other scope | delegated to the [`Scope`] |
//! | [`ConstantGenerator`] | bootstrapped permanences | value fixed at build |

use std::sync::Arc;

use once_cell::sync::OnceCell;
use once_cell::unsync::OnceCell as LocalOnceCell;
use weft_domain::constants::{CONTAINER, REFERENCE};
use weft_domain::ports::{
    ContextAwareHook, DescriptorKind, Generator, Provider, ResourceDescriptor, Resolver, Scope,
    Supplier, Supply, Value,
};
use weft_domain::{Dependency, Error, Locator, Name, Result, Scoping};

/// Looks up the scope implementation for a scope name
pub type ScopeLookup =
    Arc<dyn Fn(&Name, &dyn Resolver) -> Result<Arc<dyn Scope>> + Send + Sync>;

/// Everything a generator needs to know about its resource
#[derive(Clone)]
pub(crate) struct Binding {
    pub serial_id: usize,
    pub signature: Locator,
    pub permanence: Arc<Scoping>,
    pub supplier: Supplier,
    pub context_aware: Option<ContextAwareHook>,
}

impl Binding {
    fn supply(&self, dependency: &Dependency, context: &dyn Resolver) -> Result<Value> {
        (self.supplier)(dependency, context)
    }

    fn in_context(&self, value: Value, dependency: &Dependency) -> Result<Value> {
        match &self.context_aware {
            Some(hook) => hook(value, dependency),
            None => Ok(value),
        }
    }

    /// A second visit of the same resource within one request is a cycle,
    /// whatever instance name it was requested under. Must run before any
    /// cache is entered: a one-shot cell re-entered from its own initializer
    /// blocks forever.
    fn ensure_not_reentered(&self, dependency: &Dependency) -> Result<()> {
        if dependency
            .iter()
            .any(|injection| injection.target() == &self.signature)
        {
            return Err(Error::dependency_cycle(dependency, &self.signature.instance));
        }
        Ok(())
    }
}

/// Select the generator of a resource
pub(crate) fn generator_for(
    descriptor: &ResourceDescriptor,
    serial_id: usize,
    resources: usize,
    permanence: &Arc<Scoping>,
    lookup: &ScopeLookup,
) -> Arc<dyn Generator> {
    let supplier = match &descriptor.supply {
        Supply::Generator(generator) => return Arc::clone(generator),
        Supply::Supplier(supplier) => Arc::clone(supplier),
    };
    let binding = Binding {
        serial_id,
        signature: descriptor.signature.clone(),
        permanence: Arc::clone(permanence),
        supplier,
        context_aware: descriptor.context_aware.clone(),
    };
    let scope = permanence.scope().as_str();
    if descriptor.kind == DescriptorKind::Scope || scope == CONTAINER {
        Arc::new(SingletonGenerator::new(binding))
    } else if scope == REFERENCE {
        Arc::new(ReferenceGenerator { binding })
    } else {
        Arc::new(ScopedGenerator::new(binding, resources, Arc::clone(lookup)))
    }
}

/// Holds the container-wide value of a resource
///
/// The supplier runs at most once however many threads race on the first
/// request; callers arriving after completion read the value without blocking.
pub(crate) struct SingletonGenerator {
    binding: Binding,
    value: OnceCell<Value>,
}

impl SingletonGenerator {
    pub(crate) fn new(binding: Binding) -> Self {
        Self {
            binding,
            value: OnceCell::new(),
        }
    }
}

impl Generator for SingletonGenerator {
    fn generate(&self, dependency: &Dependency, context: &dyn Resolver) -> Result<Value> {
        if let Some(value) = self.value.get() {
            return self.binding.in_context(Arc::clone(value), dependency);
        }
        self.binding.ensure_not_reentered(dependency)?;
        let injected = dependency
            .injecting_into(&self.binding.signature, Arc::clone(&self.binding.permanence))?;
        let value = self
            .value
            .get_or_try_init(|| self.binding.supply(&injected, context))?;
        self.binding.in_context(Arc::clone(value), dependency)
    }
}

/// Supplies forward references without a lifetime check
pub(crate) struct ReferenceGenerator {
    binding: Binding,
}

impl Generator for ReferenceGenerator {
    fn generate(&self, dependency: &Dependency, context: &dyn Resolver) -> Result<Value> {
        let injected = dependency.injecting_into(&self.binding.signature, Scoping::ignore())?;
        self.binding.supply(&injected, context)
    }
}

/// Delegates caching to the scope named by the permanence
pub(crate) struct ScopedGenerator {
    binding: Binding,
    resources: usize,
    lookup: ScopeLookup,
    scope: OnceCell<Arc<dyn Scope>>,
}

impl ScopedGenerator {
    pub(crate) fn new(binding: Binding, resources: usize, lookup: ScopeLookup) -> Self {
        Self {
            binding,
            resources,
            lookup,
            scope: OnceCell::new(),
        }
    }

    fn scope(&self, context: &dyn Resolver) -> Result<&Arc<dyn Scope>> {
        self.scope.get_or_try_init(|| {
            let name = self.binding.permanence.scope();
            (self.lookup)(name, context).map_err(|e| {
                Error::supply_failed_with_source(format!("Scope `{name}` is not available"), e)
            })
        })
    }
}

impl Generator for ScopedGenerator {
    fn generate(&self, dependency: &Dependency, context: &dyn Resolver) -> Result<Value> {
        self.binding.ensure_not_reentered(dependency)?;
        let injected = dependency
            .injecting_into(&self.binding.signature, Arc::clone(&self.binding.permanence))?;
        let scope = self.scope(context)?;
        let provider = OnceProvider::new(|| self.binding.supply(&injected, context));
        let value = scope.provide(
            self.binding.serial_id,
            self.resources,
            &injected,
            &provider,
        )?;
        self.binding.in_context(value, dependency)
    }
}

/// Returns the same value however often a scope calls it within one request
struct OnceProvider<F> {
    supply: F,
    value: LocalOnceCell<Value>,
}

impl<F> OnceProvider<F> {
    fn new(supply: F) -> Self {
        Self {
            supply,
            value: LocalOnceCell::new(),
        }
    }
}

impl<F> Provider for OnceProvider<F>
where
    F: Fn() -> Result<Value>,
{
    fn provide(&self) -> Result<Value> {
        self.value.get_or_try_init(&self.supply).cloned()
    }
}

/// Serves a value computed during bootstrap
pub(crate) struct ConstantGenerator(pub Value);

impl Generator for ConstantGenerator {
    fn generate(&self, _dependency: &Dependency, _context: &dyn Resolver) -> Result<Value> {
        Ok(Arc::clone(&self.0))
    }
}
