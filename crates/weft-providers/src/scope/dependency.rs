//! Dependency scopes
//!
//! A simple keyed cache: a string identity is derived from the dependency and
//! the value is memoized per identity. The compute step runs inside a
//! reentrant critical section so a supplier may resolve other values from the
//! same scope while no other thread can supply the same key twice.
//!
//! ## Identities
//!
//! | Scope | Identity |
//! |-------|----------|
//! | `dependencyType` | [`DependencyScope::type_name`] |
//! | `dependencyInstance` | [`DependencyScope::instance_name`] |
//! | `dependency` | [`DependencyScope::hierarchical_instance_name`] |
//! | `targetInstance` | [`DependencyScope::target_instance_name`] |

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::ReentrantMutex;
use tracing::trace;
use weft_application::ports::registry::{SCOPE_PROVIDERS, ScopeProviderEntry};
use weft_domain::constants::{DEPENDENCY, DEPENDENCY_INSTANCE, DEPENDENCY_TYPE, TARGET_INSTANCE};
use weft_domain::ports::{Provider, Scope, Value};
use weft_domain::{Dependency, Name, Result, Scoping};

/// Derives the cache key of a dependency
pub type Identity = fn(&Dependency) -> String;

pub struct DependencyScope {
    identity: Identity,
    instances: ReentrantMutex<RefCell<HashMap<String, Value>>>,
}

impl DependencyScope {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            instances: ReentrantMutex::new(RefCell::new(HashMap::new())),
        }
    }

    pub fn type_name(dependency: &Dependency) -> String {
        dependency.ty().to_string()
    }

    pub fn instance_name(dependency: &Dependency) -> String {
        format!("{}@{}", dependency.name(), dependency.ty())
    }

    pub fn hierarchical_instance_name(dependency: &Dependency) -> String {
        Self::instance_name(dependency) + &Self::target_instance_name(dependency)
    }

    /// Targets from the outermost to the innermost injection
    pub fn target_instance_name(dependency: &Dependency) -> String {
        (0..dependency.injection_depth())
            .rev()
            .filter_map(|level| dependency.target(level))
            .map(ToString::to_string)
            .collect()
    }

    /// Permanence shared by every dependency scope
    pub fn permanence(scope: impl Into<Name>) -> Scoping {
        Scoping::new(scope).group(Scoping::singleton())
    }

    /// Number of cached values
    pub fn len(&self) -> usize {
        self.instances.lock().borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Scope for DependencyScope {
    fn provide(
        &self,
        _serial_id: usize,
        _resources: usize,
        dependency: &Dependency,
        provider: &dyn Provider,
    ) -> Result<Value> {
        let key = (self.identity)(dependency);
        let guard = self.instances.lock();
        let cached = guard.borrow().get(&key).cloned();
        if let Some(value) = cached {
            return Ok(value);
        }
        trace!(key = %key, "Supplying dependency scoped value");
        let value = provider.provide()?;
        let mut instances = guard.borrow_mut();
        Ok(Arc::clone(instances.entry(key).or_insert(value)))
    }
}

impl fmt::Debug for DependencyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependencyScope")
            .field("instances", &self.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SCOPE_PROVIDERS)]
static DEPENDENCY_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
    name: DEPENDENCY,
    description: "One value per full dependency hierarchy",
    permanence: || DependencyScope::permanence(DEPENDENCY),
    factory: || Arc::new(DependencyScope::new(DependencyScope::hierarchical_instance_name)),
};

#[linkme::distributed_slice(SCOPE_PROVIDERS)]
static DEPENDENCY_TYPE_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
    name: DEPENDENCY_TYPE,
    description: "One value per requested type",
    permanence: || DependencyScope::permanence(DEPENDENCY_TYPE),
    factory: || Arc::new(DependencyScope::new(DependencyScope::type_name)),
};

#[linkme::distributed_slice(SCOPE_PROVIDERS)]
static DEPENDENCY_INSTANCE_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
    name: DEPENDENCY_INSTANCE,
    description: "One value per requested name and type",
    permanence: || DependencyScope::permanence(DEPENDENCY_INSTANCE),
    factory: || Arc::new(DependencyScope::new(DependencyScope::instance_name)),
};

#[linkme::distributed_slice(SCOPE_PROVIDERS)]
static TARGET_INSTANCE_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
    name: TARGET_INSTANCE,
    description: "One value per target hierarchy",
    permanence: || DependencyScope::permanence(TARGET_INSTANCE),
    factory: || Arc::new(DependencyScope::new(DependencyScope::target_instance_name)),
};
