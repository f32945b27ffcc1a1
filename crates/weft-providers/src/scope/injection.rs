//! Injection scope
//!
//! No caching: every injection supplies a fresh value.

use std::sync::Arc;

use weft_application::ports::registry::{SCOPE_PROVIDERS, ScopeProviderEntry};
use weft_domain::constants::INJECTION;
use weft_domain::ports::{Provider, Scope, Value};
use weft_domain::{Dependency, Result, Scoping};

#[derive(Debug, Default, Clone, Copy)]
pub struct InjectionScope;

impl InjectionScope {
    /// Permanence of the `injection` scope
    pub fn permanence() -> Scoping {
        Scoping::new(INJECTION).stable_in(INJECTION)
    }
}

impl Scope for InjectionScope {
    fn provide(
        &self,
        _serial_id: usize,
        _resources: usize,
        _dependency: &Dependency,
        provider: &dyn Provider,
    ) -> Result<Value> {
        provider.provide()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SCOPE_PROVIDERS)]
static INJECTION_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
    name: INJECTION,
    description: "A fresh value for every injection",
    permanence: InjectionScope::permanence,
    factory: || Arc::new(InjectionScope),
};
