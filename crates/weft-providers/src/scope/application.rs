//! Application scope
//!
//! One value per resource for the life-span of the scope instance. Slots are
//! allocated once, sized by the total resource count.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use weft_application::ports::registry::{SCOPE_PROVIDERS, ScopeProviderEntry};
use weft_domain::constants::APPLICATION;
use weft_domain::ports::{Provider, Scope, Value};
use weft_domain::{Dependency, Error, Result, Scoping};

/// Exactly-once value per serial id
#[derive(Default)]
pub struct ApplicationScope {
    slots: OnceCell<Box<[OnceCell<Value>]>>,
}

impl ApplicationScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permanence of the `application` scope
    pub fn permanence() -> Scoping {
        Scoping::new(APPLICATION).group(Scoping::singleton())
    }
}

impl Scope for ApplicationScope {
    fn provide(
        &self,
        serial_id: usize,
        resources: usize,
        _dependency: &Dependency,
        provider: &dyn Provider,
    ) -> Result<Value> {
        let slots = self
            .slots
            .get_or_init(|| (0..resources).map(|_| OnceCell::new()).collect());
        let slot = slots.get(serial_id).ok_or_else(|| {
            Error::internal(format!(
                "Serial id {serial_id} is out of range for {} resources",
                slots.len()
            ))
        })?;
        slot.get_or_try_init(|| provider.provide()).cloned()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SCOPE_PROVIDERS)]
static APPLICATION_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
    name: APPLICATION,
    description: "One value per resource for the life-span of the application",
    permanence: ApplicationScope::permanence,
    factory: || Arc::new(ApplicationScope::new()),
};
