//! Thread scope
//!
//! One fixed-size slot table per thread and scope instance, kept in thread
//! local storage. A table is only ever touched by its own thread and is
//! dropped with it, together with the values it caches.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use weft_application::ports::registry::{SCOPE_PROVIDERS, ScopeProviderEntry};
use weft_domain::constants::{INJECTION, THREAD};
use weft_domain::ports::{Provider, Scope, Value};
use weft_domain::{Dependency, Result, Scoping};

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    /// Slot tables of the current thread, by scope instance
    static TABLES: RefCell<HashMap<u64, Vec<Option<Value>>>> = RefCell::new(HashMap::new());
}

pub struct ThreadScope {
    id: u64,
}

impl ThreadScope {
    pub fn new() -> Self {
        Self {
            id: NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Permanence of the `thread` scope
    pub fn permanence() -> Scoping {
        Scoping::new(THREAD).stable_in(THREAD).stable_in(INJECTION)
    }

    fn cached(&self, serial_id: usize) -> Option<Value> {
        TABLES.with(|tables| {
            tables
                .borrow()
                .get(&self.id)
                .and_then(|values| values.get(serial_id).cloned().flatten())
        })
    }
}

impl Default for ThreadScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope for ThreadScope {
    fn provide(
        &self,
        serial_id: usize,
        resources: usize,
        _dependency: &Dependency,
        provider: &dyn Provider,
    ) -> Result<Value> {
        if let Some(value) = self.cached(serial_id) {
            return Ok(value);
        }
        // no borrow is held here; the supplier may resolve other thread values
        let value = provider.provide()?;
        TABLES.with(|tables| {
            let mut tables = tables.borrow_mut();
            let values = tables
                .entry(self.id)
                .or_insert_with(|| vec![None; resources]);
            if values.len() <= serial_id {
                values.resize(serial_id + 1, None);
            }
            Ok(Arc::clone(values[serial_id].get_or_insert(value)))
        })
    }
}

impl Drop for ThreadScope {
    fn drop(&mut self) {
        // tables of other threads go away when those threads exit
        let _ = TABLES.try_with(|tables| tables.borrow_mut().remove(&self.id));
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SCOPE_PROVIDERS)]
static THREAD_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
    name: THREAD,
    description: "One value per resource and thread",
    permanence: ThreadScope::permanence,
    factory: || Arc::new(ThreadScope::new()),
};
