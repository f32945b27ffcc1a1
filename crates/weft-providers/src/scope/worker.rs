//! Worker scope
//!
//! A controller-based scope: values live in a worker context that a thread
//! attaches to with [`Controller::allocate`] and detaches from with
//! [`Controller::deallocate`]. A context allocated on one thread can be
//! adopted by another thread through the same controller; values written
//! before the transfer stay visible.
//!
//! ## Lifecycle
//!
//! ```text
//! unallocated --allocate--> allocated --deallocate--> unallocated
//!                                                       (deallocate again: no-op)
//! ```
//!
//! Requests from a thread without an attached context fail with
//! `SupplyFailed("Scope error")`.
//!
//! Transfers may be chained to any depth. `deallocate` only detaches the
//! calling thread; the context is torn down once no thread is attached to it.

use std::cell::RefCell;
use std::sync::Arc;
use std::thread::{self, ThreadId};

use dashmap::DashMap;
use parking_lot::{Mutex, ReentrantMutex};
use tracing::debug;
use weft_application::ports::registry::{SCOPE_PROVIDERS, ScopeProviderEntry};
use weft_domain::constants::{INJECTION, WORKER};
use weft_domain::ports::{Controller, Provider, Scope, Value};
use weft_domain::{Dependency, Error, Result, Scoping};

/// The values of one unit of work
struct WorkerContext {
    values: ReentrantMutex<RefCell<Vec<Option<Value>>>>,
}

impl WorkerContext {
    fn new() -> Self {
        Self {
            values: ReentrantMutex::new(RefCell::new(Vec::new())),
        }
    }

    fn provide(
        &self,
        serial_id: usize,
        resources: usize,
        provider: &dyn Provider,
    ) -> Result<Value> {
        let guard = self.values.lock();
        let cached = guard.borrow().get(serial_id).cloned().flatten();
        if let Some(value) = cached {
            return Ok(value);
        }
        let value = provider.provide()?;
        let mut values = guard.borrow_mut();
        let size = resources.max(serial_id + 1);
        if values.len() < size {
            values.resize(size, None);
        }
        Ok(Arc::clone(values[serial_id].get_or_insert(value)))
    }
}

/// Which context each thread is attached to
#[derive(Default)]
struct WorkerState {
    contexts: DashMap<ThreadId, Arc<WorkerContext>>,
}

impl WorkerState {
    fn current(&self) -> Option<Arc<WorkerContext>> {
        self.contexts
            .get(&thread::current().id())
            .map(|context| Arc::clone(context.value()))
    }

    fn is_attached(&self, context: &Arc<WorkerContext>) -> bool {
        self.contexts
            .iter()
            .any(|entry| Arc::ptr_eq(entry.value(), context))
    }
}

#[derive(Default)]
pub struct WorkerScope {
    state: Arc<WorkerState>,
}

impl WorkerScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Permanence of the `worker` scope
    pub fn permanence() -> Scoping {
        Scoping::new(WORKER).stable_in(WORKER).stable_in(INJECTION)
    }

    /// A controller bound to the calling thread's context, if it has one
    pub fn worker_controller(&self) -> WorkerController {
        WorkerController {
            state: Arc::clone(&self.state),
            context: Mutex::new(self.state.current()),
        }
    }
}

impl Scope for WorkerScope {
    fn provide(
        &self,
        serial_id: usize,
        resources: usize,
        _dependency: &Dependency,
        provider: &dyn Provider,
    ) -> Result<Value> {
        let context = self.state.current().ok_or_else(Error::scope_error)?;
        context.provide(serial_id, resources, provider)
    }

    fn controller(&self) -> Option<Arc<dyn Controller>> {
        Some(Arc::new(self.worker_controller()))
    }
}

/// Allocate/deallocate handle of a [`WorkerScope`]
///
/// Share the controller with another thread and call `allocate` there to
/// transfer the context.
pub struct WorkerController {
    state: Arc<WorkerState>,
    context: Mutex<Option<Arc<WorkerContext>>>,
}

impl Controller for WorkerController {
    fn allocate(&self) {
        // attach while holding the slot so a concurrent deallocate sees it
        let mut own = self.context.lock();
        let context = Arc::clone(own.get_or_insert_with(|| Arc::new(WorkerContext::new())));
        let id = thread::current().id();
        self.state.contexts.insert(id, context);
        drop(own);
        debug!(thread = ?id, "Worker context allocated");
    }

    fn deallocate(&self) {
        let id = thread::current().id();
        let Some((_, context)) = self.state.contexts.remove(&id) else {
            return;
        };
        debug!(thread = ?id, "Worker context deallocated");
        let mut own = self.context.lock();
        if own.as_ref().is_some_and(|own| Arc::ptr_eq(own, &context))
            && !self.state.is_attached(&context)
        {
            *own = None;
        }
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(SCOPE_PROVIDERS)]
static WORKER_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
    name: WORKER,
    description: "One value per resource and allocated worker context",
    permanence: WorkerScope::permanence,
    factory: || Arc::new(WorkerScope::new()),
};
