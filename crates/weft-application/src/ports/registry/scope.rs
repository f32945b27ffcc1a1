//! Scope Provider Registry
//!
//! Auto-registration system for scope implementations.

use std::sync::Arc;

use weft_domain::ports::{ResourceDescriptor, Scope};
use weft_domain::{Error, Result, Scoping};

/// Registry entry for scope implementations
///
/// Each scope implementation registers itself with this entry using
/// `#[linkme::distributed_slice(SCOPE_PROVIDERS)]`. The entry carries the
/// permanence declaration of the scope next to the factory creating it.
pub struct ScopeProviderEntry {
    /// Unique scope name (e.g., "thread", "worker")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Permanence of the scope
    pub permanence: fn() -> Scoping,
    /// Factory function to create the scope instance
    pub factory: fn() -> Arc<dyn Scope>,
}

impl ScopeProviderEntry {
    /// The permanence and scope descriptors declaring this scope
    pub fn descriptors(&self) -> [ResourceDescriptor; 2] {
        let factory = self.factory;
        [
            ResourceDescriptor::permanence((self.permanence)()),
            ResourceDescriptor::scope(self.name, move || factory()),
        ]
    }
}

// Auto-collection via linkme distributed slices - scopes submit entries at compile time
#[linkme::distributed_slice]
pub static SCOPE_PROVIDERS: [ScopeProviderEntry] = [..];

/// Find a registered scope by name
pub fn find_scope_provider(name: &str) -> Option<&'static ScopeProviderEntry> {
    SCOPE_PROVIDERS.iter().find(|entry| entry.name == name)
}

/// Find a registered scope by name, failing with the available names
pub fn resolve_scope_provider(name: &str) -> Result<&'static ScopeProviderEntry> {
    find_scope_provider(name).ok_or_else(|| {
        let available: Vec<&str> = SCOPE_PROVIDERS.iter().map(|e| e.name).collect();
        Error::configuration(format!(
            "Unknown scope '{name}'. Available scopes: {available:?}"
        ))
    })
}

/// List all registered scopes
///
/// Returns a list of (name, description) tuples for all registered scopes.
pub fn list_scope_providers() -> Vec<(&'static str, &'static str)> {
    SCOPE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
