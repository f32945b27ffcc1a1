//! Scope Registry System
//!
//! Defines the auto-registration infrastructure for scope implementations.
//! Uses the `linkme` crate for compile-time registration of scopes that can
//! be discovered and declared at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Scope Registration Flow                      │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Scope defines:     #[linkme::distributed_slice(SCOPES)]     │
//! │                        static ENTRY: ScopeProviderEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static SCOPES: [Entry] = [..]        │
//! │                              ↓                                  │
//! │  3. Bootstrap queries: SCOPE_PROVIDERS.iter()                   │
//! │                              ↓                                  │
//! │  4. Config selects:    scopes = ["thread", "worker"]            │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Scope (in weft-providers)
//!
//! ```ignore
//! use weft_application::ports::registry::{ScopeProviderEntry, SCOPE_PROVIDERS};
//!
//! #[linkme::distributed_slice(SCOPE_PROVIDERS)]
//! static THREAD_SCOPE: ScopeProviderEntry = ScopeProviderEntry {
//!     name: "thread",
//!     description: "One value per resource and thread",
//!     permanence: thread_permanence,
//!     factory: thread_scope,
//! };
//! ```

pub mod scope;

pub use scope::{
    SCOPE_PROVIDERS, ScopeProviderEntry, find_scope_provider, list_scope_providers,
    resolve_scope_provider,
};
