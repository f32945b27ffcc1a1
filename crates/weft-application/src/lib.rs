//! Application Layer - Weft
//!
//! This crate contains the resolution runtime of Weft: it turns resource
//! descriptors into a read-only registry and resolves dependencies against it.
//!
//! ## Architecture
//!
//! The application layer:
//! - Builds the resource registry in two phases (scope permanences first)
//! - Chooses one generator per resource from its scope
//! - Exposes the [`Container`] as the top-level [`Resolver`](weft_domain::Resolver)
//! - Declares the registry slice scope implementations register into
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `weft-domain`: For value types, the dependency chain, scoping and ports
//! - Pure Rust libraries for one-shot cells, logging and registration

pub mod container;
pub mod ports;

pub use container::{Container, Resource, Resources, ScopeLookup};
pub use ports::registry::{
    SCOPE_PROVIDERS, ScopeProviderEntry, find_scope_provider, list_scope_providers,
    resolve_scope_provider,
};
