//! Domain Port Interfaces
//!
//! Boundary contracts between the registry and the pluggable parts around it.
//!
//! ## Organization
//!
//! - **resolver** - the lookup surface ([`Resolver`], [`ResolverExt`])
//! - **scope** - caching policies ([`Scope`], [`Provider`], [`Controller`])
//! - **descriptor** - bind-time declarations ([`ResourceDescriptor`], [`Generator`])

/// Bind-time resource declarations
pub mod descriptor;
/// Dependency lookup
pub mod resolver;
/// Pluggable caching policies
pub mod scope;

pub use descriptor::{
    ContextAwareHook, DescriptorKind, Generator, ResourceDescriptor, Supplier, Supply, Verifier,
};
pub use resolver::{Resolver, ResolverExt, Value};
pub use scope::{Controller, Provider, Scope, as_scope, scope_value};
