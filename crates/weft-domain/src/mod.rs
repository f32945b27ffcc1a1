//! # Domain Layer
//!
//! Core types of the Weft resolution runtime. This crate has no knowledge of
//! concrete scopes, configuration or logging.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Names, structural types, instances, targets and locators |
//! | [`dependency`] | The immutable injection chain with cycle and lifetime guards |
//! | [`scoping`] | Stability relations between scopes |
//! | [`ports`] | Resolver, scope, controller, generator and descriptor contracts |
//! | [`error`] | Error taxonomy |
//! | [`constants`] | Standard scope names and fixed messages |

pub mod constants;
pub mod dependency;
pub mod error;
pub mod ports;
pub mod scoping;
pub mod value_objects;

// Re-export commonly used types
pub use dependency::{Dependency, Injection};
pub use error::{Error, Result};
pub use ports::{
    Controller, DescriptorKind, Generator, Provider, ResourceDescriptor, Resolver, ResolverExt,
    Scope, Supply, Value,
};
pub use scoping::Scoping;
pub use value_objects::{Instance, Locator, Name, RawType, Source, Target, Type};
