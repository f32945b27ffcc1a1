//! Value Objects
//!
//! Immutable, structurally compared signatures used to declare and look up
//! resources.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Name`] | Instance name: any, default, exact or prefix pattern |
//! | [`RawType`] | Stable type identifier with declared supertypes |
//! | [`Type`] | Raw type plus ordered type arguments, optionally an upper bound |
//! | [`Instance`] | Name and type |
//! | [`Target`] | Where in the injection hierarchy a binding applies |
//! | [`Locator`] | Full resource signature (instance and target) |
//! | [`Source`] | Provenance tag of a declaration |

/// Instance, target and locator signatures
pub mod instance;
/// Instance names
pub mod name;
/// Provenance of declarations
pub mod source;
/// Structural type signatures
pub mod types;

pub use instance::{Instance, Locator, Target};
pub use name::Name;
pub use source::Source;
pub use types::{RawType, Type};
