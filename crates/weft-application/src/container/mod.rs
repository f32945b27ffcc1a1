//! Resource registry and container
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`resources`] | Two-phase build, grouping and lookup of resources |
//! | [`resource`] | One indexed resource |
//! | [`generators`] | Singleton, reference and scoped generation strategies |
//! | [`injector`] | The [`Container`] resolve surface |

mod bootstrap;
pub mod generators;
pub mod injector;
pub mod resource;
pub mod resources;

pub use generators::ScopeLookup;
pub use injector::Container;
pub use resource::Resource;
pub use resources::Resources;
