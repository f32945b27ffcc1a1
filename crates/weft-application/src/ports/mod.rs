//! Application ports
//!
//! - **registry/** - compile-time registration of scope implementations

pub mod registry;
