//! Scope permanence
//!
//! The relation of a scope to other scopes is captured by one [`Scoping`] per
//! scope name. A scoping answers the question "can a value from this scope be
//! safely embedded in a value from that scope".

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::constants::{GROUP_PREFIX, GROUP_SEPARATOR, IGNORE_SCOPING, SINGLETON_SCOPING};
use crate::value_objects::Name;

static IGNORE: Lazy<Arc<Scoping>> =
    Lazy::new(|| Arc::new(Scoping::new(IGNORE_SCOPING).stable_by_design()));

static SINGLETON: Lazy<Arc<Scoping>> =
    Lazy::new(|| Arc::new(Scoping::new(SINGLETON_SCOPING).stable_by_design()));

/// Stability metadata of a named scope
///
/// Built once, then shared as `Arc<Scoping>`; equality is by scope name.
#[derive(Clone, Debug)]
pub struct Scoping {
    scope: Name,
    stable_by_design: bool,
    stable_in: Vec<Name>,
    group: Option<Arc<Scoping>>,
    eager: bool,
}

impl Scoping {
    pub fn new(scope: impl Into<Name>) -> Self {
        Self {
            scope: scope.into(),
            stable_by_design: false,
            stable_in: Vec::new(),
            group: None,
            eager: false,
        }
    }

    /// The scoping that accepts and is accepted by every other scoping
    pub fn ignore() -> Arc<Scoping> {
        IGNORE.clone()
    }

    /// The scoping of values that, once created, live as long as the container
    pub fn singleton() -> Arc<Scoping> {
        SINGLETON.clone()
    }

    /// The group a namespaced scope rolls up under: `request:X` maps to `@request`
    pub fn group_name(scope: &Name) -> Option<Name> {
        match scope.as_str().find(GROUP_SEPARATOR) {
            Some(idx) if idx > 0 => Some(Name::named(format!(
                "{GROUP_PREFIX}{}",
                &scope.as_str()[..idx]
            ))),
            _ => None,
        }
    }

    /// Values of this scope never change once created
    pub fn stable_by_design(mut self) -> Self {
        self.stable_by_design = true;
        self
    }

    /// Declares that values of this scope may be injected into values of `parent`
    pub fn stable_in(mut self, parent: impl Into<Name>) -> Self {
        self.stable_in.push(parent.into());
        self
    }

    pub fn group(mut self, group: Arc<Scoping>) -> Self {
        self.group = Some(group);
        self
    }

    pub fn eager(mut self) -> Self {
        self.eager = true;
        self
    }

    pub fn lazy(mut self) -> Self {
        self.eager = false;
        self
    }

    pub fn scope(&self) -> &Name {
        &self.scope
    }

    pub fn group_scoping(&self) -> Option<&Arc<Scoping>> {
        self.group.as_ref()
    }

    pub fn is_eager(&self) -> bool {
        self.eager
    }

    pub fn is_group(&self) -> bool {
        self.scope.as_str().starts_with(GROUP_PREFIX)
    }

    pub fn is_ignore(&self) -> bool {
        self.scope.as_str() == IGNORE_SCOPING
    }

    pub fn is_stable_by_design(&self) -> bool {
        self.stable_by_design
    }

    /// Whether a value of this scope may be embedded into a value of `parent`
    pub fn is_stable_in(&self, parent: &Scoping) -> bool {
        self.stable_by_design
            || parent.is_ignore()
            || self.is_ignore()
            || self.stable_in.iter().any(|s| s == &parent.scope)
            || self.group.as_ref().is_some_and(|g| g.is_stable_in(parent))
    }
}

impl PartialEq for Scoping {
    fn eq(&self, other: &Self) -> bool {
        self.scope == other.scope
    }
}

impl Eq for Scoping {}

impl fmt::Display for Scoping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ignore() {
            f.write_str("*")
        } else {
            write!(f, "{}", self.scope)
        }
    }
}
