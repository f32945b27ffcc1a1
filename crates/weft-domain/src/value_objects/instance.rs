//! Instance, target and locator signatures

use std::fmt;

use super::{Name, Type};
use crate::dependency::Dependency;

/// A named, typed instance
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Instance {
    pub name: Name,
    pub ty: Type,
}

impl Instance {
    pub fn new(name: impl Into<Name>, ty: impl Into<Type>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Any instance of the given type
    pub fn any_of(ty: impl Into<Type>) -> Self {
        Self::new(Name::any(), ty)
    }

    /// The unnamed instance of the given type
    pub fn default_of(ty: impl Into<Type>) -> Self {
        Self::new(Name::default_name(), ty)
    }

    /// Any instance of any type
    pub fn any() -> Self {
        Self::any_of(Type::wildcard())
    }

    pub fn is_any(&self) -> bool {
        self.name.is_any() && self.ty.is_wildcard()
    }

    /// Whether the `actual` instance is covered by this one
    pub fn covers(&self, actual: &Instance) -> bool {
        self.name.is_compatible_with(&actual.name) && actual.ty.is_assignable_to(&self.ty)
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.ty)
    }
}

/// Where a binding applies: the instance injected into and, optionally,
/// instances further up the injection hierarchy
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Target {
    pub instance: Instance,
    pub parents: Vec<Instance>,
}

impl Target {
    /// A target applicable everywhere
    pub fn any() -> Self {
        Self {
            instance: Instance::any(),
            parents: Vec::new(),
        }
    }

    pub fn injecting_into(mut self, instance: Instance) -> Self {
        self.instance = instance;
        self
    }

    pub fn within(mut self, parent: Instance) -> Self {
        self.parents.push(parent);
        self
    }

    pub fn is_any(&self) -> bool {
        self.instance.is_any() && self.parents.is_empty()
    }

    /// Whether a binding with this target may serve `dependency`
    ///
    /// The instance must cover the direct injection target; every parent must
    /// cover some injection further up, in any order.
    pub fn is_applicable_for(&self, dependency: &Dependency) -> bool {
        if self.is_any() {
            return true;
        }
        if !self.instance.is_any() {
            match dependency.target(0) {
                Some(actual) if self.instance.covers(actual) => {}
                _ => return false,
            }
        }
        self.parents.iter().all(|parent| {
            (1..dependency.injection_depth())
                .filter_map(|level| dependency.target(level))
                .any(|actual| parent.covers(actual))
        })
    }

    /// Rank used to order bindings of the same raw type; higher is more specific
    pub fn specificity(&self) -> (bool, usize) {
        (!self.instance.is_any(), self.parents.len())
    }
}

impl Default for Target {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_any() {
            return f.write_str("any");
        }
        write!(f, "[{}", self.instance)?;
        for parent in &self.parents {
            write!(f, " within {parent}")?;
        }
        f.write_str("]")
    }
}

/// The signature of a resource: what it provides and where
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Locator {
    pub instance: Instance,
    pub target: Target,
}

impl Locator {
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            target: Target::any(),
        }
    }

    pub fn targeting(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub fn ty(&self) -> &Type {
        &self.instance.ty
    }

    /// Whether this signature satisfies `dependency`
    pub fn is_matching(&self, dependency: &Dependency) -> bool {
        self.instance.ty.is_assignable_to(dependency.ty())
            && self.instance.name.is_compatible_with(dependency.name())
            && self.target.is_applicable_for(dependency)
    }

    /// Lexicographic specificity: type precision, then name, then target
    pub fn specificity(&self) -> (u8, u8, (bool, usize)) {
        (
            self.instance.ty.precision(),
            self.instance.name.specificity(),
            self.target.specificity(),
        )
    }

    /// An untargeted dependency on exactly this instance
    pub fn to_dependency(&self) -> Dependency {
        Dependency::new(self.instance.clone())
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.instance, self.target)
    }
}
