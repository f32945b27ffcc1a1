//! The dependency chain
//!
//! A [`Dependency`] describes what is wanted and the hierarchy of injections
//! taken to reach the request. Every step produces a new chain; a chain is
//! never mutated once constructed.

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::scoping::Scoping;
use crate::value_objects::{Instance, Locator, Name, Type};

/// One step of an injection hierarchy: `dependency` is injected into `target`
#[derive(Clone, Debug)]
pub struct Injection {
    dependency: Instance,
    target: Locator,
    scoping: Arc<Scoping>,
}

impl Injection {
    pub fn new(dependency: Instance, target: Locator, scoping: Arc<Scoping>) -> Self {
        Self {
            dependency,
            target,
            scoping,
        }
    }

    pub fn dependency(&self) -> &Instance {
        &self.dependency
    }

    pub fn target(&self) -> &Locator {
        &self.target
    }

    pub fn scoping(&self) -> &Arc<Scoping> {
        &self.scoping
    }

    /// Same (instance, target) pair; the scoping is not compared
    pub fn equal_to(&self, other: &Injection) -> bool {
        self.dependency == other.dependency && self.target == other.target
    }
}

impl fmt::Display for Injection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.dependency, self.target.instance, self.scoping
        )
    }
}

/// What is requested, and the path taken to request it
#[derive(Clone, Debug)]
pub struct Dependency {
    instance: Instance,
    hierarchy: Arc<[Injection]>,
}

impl Dependency {
    pub fn new(instance: Instance) -> Self {
        Self {
            instance,
            hierarchy: Arc::from(Vec::new()),
        }
    }

    /// A dependency on any instance of `ty`
    pub fn of_type(ty: impl Into<Type>) -> Self {
        Self::new(Instance::any_of(ty))
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn ty(&self) -> &Type {
        &self.instance.ty
    }

    pub fn name(&self) -> &Name {
        &self.instance.name
    }

    /// Same hierarchy, different requested instance
    pub fn instanced(&self, instance: Instance) -> Self {
        Self {
            instance,
            hierarchy: Arc::clone(&self.hierarchy),
        }
    }

    pub fn named(&self, name: impl Into<Name>) -> Self {
        self.instanced(Instance::new(name, self.instance.ty.clone()))
    }

    pub fn typed(&self, ty: impl Into<Type>) -> Self {
        self.instanced(Instance::new(self.instance.name.clone(), ty))
    }

    pub fn untargeted(&self) -> Self {
        Self::new(self.instance.clone())
    }

    pub fn is_untargeted(&self) -> bool {
        self.hierarchy.is_empty()
    }

    pub fn injection_depth(&self) -> usize {
        self.hierarchy.len()
    }

    /// The instance injected into at `level`; 0 is the innermost target
    pub fn target(&self, level: usize) -> Option<&Instance> {
        let len = self.hierarchy.len();
        if level >= len {
            return None;
        }
        Some(&self.hierarchy[len - 1 - level].target.instance)
    }

    pub fn injections(&self) -> &[Injection] {
        &self.hierarchy
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Injection> {
        self.hierarchy.iter()
    }

    /// Record that the requested instance is injected into `target`
    ///
    /// Fails with `DependencyCycle` if the same (instance, target) pair is
    /// already in the hierarchy, and with `MoreFrequentExpiry` if `scoping`
    /// is not stable in the scoping of any ancestor.
    pub fn injecting_into(&self, target: &Locator, scoping: Arc<Scoping>) -> Result<Dependency> {
        let injection = Injection::new(self.instance.clone(), target.clone(), scoping);
        self.ensure_no_cycle(&injection)?;
        self.ensure_not_more_frequent_expiry(&injection)?;
        let mut hierarchy = Vec::with_capacity(self.hierarchy.len() + 1);
        hierarchy.extend(self.hierarchy.iter().cloned());
        hierarchy.push(injection);
        Ok(Self {
            instance: self.instance.clone(),
            hierarchy: hierarchy.into(),
        })
    }

    fn ensure_no_cycle(&self, injection: &Injection) -> Result<()> {
        match self.hierarchy.iter().find(|parent| parent.equal_to(injection)) {
            Some(_) => Err(Error::dependency_cycle(self, &injection.target.instance)),
            None => Ok(()),
        }
    }

    fn ensure_not_more_frequent_expiry(&self, injection: &Injection) -> Result<()> {
        match self
            .hierarchy
            .iter()
            .find(|parent| !injection.scoping.is_stable_in(&parent.scoping))
        {
            Some(parent) => Err(Error::more_frequent_expiry(parent, injection)),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a Dependency {
    type Item = &'a Injection;
    type IntoIter = std::slice::Iter<'a, Injection>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.instance)?;
        if !self.hierarchy.is_empty() {
            f.write_str(" [")?;
            for (i, injection) in self.hierarchy.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{injection}")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
