//! Bootstrap resolver
//!
//! Scope permanences are resources themselves and may refer to each other by
//! name (a namespaced scope refers to its group). They are resolved before any
//! other resource exists, by a resolver that knows nothing but permanences.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;
use weft_domain::ports::{ResourceDescriptor, Resolver, Supply, Value};
use weft_domain::{Dependency, Error, Name, RawType, Result, Scoping};

pub(crate) struct BootstrapResolver<'a> {
    declared: Vec<&'a ResourceDescriptor>,
    memo: RefCell<HashMap<Name, Value>>,
    in_progress: RefCell<HashSet<Name>>,
}

impl<'a> BootstrapResolver<'a> {
    pub(crate) fn new(declared: Vec<&'a ResourceDescriptor>) -> Self {
        Self {
            declared,
            memo: RefCell::new(HashMap::new()),
            in_progress: RefCell::new(HashSet::new()),
        }
    }

    fn available(&self) -> Vec<String> {
        self.declared
            .iter()
            .map(|d| d.signature.instance.name.to_string())
            .collect()
    }

    /// Permanence value of `scope`, computed on first request
    pub(crate) fn permanence_value(&self, scope: &Name) -> Result<Value> {
        if let Some(value) = self.memo.borrow().get(scope) {
            return Ok(Arc::clone(value));
        }
        let Some(descriptor) = self
            .declared
            .iter()
            .find(|d| &d.signature.instance.name == scope)
        else {
            return Err(Error::no_resource_for(scope, self.available()));
        };
        if !self.in_progress.borrow_mut().insert(scope.clone()) {
            return Err(Error::dependency_cycle(&descriptor.signature, scope));
        }
        let dependency = descriptor.signature.to_dependency();
        let value = match &descriptor.supply {
            Supply::Supplier(supplier) => supplier(&dependency, self),
            Supply::Generator(generator) => generator.generate(&dependency, self),
        };
        self.in_progress.borrow_mut().remove(scope);
        let value = value?;
        debug!(scope = %scope, "Bootstrapped scope permanence");
        self.memo
            .borrow_mut()
            .insert(scope.clone(), Arc::clone(&value));
        Ok(value)
    }

    /// Resolve every declared permanence
    pub(crate) fn complete(&self) -> Result<HashMap<Name, Arc<Scoping>>> {
        let mut permanences = HashMap::with_capacity(self.declared.len());
        for descriptor in &self.declared {
            let scope = &descriptor.signature.instance.name;
            if permanences.contains_key(scope) {
                continue;
            }
            let scoping = self
                .permanence_value(scope)?
                .downcast::<Scoping>()
                .map_err(|_| {
                    Error::inconsistent_declaration(format!(
                        "Permanence of scope `{scope}` is not a scoping: {descriptor:?}"
                    ))
                })?;
            permanences.insert(scope.clone(), scoping);
        }
        Ok(permanences)
    }
}

impl Resolver for BootstrapResolver<'_> {
    fn resolve(&self, dependency: &Dependency) -> Result<Value> {
        if dependency.ty().raw_type() != &RawType::permanence() {
            return Err(Error::bootstrap_only(dependency, self.available()));
        }
        self.permanence_value(dependency.name())
    }
}
