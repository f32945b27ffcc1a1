//! Resources
//!
//! A [`Resource`] is the build-time wrapper of one descriptor. It carries a
//! dense serial id used as index into per-scope caches.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use weft_domain::ports::{Generator, Resolver, Value, Verifier};
use weft_domain::{Dependency, Locator, Result, Scoping, Source, Type};

pub struct Resource {
    serial_id: usize,
    signature: Locator,
    permanence: Arc<Scoping>,
    source: Source,
    verifier: Option<Verifier>,
    generator: Arc<dyn Generator>,
}

impl Resource {
    pub(crate) fn new(
        serial_id: usize,
        signature: Locator,
        permanence: Arc<Scoping>,
        source: Source,
        verifier: Option<Verifier>,
        generator: Arc<dyn Generator>,
    ) -> Self {
        Self {
            serial_id,
            signature,
            permanence,
            source,
            verifier,
            generator,
        }
    }

    pub fn serial_id(&self) -> usize {
        self.serial_id
    }

    pub fn signature(&self) -> &Locator {
        &self.signature
    }

    pub fn ty(&self) -> &Type {
        self.signature.ty()
    }

    pub fn permanence(&self) -> &Arc<Scoping> {
        &self.permanence
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn is_matching(&self, dependency: &Dependency) -> bool {
        self.signature.is_matching(dependency)
    }

    /// Produce the value of this resource for `dependency`
    pub fn generate(&self, dependency: &Dependency, context: &dyn Resolver) -> Result<Value> {
        self.generator.generate(dependency, context)
    }

    /// Construct the value now if the permanence asks for eager creation
    pub fn init(&self, context: &dyn Resolver) -> Result<()> {
        if self.permanence.is_eager() {
            self.generate(&self.signature.to_dependency(), context)?;
        }
        Ok(())
    }

    pub fn verify_in(&self, context: &dyn Resolver) -> Result<()> {
        match &self.verifier {
            Some(verifier) => verifier(&self.signature, context),
            None => Ok(()),
        }
    }

    /// One-line description: id, type, name, target, permanence, source
    pub fn describe(&self) -> String {
        format!(
            "#{} {} {} {} {} {}",
            self.serial_id,
            self.signature.ty(),
            self.signature.instance.name,
            self.signature.target,
            self.permanence,
            self.source
        )
    }

    /// Total order used to group and rank resources
    ///
    /// Different raw types: subtypes before supertypes, then by name. Same raw
    /// type: more specific signature first, then declaration order.
    pub fn compare(&self, other: &Resource) -> Ordering {
        let (mine, theirs) = (self.ty().raw_type(), other.ty().raw_type());
        if mine != theirs {
            return theirs
                .depth()
                .cmp(&mine.depth())
                .then_with(|| mine.name().cmp(theirs.name()));
        }
        other
            .signature
            .specificity()
            .cmp(&self.signature.specificity())
            .then_with(|| self.serial_id.cmp(&other.serial_id))
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("serial_id", &self.serial_id)
            .field("signature", &self.signature)
            .field("permanence", &self.permanence)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
