//! The resource set
//!
//! Turns descriptors into indexed, grouped and sorted [`Resource`]s. Building
//! happens in two phases: scope permanences first, through the bootstrap
//! resolver, then every other resource against the completed permanence map.

use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use tracing::{debug, info};
use weft_domain::constants::CONTAINER;
use weft_domain::ports::{DescriptorKind, ResourceDescriptor, Resolver};
use weft_domain::{Error, Name, RawType, Result, Scoping, Type};

use super::bootstrap::BootstrapResolver;
use super::generators::{ConstantGenerator, ScopeLookup, generator_for};
use super::resource::Resource;

const GENERIC_GROUP: &str = "? extends *";

/// Indexed, read-only set of resources
pub struct Resources {
    resource_count: usize,
    sorted: Vec<Arc<Resource>>,
    groups: Vec<(RawType, Range<usize>)>,
    by_raw_type: HashMap<RawType, usize>,
    generic: Vec<Arc<Resource>>,
}

impl Resources {
    /// Build the resource set
    ///
    /// `descriptors` are expected most specific first within each raw type.
    /// A scope that is used but has no permanence aborts the build.
    pub fn new(descriptors: Vec<ResourceDescriptor>, scopes: ScopeLookup) -> Result<Self> {
        let resource_count = descriptors.len();
        let mut slots: Vec<Option<Resource>> = Vec::with_capacity(resource_count);
        slots.resize_with(resource_count, || None);

        let permanences = {
            let bootstrap = BootstrapResolver::new(
                descriptors
                    .iter()
                    .filter(|d| d.kind == DescriptorKind::Permanence)
                    .collect(),
            );
            let permanences = bootstrap.complete()?;
            let container = permanences
                .get(&Name::named(CONTAINER))
                .cloned()
                .unwrap_or_else(Scoping::singleton);
            for (serial_id, descriptor) in descriptors.iter().enumerate() {
                if descriptor.kind != DescriptorKind::Permanence {
                    continue;
                }
                let value = bootstrap.permanence_value(&descriptor.signature.instance.name)?;
                slots[serial_id] = Some(Resource::new(
                    serial_id,
                    descriptor.signature.clone(),
                    Arc::clone(&container),
                    descriptor.source.clone(),
                    descriptor.verifier.clone(),
                    Arc::new(ConstantGenerator(value)),
                ));
            }
            permanences
        };
        debug!(count = permanences.len(), "Scope permanences bootstrapped");

        for (serial_id, descriptor) in descriptors.iter().enumerate() {
            if slots[serial_id].is_some() {
                continue;
            }
            let permanence = permanences.get(&descriptor.scope).ok_or_else(|| {
                Error::inconsistent_declaration(format!(
                    "Scope `{}` is used but not defined for: {} from {}",
                    descriptor.scope, descriptor.signature, descriptor.source
                ))
            })?;
            let generator =
                generator_for(descriptor, serial_id, resource_count, permanence, &scopes);
            slots[serial_id] = Some(Resource::new(
                serial_id,
                descriptor.signature.clone(),
                Arc::clone(permanence),
                descriptor.source.clone(),
                descriptor.verifier.clone(),
                generator,
            ));
        }

        let mut sorted: Vec<Arc<Resource>> = slots.into_iter().flatten().map(Arc::new).collect();
        sorted.sort_by(|a, b| a.compare(b));

        let groups = group_by_raw_type(&sorted);
        let by_raw_type = groups
            .iter()
            .enumerate()
            .map(|(index, (raw, _))| (raw.clone(), index))
            .collect();

        let mut generic: Vec<Arc<Resource>> = sorted
            .iter()
            .filter(|r| r.ty().is_upper_bound() || r.ty().is_parameterized_as_upper_bound())
            .cloned()
            .collect();
        generic.sort_by(|a, b| {
            b.signature()
                .specificity()
                .cmp(&a.signature().specificity())
                .then_with(|| a.serial_id().cmp(&b.serial_id()))
        });

        info!(
            resources = resource_count,
            types = groups.len(),
            generic = generic.len(),
            "Resources built"
        );
        Ok(Self {
            resource_count,
            sorted,
            groups,
            by_raw_type,
            generic,
        })
    }

    /// Resources for the raw type of `ty`, most specific first
    ///
    /// The fully open wildcard yields the generic resources instead. Unknown
    /// types yield an empty slice.
    pub fn for_type(&self, ty: &Type) -> &[Arc<Resource>] {
        if ty.is_wildcard() {
            return &self.generic;
        }
        match self.by_raw_type.get(ty.raw_type()) {
            Some(&index) => &self.sorted[self.groups[index].1.clone()],
            None => &[],
        }
    }

    /// Resources of every raw type assignable to the raw type of `ty`
    pub fn for_upper_bound(&self, ty: &Type) -> Vec<&Arc<Resource>> {
        self.groups
            .iter()
            .filter(|(raw, _)| raw.is_assignable_to(ty.raw_type()))
            .flat_map(|(_, range)| &self.sorted[range.clone()])
            .collect()
    }

    /// Every group, in sorted order
    pub fn groups(&self) -> impl Iterator<Item = (&RawType, &[Arc<Resource>])> {
        self.groups
            .iter()
            .map(|(raw, range)| (raw, &self.sorted[range.clone()]))
    }

    pub fn generic(&self) -> &[Arc<Resource>] {
        &self.generic
    }

    /// Construct every resource whose permanence is eager
    pub fn init_eager(&self, context: &dyn Resolver) -> Result<()> {
        for resource in &self.sorted {
            resource.init(context)?;
        }
        Ok(())
    }

    /// Run every verifier against the complete context
    pub fn verify_in(&self, context: &dyn Resolver) -> Result<()> {
        for resource in &self.sorted {
            resource.verify_in(context)?;
        }
        Ok(())
    }

    /// Number of descriptors the set was built from
    pub fn resource_count(&self) -> usize {
        self.resource_count
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

fn group_by_raw_type(sorted: &[Arc<Resource>]) -> Vec<(RawType, Range<usize>)> {
    let mut groups: Vec<(RawType, Range<usize>)> = Vec::new();
    for (index, resource) in sorted.iter().enumerate() {
        let raw = resource.ty().raw_type();
        if let Some((_, range)) = groups.last_mut().filter(|(last, _)| last == raw) {
            range.end = index + 1;
        } else {
            groups.push((raw.clone(), index..index + 1));
        }
    }
    groups
}

fn write_group(
    f: &mut fmt::Formatter<'_>,
    group: &str,
    resources: &[Arc<Resource>],
) -> fmt::Result {
    writeln!(f, "{group}")?;
    for resource in resources {
        writeln!(f, "\t{}", resource.describe())?;
    }
    Ok(())
}

impl fmt::Display for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (raw, resources) in self.groups() {
            write_group(f, raw.name(), resources)?;
        }
        if !self.generic.is_empty() {
            write_group(f, GENERIC_GROUP, &self.generic)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Resources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resources")
            .field("resource_count", &self.resource_count)
            .field("groups", &self.groups.len())
            .field("generic", &self.generic.len())
            .finish()
    }
}
