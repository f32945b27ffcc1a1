//! Container bootstrap
//!
//! Declares the standard scopes and assembles a ready-to-use container.
//!
//! ```text
//! WeftConfig.container
//!        │
//!        ▼
//! standard_descriptors()  ── container + reference permanences
//!        │                ── permanence + scope per enabled registry entry
//!        ▼
//! Container::build(standard ++ application descriptors)
//!        │
//!        ├── init_eager()   (eager_init)
//!        └── verify()       (verify)
//! ```

use tracing::{debug, info};
use weft_application::Container;
use weft_application::ports::registry::SCOPE_PROVIDERS;
use weft_domain::constants::{CONTAINER, REFERENCE};
use weft_domain::error::Result;
use weft_domain::{ResourceDescriptor, Scoping};

use crate::config::ContainerConfig;

/// Permanence of the `container` scope
pub fn container_permanence(eager: bool) -> Scoping {
    let scoping = Scoping::new(CONTAINER).group(Scoping::singleton());
    if eager { scoping.eager() } else { scoping }
}

/// Permanence of the `reference` scope
pub fn reference_permanence() -> Scoping {
    Scoping::new(REFERENCE).group(Scoping::ignore())
}

/// Descriptors of the built-in scopes and every enabled registered scope
pub fn standard_descriptors(config: &ContainerConfig) -> Vec<ResourceDescriptor> {
    let mut descriptors = vec![
        ResourceDescriptor::permanence(container_permanence(config.eager_init)),
        ResourceDescriptor::permanence(reference_permanence()),
    ];
    for entry in SCOPE_PROVIDERS
        .iter()
        .filter(|entry| config.is_enabled(entry.name))
    {
        debug!(scope = entry.name, "Declaring scope");
        descriptors.extend(entry.descriptors());
    }
    descriptors
}

/// Build a container from the standard scopes followed by `descriptors`
///
/// Permanence declarations are looked up first-declared-wins, so application
/// descriptors cannot redeclare a standard scope.
pub fn bootstrap_container(
    config: &ContainerConfig,
    descriptors: Vec<ResourceDescriptor>,
) -> Result<Container> {
    let mut all = standard_descriptors(config);
    all.extend(descriptors);
    let container = Container::build(all)?;
    if config.eager_init {
        container.init_eager()?;
    }
    if config.verify {
        container.verify()?;
    }
    info!(
        resources = container.resources().len(),
        eager = config.eager_init,
        verified = config.verify,
        "Container ready"
    );
    Ok(container)
}
