//! Error handling types
//!
//! Build-time failures (`InconsistentDeclaration`) abort the whole registry
//! build. Resolution-time failures propagate unwrapped to the caller of the
//! top-level resolve, except scope-level failures which are normalized into
//! `SupplyFailed`.

use std::fmt::Display;

use thiserror::Error;

use crate::constants::SCOPE_ERROR_MESSAGE;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Weft
#[derive(Error, Debug)]
pub enum Error {
    /// A descriptor references a scope that has no permanence declaration
    #[error("Inconsistent declaration: {message}")]
    InconsistentDeclaration {
        /// Description of the inconsistency
        message: String,
    },

    /// The same (instance, target) pair occurred twice in one injection chain
    #[error("Dependency cycle: {target} is already being injected in {dependency}")]
    DependencyCycle {
        /// The dependency whose chain contains the cycle
        dependency: String,
        /// The repeated target
        target: String,
    },

    /// A shorter-lived value would be embedded into a longer-lived consumer
    #[error("More frequent expiry: {injection} cannot be injected into {parent}")]
    MoreFrequentExpiry {
        /// The ancestor injection that outlives the new one
        parent: String,
        /// The injection that would be embedded
        injection: String,
    },

    /// No declared resource matches the requested type and name
    #[error("No resource for dependency: {dependency}{}", list_candidates(.candidates))]
    NoResourceForDependency {
        /// The unresolvable dependency
        dependency: String,
        /// Descriptions of the resources known for the requested raw type
        candidates: Vec<String>,
    },

    /// The bootstrap resolver was asked for something other than a permanence
    #[error("During bootstrapping only scope permanence can be resolved: {dependency}{}", list_candidates(.available))]
    BootstrapOnly {
        /// The dependency requested during bootstrapping
        dependency: String,
        /// Scopes with a declared permanence
        available: Vec<String>,
    },

    /// An instance could not be produced right now
    #[error("{message}")]
    SupplyFailed {
        /// Description of the failure
        message: String,
        /// Optional underlying cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

fn list_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!("\n  candidates:\n    {}", candidates.join("\n    "))
    }
}

// Build-time error creation methods
impl Error {
    /// Create an inconsistent declaration error
    pub fn inconsistent_declaration<S: Into<String>>(message: S) -> Self {
        Self::InconsistentDeclaration {
            message: message.into(),
        }
    }
}

// Resolution error creation methods
impl Error {
    /// Create a dependency cycle error
    pub fn dependency_cycle(dependency: &impl Display, target: &impl Display) -> Self {
        Self::DependencyCycle {
            dependency: dependency.to_string(),
            target: target.to_string(),
        }
    }

    /// Create a more frequent expiry error
    pub fn more_frequent_expiry(parent: &impl Display, injection: &impl Display) -> Self {
        Self::MoreFrequentExpiry {
            parent: parent.to_string(),
            injection: injection.to_string(),
        }
    }

    /// Create a no resource error carrying the known candidates
    pub fn no_resource_for(dependency: &impl Display, candidates: Vec<String>) -> Self {
        Self::NoResourceForDependency {
            dependency: dependency.to_string(),
            candidates,
        }
    }

    /// Create a bootstrap-only error
    pub fn bootstrap_only(dependency: &impl Display, available: Vec<String>) -> Self {
        Self::BootstrapOnly {
            dependency: dependency.to_string(),
            available,
        }
    }
}

// Supply error creation methods
impl Error {
    /// Create a supply failure
    pub fn supply_failed<S: Into<String>>(message: S) -> Self {
        Self::SupplyFailed {
            message: message.into(),
            source: None,
        }
    }

    /// Create a supply failure with source
    pub fn supply_failed_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::SupplyFailed {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The failure of a scope that has no live cache context
    pub fn scope_error() -> Self {
        Self::supply_failed(SCOPE_ERROR_MESSAGE)
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Classification
impl Error {
    /// Whether this error is raised while resolving rather than building
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::DependencyCycle { .. }
                | Self::MoreFrequentExpiry { .. }
                | Self::NoResourceForDependency { .. }
                | Self::SupplyFailed { .. }
        )
    }
}
