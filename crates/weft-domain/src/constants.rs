//! Domain constants
//!
//! Names of the standard scopes and the fixed messages that form part of the
//! resolution contract.

// ============================================================================
// SCOPE NAMES
// ============================================================================

/// Process-wide singletons; values exist for the life-span of the container
pub const CONTAINER: &str = "container";

/// Forward references that bypass the lifetime check
pub const REFERENCE: &str = "reference";

/// One value per resource for the life-span of the application
pub const APPLICATION: &str = "application";

/// One value per full dependency hierarchy
pub const DEPENDENCY: &str = "dependency";

/// One value per requested type
pub const DEPENDENCY_TYPE: &str = "dependencyType";

/// One value per requested instance (name and type)
pub const DEPENDENCY_INSTANCE: &str = "dependencyInstance";

/// One value per target hierarchy
pub const TARGET_INSTANCE: &str = "targetInstance";

/// One value per resource and thread
pub const THREAD: &str = "thread";

/// One value per resource and allocated worker context
pub const WORKER: &str = "worker";

/// A fresh value for every injection
pub const INJECTION: &str = "injection";

// ============================================================================
// SCOPING NAMES
// ============================================================================

/// Scoping that accepts and is accepted by every other scoping
pub const IGNORE_SCOPING: &str = "@ignore";

/// Scoping of values that never change once created
pub const SINGLETON_SCOPING: &str = "@singleton";

/// Prefix marking a scoping group
pub const GROUP_PREFIX: char = '@';

/// Separator between a scope group and a namespaced scope
pub const GROUP_SEPARATOR: char = ':';

// ============================================================================
// MESSAGES
// ============================================================================

/// Message of the failure raised by a scope without a live cache context
pub const SCOPE_ERROR_MESSAGE: &str = "Scope error";

// ============================================================================
// BUILT-IN RAW TYPES
// ============================================================================

/// Canonical name of the root type every raw type is assignable to
pub const OBJECT_TYPE: &str = "object";

/// Canonical name of the scope permanence record type
pub const PERMANENCE_TYPE: &str = "weft::Scoping";

/// Canonical name of the scope implementation type
pub const SCOPE_TYPE: &str = "weft::Scope";
