//! Instance names

use std::fmt;
use std::sync::Arc;

const ANY: &str = "*";
const PATTERN_SUFFIX: char = '*';

/// The name part of an instance signature
///
/// A name is either `*` (any), empty (the default instance), an exact name, or
/// a prefix pattern ending in `*`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(Arc<str>);

impl Name {
    /// Create a name from its textual value
    pub fn named(value: impl AsRef<str>) -> Self {
        Self(Arc::from(value.as_ref()))
    }

    /// The name matching every other name
    pub fn any() -> Self {
        Self::named(ANY)
    }

    /// The name of unnamed instances
    pub fn default_name() -> Self {
        Self::named("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_any(&self) -> bool {
        &*self.0 == ANY
    }

    pub fn is_default(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_pattern(&self) -> bool {
        self.0.len() > 1 && self.0.ends_with(PATTERN_SUFFIX)
    }

    fn prefix(&self) -> &str {
        self.0.strip_suffix(PATTERN_SUFFIX).unwrap_or(&self.0)
    }

    /// Whether a value declared under this name satisfies a request for `requested`
    pub fn is_compatible_with(&self, requested: &Name) -> bool {
        if self.is_any() || requested.is_any() || self == requested {
            return true;
        }
        if self.is_pattern() {
            return requested.as_str().starts_with(self.prefix());
        }
        if requested.is_pattern() {
            return self.as_str().starts_with(requested.prefix());
        }
        false
    }

    /// Rank used to order bindings of the same raw type; higher is more specific
    pub fn specificity(&self) -> u8 {
        if self.is_any() {
            0
        } else if self.is_default() {
            1
        } else if self.is_pattern() {
            2
        } else {
            3
        }
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::default_name()
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self::named(value)
    }
}

impl From<String> for Name {
    fn from(value: String) -> Self {
        Self::named(value)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            f.write_str("default")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({:?})", &*self.0)
    }
}
