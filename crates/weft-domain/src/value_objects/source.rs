//! Provenance of declarations

use std::fmt;

/// Where a descriptor was declared
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Source {
    pub ident: String,
    pub ordinal: u32,
}

impl Source {
    pub fn new(ident: impl Into<String>) -> Self {
        Self {
            ident: ident.into(),
            ordinal: 0,
        }
    }

    pub fn with_ordinal(mut self, ordinal: u32) -> Self {
        self.ordinal = ordinal;
        self
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.ident, self.ordinal)
    }
}
