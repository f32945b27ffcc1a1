//! Structural type signatures
//!
//! Types are compared by value: a raw type is identified by its canonical
//! name, never by the identity of a runtime object.

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::constants::{OBJECT_TYPE, PERMANENCE_TYPE, SCOPE_TYPE};

static OBJECT: Lazy<RawType> = Lazy::new(|| RawType::new(OBJECT_TYPE));
static PERMANENCE: Lazy<RawType> = Lazy::new(|| RawType::new(PERMANENCE_TYPE));
static SCOPE: Lazy<RawType> = Lazy::new(|| RawType::new(SCOPE_TYPE));

struct RawTypeInner {
    name: String,
    supertypes: Vec<RawType>,
    depth: usize,
}

/// The stable identifier of a type without its type arguments
#[derive(Clone)]
pub struct RawType(Arc<RawTypeInner>);

impl RawType {
    /// Create a raw type without declared supertypes
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_supertypes(name, [])
    }

    /// Create a raw type that is assignable to each of `supertypes`
    pub fn with_supertypes(
        name: impl Into<String>,
        supertypes: impl IntoIterator<Item = RawType>,
    ) -> Self {
        let supertypes: Vec<RawType> = supertypes.into_iter().collect();
        let mut closure = HashSet::new();
        for supertype in &supertypes {
            supertype.collect_closure(&mut closure);
        }
        let depth = closure.len();
        Self(Arc::new(RawTypeInner {
            name: name.into(),
            supertypes,
            depth,
        }))
    }

    fn collect_closure<'a>(&'a self, closure: &mut HashSet<&'a str>) {
        if closure.insert(self.name()) {
            for supertype in &self.0.supertypes {
                supertype.collect_closure(closure);
            }
        }
    }

    /// The root type everything is assignable to
    pub fn object() -> Self {
        OBJECT.clone()
    }

    /// The type of scope permanence records
    pub fn permanence() -> Self {
        PERMANENCE.clone()
    }

    /// The type of scope implementations
    pub fn scope() -> Self {
        SCOPE.clone()
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn supertypes(&self) -> &[RawType] {
        &self.0.supertypes
    }

    /// Number of distinct transitive supertypes
    pub fn depth(&self) -> usize {
        self.0.depth
    }

    pub fn is_object(&self) -> bool {
        self.name() == OBJECT_TYPE
    }

    /// Reflexive, transitive assignability over declared supertypes
    pub fn is_assignable_to(&self, other: &RawType) -> bool {
        self == other
            || other.is_object()
            || self.0.supertypes.iter().any(|s| s.is_assignable_to(other))
    }
}

impl PartialEq for RawType {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for RawType {}

impl Hash for RawType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl fmt::Display for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for RawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawType({})", self.name())
    }
}

/// A raw type with its ordered type arguments
///
/// A type may be an upper bound (`? extends T`), in which case it stands for
/// every type assignable to it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Type {
    raw: RawType,
    params: Vec<Type>,
    upper_bound: bool,
}

impl Type {
    pub fn raw(raw: RawType) -> Self {
        Self {
            raw,
            params: Vec::new(),
            upper_bound: false,
        }
    }

    /// Shorthand for a raw type without supertypes
    pub fn named(name: impl Into<String>) -> Self {
        Self::raw(RawType::new(name))
    }

    /// The fully open query type `? extends *`
    pub fn wildcard() -> Self {
        Self::raw(RawType::object()).as_upper_bound()
    }

    pub fn permanence() -> Self {
        Self::raw(RawType::permanence())
    }

    pub fn scope() -> Self {
        Self::raw(RawType::scope())
    }

    pub fn parameterized(mut self, params: impl IntoIterator<Item = Type>) -> Self {
        self.params = params.into_iter().collect();
        self
    }

    pub fn as_upper_bound(mut self) -> Self {
        self.upper_bound = true;
        self
    }

    pub fn raw_type(&self) -> &RawType {
        &self.raw
    }

    pub fn parameters(&self) -> &[Type] {
        &self.params
    }

    pub fn is_upper_bound(&self) -> bool {
        self.upper_bound
    }

    pub fn is_wildcard(&self) -> bool {
        self.upper_bound && self.raw.is_object() && self.params.is_empty()
    }

    /// Whether any type argument, at any depth, is an upper bound
    pub fn is_parameterized_as_upper_bound(&self) -> bool {
        self.params
            .iter()
            .any(|p| p.upper_bound || p.is_parameterized_as_upper_bound())
    }

    /// Whether a value of this type can be used where `other` is requested
    ///
    /// Type arguments are only compared when both sides share the raw type;
    /// they are not mapped across declared supertypes.
    pub fn is_assignable_to(&self, other: &Type) -> bool {
        if !self.raw.is_assignable_to(&other.raw) {
            return false;
        }
        if other.params.is_empty() || self.raw != other.raw {
            return true;
        }
        self.params.len() == other.params.len()
            && self
                .params
                .iter()
                .zip(&other.params)
                .all(|(mine, theirs)| {
                    if theirs.upper_bound {
                        mine.is_assignable_to(theirs)
                    } else {
                        mine == theirs
                    }
                })
    }

    /// Rank used to order bindings of the same raw type; higher is more specific
    pub fn precision(&self) -> u8 {
        if self.upper_bound {
            0
        } else if self.is_parameterized_as_upper_bound() {
            1
        } else {
            2
        }
    }
}

impl From<RawType> for Type {
    fn from(raw: RawType) -> Self {
        Self::raw(raw)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_wildcard() {
            return f.write_str("?");
        }
        if self.upper_bound {
            f.write_str("? extends ")?;
        }
        f.write_str(self.raw.name())?;
        if !self.params.is_empty() {
            f.write_str("<")?;
            for (i, param) in self.params.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{param}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type({self})")
    }
}
