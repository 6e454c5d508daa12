//! Type descriptors: the closed union of primitive tags and nominal classes.

use std::fmt::{self, Display};

use crate::class::Class;
use crate::value::{PrimitiveKind, Value};

/// A type descriptor accepted by the type rule evaluator.
///
/// `Kind` and `Class` descriptors are valid by construction. `Tag` carries a
/// raw tag name resolved at evaluation time; a name outside the seven
/// recognised kinds is a caller error surfaced as a type argument error.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeSpec {
    /// A resolved primitive kind.
    Kind(PrimitiveKind),
    /// A raw primitive tag name, e.g. `"number"`.
    Tag(String),
    /// A nominal class; values match when their class chain contains it.
    Class(Class),
}

impl TypeSpec {
    /// Tests the value against the descriptor.
    ///
    /// Returns `None` when the descriptor is a tag that does not name one of
    /// the seven primitive kinds, leaving the offence report to the caller
    /// who knows the descriptor's position.
    pub fn matches(&self, value: &Value) -> Option<bool> {
        match self {
            TypeSpec::Kind(kind) => Some(value.kind() == *kind),
            TypeSpec::Tag(tag) => PrimitiveKind::parse(tag).map(|kind| value.kind() == kind),
            TypeSpec::Class(class) => Some(value.instance_of(class)),
        }
    }
}

impl Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSpec::Kind(kind) => write!(f, "{kind}"),
            TypeSpec::Tag(tag) => f.write_str(tag),
            TypeSpec::Class(class) => write!(f, "{class}"),
        }
    }
}

impl From<PrimitiveKind> for TypeSpec {
    fn from(kind: PrimitiveKind) -> TypeSpec {
        TypeSpec::Kind(kind)
    }
}

impl From<&str> for TypeSpec {
    fn from(tag: &str) -> TypeSpec {
        TypeSpec::Tag(tag.to_owned())
    }
}

impl From<String> for TypeSpec {
    fn from(tag: String) -> TypeSpec {
        TypeSpec::Tag(tag)
    }
}

impl From<Class> for TypeSpec {
    fn from(class: Class) -> TypeSpec {
        TypeSpec::Class(class)
    }
}

impl From<&Class> for TypeSpec {
    fn from(class: &Class) -> TypeSpec {
        TypeSpec::Class(class.clone())
    }
}
