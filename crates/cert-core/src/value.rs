//! Dynamic subject values and their primitive kinds.

use std::fmt::{self, Display};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::class::Instance;

/// The fixed enumeration of primitive kinds a [`Value`] can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// A true/false value.
    Boolean,
    /// The absent value.
    Undefined,
    /// An IEEE 754 double precision number.
    Number,
    /// A text value compared by content.
    String,
    /// A unique identity token.
    Symbol,
    /// A class instance compared by reference identity.
    Object,
    /// A callable compared by reference identity.
    Function,
}

impl PrimitiveKind {
    /// All seven kinds in canonical order.
    pub const ALL: [PrimitiveKind; 7] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Undefined,
        PrimitiveKind::Number,
        PrimitiveKind::String,
        PrimitiveKind::Symbol,
        PrimitiveKind::Object,
        PrimitiveKind::Function,
    ];

    /// Returns the canonical tag name for the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Undefined => "undefined",
            PrimitiveKind::Number => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Symbol => "symbol",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Function => "function",
        }
    }

    /// Resolves a tag name into a kind, or `None` if the tag is not one of
    /// the seven recognised names.
    pub fn parse(tag: &str) -> Option<PrimitiveKind> {
        PrimitiveKind::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamic value submitted for certification.
///
/// Equality follows strict-equality semantics: values of different kinds are
/// never equal, numbers compare by IEEE `==` (so `NaN` is unequal to itself),
/// strings compare by content, and symbols, objects, and functions compare by
/// reference identity. Cloning preserves identity.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value.
    Undefined,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A text value.
    Str(String),
    /// A unique identity token carrying a description.
    Symbol(Arc<str>),
    /// An instance of a nominal [`Class`](crate::class::Class).
    Object(Instance),
    /// A named callable.
    Function(Arc<str>),
}

impl Value {
    /// Mints a fresh symbol with the given description. Two symbols are equal
    /// only if one was cloned from the other.
    pub fn symbol(description: impl Into<String>) -> Value {
        Value::Symbol(Arc::from(description.into()))
    }

    /// Mints a fresh function value with the given name. As with symbols,
    /// equality is identity.
    pub fn function(name: impl Into<String>) -> Value {
        Value::Function(Arc::from(name.into()))
    }

    /// Returns the primitive kind the value reports.
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Value::Undefined => PrimitiveKind::Undefined,
            Value::Bool(_) => PrimitiveKind::Boolean,
            Value::Number(_) => PrimitiveKind::Number,
            Value::Str(_) => PrimitiveKind::String,
            Value::Symbol(_) => PrimitiveKind::Symbol,
            Value::Object(_) => PrimitiveKind::Object,
            Value::Function(_) => PrimitiveKind::Function,
        }
    }

    /// Returns the numeric payload if the value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => Arc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Symbol(desc) => write!(f, "Symbol({desc})"),
            Value::Object(instance) => write!(f, "[object {}]", instance.class().name()),
            Value::Function(name) => write!(f, "[function {name}]"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Value {
        Value::Number(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Value {
        Value::Number(value.into())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Value {
        Value::Number(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Value {
        Value::Undefined
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Value {
        Value::Object(instance)
    }
}
