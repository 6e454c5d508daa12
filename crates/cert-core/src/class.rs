//! Nominal classes and their instances.
//!
//! Classes are identity handles with an optional parent, forming the chain
//! that `instance_of` walks. Two classes are equal only if they are the same
//! handle; two instances are equal only if they are the same handle.

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::value::Value;

#[derive(Debug)]
struct ClassInner {
    name: String,
    parent: Option<Class>,
}

/// A nominal type handle usable as a type descriptor.
#[derive(Debug, Clone)]
pub struct Class {
    inner: Arc<ClassInner>,
}

impl Class {
    /// Creates a root class with no parent.
    pub fn base(name: impl Into<String>) -> Class {
        Class {
            inner: Arc::new(ClassInner {
                name: name.into(),
                parent: None,
            }),
        }
    }

    /// Creates a subclass of this class.
    pub fn derive(&self, name: impl Into<String>) -> Class {
        Class {
            inner: Arc::new(ClassInner {
                name: name.into(),
                parent: Some(self.clone()),
            }),
        }
    }

    /// Returns the class name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the parent class, if any.
    pub fn parent(&self) -> Option<&Class> {
        self.inner.parent.as_ref()
    }

    /// Constructs a fresh instance of this class.
    pub fn construct(&self) -> Value {
        Value::Object(Instance {
            inner: Arc::new(InstanceInner {
                class: self.clone(),
            }),
        })
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Class {}

impl Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug)]
struct InstanceInner {
    class: Class,
}

/// An object value produced by [`Class::construct`].
#[derive(Debug, Clone)]
pub struct Instance {
    inner: Arc<InstanceInner>,
}

impl Instance {
    /// Returns the class the instance was constructed from.
    pub fn class(&self) -> &Class {
        &self.inner.class
    }

    /// Tests whether the instance's class chain contains `class`.
    pub fn instance_of(&self, class: &Class) -> bool {
        let mut current = Some(self.class());
        while let Some(candidate) = current {
            if candidate == class {
                return true;
            }
            current = candidate.parent();
        }
        false
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Instance {}

impl Value {
    /// Tests whether the value is an instance of `class`, walking the class
    /// parent chain. Non-object values are never instances.
    pub fn instance_of(&self, class: &Class) -> bool {
        match self {
            Value::Object(instance) => instance.instance_of(class),
            _ => false,
        }
    }
}
