#![deny(missing_docs)]

//! Chainable value, type, and range certification over dynamic values.
//!
//! [`Certifier`] binds a fixed list of subjects and exposes predicates that
//! return the instance on success and a [`CertError`] on failure. [`Checker`]
//! runs the same predicates but reports certification failures as `false`,
//! while still propagating argument errors from malformed calls.
//!
//! ```
//! use cert_is::{cert, check, Class};
//!
//! # fn main() -> Result<(), cert_is::CertError> {
//! cert!("foo").is(["foo", "bar"])?;
//! cert!(12, 22, 32).is_gt(2.0)?;
//!
//! let object = Class::base("Object");
//! let map = object.derive("Map");
//! cert!(map.construct()).is_type([&map])?;
//! cert!(map.construct()).is_type([&object])?;
//!
//! assert!(!check!("foo").is(["qux"])?);
//! # Ok(())
//! # }
//! ```

mod certifier;
mod checker;
pub mod rules;

pub use cert_core::{
    Bounds, CertError, Class, ErrorReport, Instance, PrimitiveKind, TypeSpec, Value,
};
pub use certifier::Certifier;
pub use checker::Checker;

/// Constructs a [`Certifier`] over an already-built subject list. The
/// [`cert!`] macro is the variadic front end.
pub fn cert_all(values: Vec<Value>) -> Certifier {
    Certifier::new(values)
}

/// Constructs a [`Checker`] over an already-built subject list. The
/// [`check!`] macro is the variadic front end.
pub fn check_all(values: Vec<Value>) -> Checker {
    Checker::new(values)
}

/// Builds a [`Certifier`] from any number of subjects convertible to
/// [`Value`].
#[macro_export]
macro_rules! cert {
    ($($value:expr),* $(,)?) => {
        $crate::cert_all(::std::vec![$($crate::Value::from($value)),*])
    };
}

/// Builds a [`Checker`] from any number of subjects convertible to
/// [`Value`].
#[macro_export]
macro_rules! check {
    ($($value:expr),* $(,)?) => {
        $crate::check_all(::std::vec![$($crate::Value::from($value)),*])
    };
}
