#![deny(missing_docs)]

//! Data model and error taxonomy for the cert-is certification library.
//!
//! This crate defines the dynamic [`Value`] model subjects are drawn from,
//! the nominal [`Class`] hierarchy and [`TypeSpec`] descriptors used by type
//! checks, the [`Bounds`] interval used by range checks, and the closed
//! [`CertError`] taxonomy shared by every evaluator.

pub mod bounds;
pub mod class;
pub mod descriptor;
pub mod errors;
pub mod value;

pub use bounds::Bounds;
pub use class::{Class, Instance};
pub use descriptor::TypeSpec;
pub use errors::{CertError, ErrorReport};
pub use value::{PrimitiveKind, Value};
