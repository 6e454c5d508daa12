//! The boolean-mode wrapper over [`Certifier`].

use cert_core::{CertError, TypeSpec, Value};

use crate::certifier::Certifier;

/// Runs the same predicates as [`Certifier`] but reports assertion failures
/// as `Ok(false)` instead of an error.
///
/// Only the assertion family is intercepted: a malformed call (an argument
/// error) always propagates, checker or not.
///
/// ```
/// # use cert_is::check;
/// # fn main() -> Result<(), cert_is::CertError> {
/// assert!(check!("foo").is(["foo"])?);
/// assert!(!check!("foo").is(["bar"])?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Checker {
    inner: Certifier,
}

impl Checker {
    /// Creates a checker over the given subjects.
    pub fn new(subjects: Vec<Value>) -> Checker {
        Checker {
            inner: Certifier::new(subjects),
        }
    }

    /// No-op passthrough kept for surface parity with [`Certifier`]: boolean
    /// results carry no message text.
    pub fn message(&self, _text: &str) -> &Self {
        self
    }

    /// Checks that every subject is strictly equal to some element of
    /// `valid`.
    pub fn is<I>(&self, valid: I) -> Result<bool, CertError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        intercept(self.inner.is(valid))
    }

    /// Checks that no subject is strictly equal to any element of `invalid`.
    pub fn is_not<I>(&self, invalid: I) -> Result<bool, CertError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        intercept(self.inner.is_not(invalid))
    }

    /// Checks that every subject matches at least one descriptor in
    /// `valid_types`.
    pub fn is_type<I>(&self, valid_types: I) -> Result<bool, CertError>
    where
        I: IntoIterator,
        I::Item: Into<TypeSpec>,
    {
        intercept(self.inner.is_type(valid_types))
    }

    /// Checks that no subject matches any descriptor in `invalid_types`.
    pub fn is_not_type<I>(&self, invalid_types: I) -> Result<bool, CertError>
    where
        I: IntoIterator,
        I::Item: Into<TypeSpec>,
    {
        intercept(self.inner.is_not_type(invalid_types))
    }

    /// Checks that every subject lies within the described interval.
    pub fn is_range(
        &self,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) -> Result<bool, CertError> {
        intercept(self.inner.is_range(lower, upper, lower_inclusive, upper_inclusive))
    }

    /// Checks that every subject is strictly greater than `lower`.
    pub fn is_gt(&self, lower: impl Into<Value>) -> Result<bool, CertError> {
        intercept(self.inner.is_gt(lower))
    }

    /// Checks that every subject is greater than or equal to `lower`.
    pub fn is_gte(&self, lower: impl Into<Value>) -> Result<bool, CertError> {
        intercept(self.inner.is_gte(lower))
    }

    /// Checks that every subject is strictly less than `upper`.
    pub fn is_lt(&self, upper: impl Into<Value>) -> Result<bool, CertError> {
        intercept(self.inner.is_lt(upper))
    }

    /// Checks that every subject is less than or equal to `upper`.
    pub fn is_lte(&self, upper: impl Into<Value>) -> Result<bool, CertError> {
        intercept(self.inner.is_lte(upper))
    }
}

/// The assertion/argument boundary: assertion errors become `Ok(false)`,
/// argument errors propagate.
fn intercept(result: Result<&Certifier, CertError>) -> Result<bool, CertError> {
    match result {
        Ok(_) => Ok(true),
        Err(error) if error.is_assertion() => Ok(false),
        Err(error) => Err(error),
    }
}
