//! The throwing-mode wrapper around the rule evaluators.

use cert_core::{CertError, TypeSpec, Value};

use crate::rules::{check_ranges, check_types, check_values, Membership};

/// Binds a fixed list of subject values and certifies them against value,
/// type, and range rules.
///
/// Every predicate applies its rule to all subjects and returns the instance
/// for chaining on success, so a chain reads as a conjunction:
///
/// ```
/// # use cert_is::cert;
/// # fn main() -> Result<(), cert_is::CertError> {
/// cert!(15.0).is_gt(2.0)?.is_lt(17.0)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Certifier {
    subjects: Vec<Value>,
    message: Option<String>,
}

impl Certifier {
    /// Creates a certifier over the given subjects. The subject list is
    /// fixed for the lifetime of the instance.
    pub fn new(subjects: Vec<Value>) -> Certifier {
        Certifier {
            subjects,
            message: None,
        }
    }

    /// Returns the subjects bound at construction.
    pub fn subjects(&self) -> &[Value] {
        &self.subjects
    }

    /// Loads a message override consumed by all subsequent assertion errors
    /// on this instance until overwritten. Argument errors are unaffected.
    /// Order matters: call this before the predicate whose failure should
    /// carry the custom text.
    pub fn message(&mut self, text: impl Into<String>) -> &mut Self {
        self.message = Some(text.into());
        self
    }

    fn override_text(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Certifies that every subject is strictly equal to some element of
    /// `valid`.
    pub fn is<I>(&self, valid: I) -> Result<&Self, CertError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let valid: Vec<Value> = valid.into_iter().map(Into::into).collect();
        check_values(&self.subjects, Membership::AnyOf(&valid), self.override_text())?;
        Ok(self)
    }

    /// Certifies that no subject is strictly equal to any element of
    /// `invalid`.
    pub fn is_not<I>(&self, invalid: I) -> Result<&Self, CertError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let invalid: Vec<Value> = invalid.into_iter().map(Into::into).collect();
        check_values(&self.subjects, Membership::NoneOf(&invalid), self.override_text())?;
        Ok(self)
    }

    /// Certifies that every subject matches at least one descriptor in
    /// `valid_types` (a primitive tag or a class).
    pub fn is_type<I>(&self, valid_types: I) -> Result<&Self, CertError>
    where
        I: IntoIterator,
        I::Item: Into<TypeSpec>,
    {
        let valid_types: Vec<TypeSpec> = valid_types.into_iter().map(Into::into).collect();
        check_types(&self.subjects, Membership::AnyOf(&valid_types), self.override_text())?;
        Ok(self)
    }

    /// Certifies that no subject matches any descriptor in `invalid_types`.
    pub fn is_not_type<I>(&self, invalid_types: I) -> Result<&Self, CertError>
    where
        I: IntoIterator,
        I::Item: Into<TypeSpec>,
    {
        let invalid_types: Vec<TypeSpec> = invalid_types.into_iter().map(Into::into).collect();
        check_types(
            &self.subjects,
            Membership::NoneOf(&invalid_types),
            self.override_text(),
        )?;
        Ok(self)
    }

    /// Certifies that every subject lies within the interval described by
    /// the bounds and their inclusivity flags.
    pub fn is_range(
        &self,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
        lower_inclusive: bool,
        upper_inclusive: bool,
    ) -> Result<&Self, CertError> {
        check_ranges(
            &self.subjects,
            &lower.into(),
            &upper.into(),
            lower_inclusive,
            upper_inclusive,
            self.override_text(),
        )?;
        Ok(self)
    }

    /// Certifies that every subject is strictly greater than `lower`.
    pub fn is_gt(&self, lower: impl Into<Value>) -> Result<&Self, CertError> {
        self.is_range(lower, f64::INFINITY, false, true)
    }

    /// Certifies that every subject is greater than or equal to `lower`.
    pub fn is_gte(&self, lower: impl Into<Value>) -> Result<&Self, CertError> {
        self.is_range(lower, f64::INFINITY, true, true)
    }

    /// Certifies that every subject is strictly less than `upper`.
    pub fn is_lt(&self, upper: impl Into<Value>) -> Result<&Self, CertError> {
        self.is_range(f64::NEG_INFINITY, upper, true, false)
    }

    /// Certifies that every subject is less than or equal to `upper`.
    pub fn is_lte(&self, upper: impl Into<Value>) -> Result<&Self, CertError> {
        self.is_range(f64::NEG_INFINITY, upper, true, true)
    }
}
