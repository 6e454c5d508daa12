//! The three rule evaluators.
//!
//! Pure functions over an ordered slice of subjects. Evaluation is
//! deterministic in subject order and short-circuits at the first failure;
//! a call succeeds only if every subject passes. Assertion errors carry the
//! optional instance message override; argument errors never do.

use cert_core::{Bounds, CertError, PrimitiveKind, TypeSpec, Value};

/// A membership rule: subjects must match one of the set, or none of it.
#[derive(Debug)]
pub enum Membership<'a, T> {
    /// Every subject must match at least one element of the set.
    AnyOf(&'a [T]),
    /// No subject may match any element of the set.
    NoneOf(&'a [T]),
}

impl<T> Clone for Membership<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Membership<'_, T> {}

/// Checks every subject for strict-equality membership in the rule's set.
///
/// The resulting assertion error deliberately does not name the offending
/// element.
pub fn check_values(
    subjects: &[Value],
    rule: Membership<'_, Value>,
    message: Option<&str>,
) -> Result<(), CertError> {
    for subject in subjects {
        let failed = match rule {
            Membership::AnyOf(valid) => !valid.contains(subject),
            Membership::NoneOf(invalid) => invalid.contains(subject),
        };
        if failed {
            return Err(CertError::value_assertion(message));
        }
    }
    Ok(())
}

/// Checks every subject's type against the rule's descriptor set.
///
/// Descriptors are consulted in order. A descriptor whose tag resolves to no
/// primitive kind is a caller error: it surfaces as a type argument error
/// naming the descriptor's position, regardless of allowed or forbidden
/// mode, before the subject is judged against it.
pub fn check_types(
    subjects: &[Value],
    rule: Membership<'_, TypeSpec>,
    message: Option<&str>,
) -> Result<(), CertError> {
    match rule {
        Membership::AnyOf(valid_types) => {
            for subject in subjects {
                let mut matched = false;
                for (index, spec) in valid_types.iter().enumerate() {
                    match spec.matches(subject) {
                        Some(true) => {
                            matched = true;
                            break;
                        }
                        Some(false) => {}
                        None => return Err(bad_descriptor("validTypes", index)),
                    }
                }
                if !matched {
                    return Err(CertError::type_assertion(message));
                }
            }
        }
        Membership::NoneOf(invalid_types) => {
            for subject in subjects {
                for (index, spec) in invalid_types.iter().enumerate() {
                    match spec.matches(subject) {
                        Some(true) => return Err(CertError::type_assertion(message)),
                        Some(false) => {}
                        None => return Err(bad_descriptor("invalidTypes", index)),
                    }
                }
            }
        }
    }
    Ok(())
}

fn bad_descriptor(set_name: &str, index: usize) -> CertError {
    let recognised = PrimitiveKind::ALL.into_iter().map(TypeSpec::Kind).collect();
    CertError::type_argument(format!("{set_name}[{index}]"), recognised)
}

/// Checks every subject against the interval described by the four range
/// parameters.
///
/// Parameter validation precedes subject validation: the bounds must be
/// numbers, the interval must not be inverted, and a point interval must be
/// inclusive on both ends. Only then is each subject required to be a number
/// inside the interval.
pub fn check_ranges(
    subjects: &[Value],
    lower: &Value,
    upper: &Value,
    lower_inclusive: bool,
    upper_inclusive: bool,
    message: Option<&str>,
) -> Result<(), CertError> {
    let lower = require_number(lower, "lower")?;
    let upper = require_number(upper, "upper")?;
    if upper < lower {
        // The corrected interval the caller implied: at least `lower`,
        // with the upper end forced inclusive.
        let implied = Bounds::new(lower, f64::INFINITY, lower_inclusive, true);
        return Err(CertError::range_argument(
            "upper",
            Some(implied.describe("upper")),
        ));
    }
    if upper == lower && !(lower_inclusive && upper_inclusive) {
        // A point interval with an exclusive end is empty.
        let implied = Bounds::new(lower, f64::INFINITY, false, true);
        return Err(CertError::range_argument(
            "upper",
            Some(implied.describe("upper")),
        ));
    }
    let bounds = Bounds::new(lower, upper, lower_inclusive, upper_inclusive);
    for (index, subject) in subjects.iter().enumerate() {
        let number = require_number(subject, &format!("values[{index}]"))?;
        if !bounds.contains(number) {
            return Err(CertError::range_assertion(message));
        }
    }
    Ok(())
}

fn require_number(value: &Value, param: &str) -> Result<f64, CertError> {
    value.as_number().ok_or_else(|| {
        CertError::type_argument(param, vec![TypeSpec::Kind(PrimitiveKind::Number)])
    })
}
