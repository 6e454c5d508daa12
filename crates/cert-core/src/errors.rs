//! The certification error taxonomy.
//!
//! Six error kinds in two families. Argument errors signal a malformed call
//! to the library itself and always surface; assertion errors signal that a
//! subject failed its certification and may be converted to a boolean by the
//! checker. Every kind carries a stable machine readable code.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::descriptor::TypeSpec;
use crate::value::Value;

/// Stable code for a malformed value argument.
pub const ERR_INVALID_ARG_VALUE: &str = "ERR_INVALID_ARG_VALUE";
/// Stable code for a malformed type argument.
pub const ERR_INVALID_ARG_TYPE: &str = "ERR_INVALID_ARG_TYPE";
/// Stable code for a malformed range argument.
pub const ERR_INVALID_ARG_RANGE: &str = "ERR_INVALID_ARG_RANGE";
/// Stable code for a failed value certification.
pub const ERR_INVALID_VALUE: &str = "ERR_INVALID_VALUE";
/// Stable code for a failed type certification.
pub const ERR_INVALID_TYPE: &str = "ERR_INVALID_TYPE";
/// Stable code for a failed range certification.
pub const ERR_INVALID_RANGE: &str = "ERR_INVALID_RANGE";

const DEFAULT_VALUE_MESSAGE: &str = "Value is invalid";
const DEFAULT_TYPE_MESSAGE: &str = "Value is of an invalid type";
const DEFAULT_RANGE_MESSAGE: &str = "Value is of a prohibited range";

/// Canonical error type for certification failures and library misuse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CertError {
    /// A parameter held an unusable value.
    #[error("[ERR_INVALID_ARG_VALUE]: \"{param}\" has an invalid value")]
    ValueArgument {
        /// Name of the offending parameter.
        param: String,
        /// Values the parameter would have accepted, when known.
        valid: Vec<Value>,
    },
    /// A parameter held a value of an unusable type.
    #[error("[ERR_INVALID_ARG_TYPE]: \"{param}\" has an invalid type")]
    TypeArgument {
        /// Name of the offending parameter.
        param: String,
        /// Descriptors the parameter would have accepted, when known.
        valid_types: Vec<TypeSpec>,
    },
    /// A parameter described an impossible interval.
    #[error("[ERR_INVALID_ARG_RANGE]: \"{param}\" has an invalid range")]
    RangeArgument {
        /// Name of the offending parameter.
        param: String,
        /// Rendered description of the interval the parameter should have
        /// respected, when constructible.
        range: Option<String>,
    },
    /// A subject was not an allowed value, or was a prohibited one.
    #[error("[ERR_INVALID_VALUE]: {message}")]
    ValueAssertion {
        /// Failure message, either the default or an instance override.
        message: String,
    },
    /// A subject matched no allowed type, or matched a prohibited one.
    #[error("[ERR_INVALID_TYPE]: {message}")]
    TypeAssertion {
        /// Failure message, either the default or an instance override.
        message: String,
    },
    /// A subject fell outside the requested interval.
    #[error("[ERR_INVALID_RANGE]: {message}")]
    RangeAssertion {
        /// Failure message, either the default or an instance override.
        message: String,
    },
}

impl CertError {
    /// Builds a value argument error.
    pub fn value_argument(param: impl Into<String>, valid: Vec<Value>) -> CertError {
        CertError::ValueArgument {
            param: param.into(),
            valid,
        }
    }

    /// Builds a type argument error.
    pub fn type_argument(param: impl Into<String>, valid_types: Vec<TypeSpec>) -> CertError {
        CertError::TypeArgument {
            param: param.into(),
            valid_types,
        }
    }

    /// Builds a range argument error. The range description, when present,
    /// comes pre-rendered by [`Bounds::describe`](crate::bounds::Bounds::describe).
    pub fn range_argument(param: impl Into<String>, range: Option<String>) -> CertError {
        CertError::RangeArgument {
            param: param.into(),
            range,
        }
    }

    /// Builds a value assertion error, honouring an instance message override.
    pub fn value_assertion(message: Option<&str>) -> CertError {
        CertError::ValueAssertion {
            message: message.unwrap_or(DEFAULT_VALUE_MESSAGE).to_owned(),
        }
    }

    /// Builds a type assertion error, honouring an instance message override.
    pub fn type_assertion(message: Option<&str>) -> CertError {
        CertError::TypeAssertion {
            message: message.unwrap_or(DEFAULT_TYPE_MESSAGE).to_owned(),
        }
    }

    /// Builds a range assertion error, honouring an instance message override.
    pub fn range_assertion(message: Option<&str>) -> CertError {
        CertError::RangeAssertion {
            message: message.unwrap_or(DEFAULT_RANGE_MESSAGE).to_owned(),
        }
    }

    /// Returns the stable machine readable code for the error kind. The code
    /// never changes with the message text.
    pub fn code(&self) -> &'static str {
        match self {
            CertError::ValueArgument { .. } => ERR_INVALID_ARG_VALUE,
            CertError::TypeArgument { .. } => ERR_INVALID_ARG_TYPE,
            CertError::RangeArgument { .. } => ERR_INVALID_ARG_RANGE,
            CertError::ValueAssertion { .. } => ERR_INVALID_VALUE,
            CertError::TypeAssertion { .. } => ERR_INVALID_TYPE,
            CertError::RangeAssertion { .. } => ERR_INVALID_RANGE,
        }
    }

    /// True when the error reports a subject failing its certification.
    pub fn is_assertion(&self) -> bool {
        matches!(
            self,
            CertError::ValueAssertion { .. }
                | CertError::TypeAssertion { .. }
                | CertError::RangeAssertion { .. }
        )
    }

    /// True when the error reports a malformed call to the library.
    pub fn is_argument(&self) -> bool {
        !self.is_assertion()
    }

    /// Renders the error as a structured, serialisable report.
    pub fn report(&self) -> ErrorReport {
        let mut report = ErrorReport::new(self.code(), self.to_string());
        match self {
            CertError::ValueArgument { param, valid } => {
                report = report.with_context("param", param);
                if !valid.is_empty() {
                    report = report.with_context("valid", render_list(valid));
                }
            }
            CertError::TypeArgument { param, valid_types } => {
                report = report.with_context("param", param);
                if !valid_types.is_empty() {
                    report = report.with_context("valid_types", render_list(valid_types));
                }
            }
            CertError::RangeArgument { param, range } => {
                report = report.with_context("param", param);
                if let Some(range) = range {
                    report = report.with_context("range", range);
                }
            }
            CertError::ValueAssertion { .. }
            | CertError::TypeAssertion { .. }
            | CertError::RangeAssertion { .. } => {}
        }
        report
    }
}

fn render_list<T: std::fmt::Display>(items: &[T]) -> String {
    let mut rendered = String::new();
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            rendered.push_str(", ");
        }
        let _ = write!(rendered, "{item}");
    }
    rendered
}

/// Structured payload describing a [`CertError`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (parameter names, accepted sets, ranges).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
}

impl ErrorReport {
    /// Creates a new report with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
        }
    }

    /// Adds a context entry to the report.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }
}
