//! Validation failures.

use std::{
    borrow::Cow,
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A candidate value was rejected by a field validator.
///
/// Carries the attribute name and a rendering of the received value so the
/// failure can be reported without the original input at hand.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationError {
    /// Type of error that occurred.
    kind: ValidationErrorType,
    /// Name of the attribute being validated.
    attribute: &'static str,
    /// The received value, with its type in parentheses.
    received: String,
}

impl ValidationError {
    pub(crate) fn new(
        kind: ValidationErrorType,
        attribute: &'static str,
        received: String,
    ) -> Self {
        Self {
            kind,
            attribute,
            received,
        }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &ValidationErrorType {
        &self.kind
    }

    /// Name of the attribute that rejected the value.
    pub const fn attribute(&self) -> &'static str {
        self.attribute
    }

    /// The rejected value as it was received.
    pub fn received(&self) -> &str {
        &self.received
    }

    /// Whether the value was of a type the attribute doesn't accept.
    pub const fn is_type(&self) -> bool {
        matches!(self.kind, ValidationErrorType::Type { .. })
    }

    /// Whether the value had an accepted type but an invalid value.
    pub const fn is_value(&self) -> bool {
        matches!(self.kind, ValidationErrorType::Value { .. })
    }

    /// Consume the error, returning the owned error type and the attribute.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (ValidationErrorType, &'static str, String) {
        (self.kind, self.attribute, self.received)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.kind {
            ValidationErrorType::Type { expected } => write!(
                f,
                "`{}` can be {expected}, got {}",
                self.attribute, self.received
            ),
            ValidationErrorType::Value { expected } => write!(
                f,
                "`{}` must be {expected}, got {}",
                self.attribute, self.received
            ),
        }
    }
}

impl Error for ValidationError {}

/// Type of [`ValidationError`] that occurred.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValidationErrorType {
    /// The candidate's type is not among the accepted input types.
    Type {
        /// Description of the accepted types.
        expected: &'static str,
    },
    /// The candidate's type is accepted but the value violates a constraint.
    Value {
        /// Description of the violated constraint.
        expected: Cow<'static, str>,
    },
}

impl ValidationErrorType {
    pub(crate) const fn type_error(expected: &'static str) -> Self {
        Self::Type { expected }
    }

    pub(crate) fn value_error(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::Value {
            expected: expected.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ValidationError, ValidationErrorType};

    #[test]
    fn type_error_display() {
        let err = ValidationError::new(
            ValidationErrorType::type_error("bool"),
            "bot_public",
            "12.6 (float)".to_owned(),
        );
        assert!(err.is_type());
        assert_eq!(err.to_string(), "`bot_public` can be bool, got 12.6 (float)");
    }

    #[test]
    fn value_error_display() {
        let err = ValidationError::new(
            ValidationErrorType::value_error(">= 0"),
            "position",
            "-1 (int)".to_owned(),
        );
        assert!(err.is_value());
        assert_eq!(err.attribute(), "position");
        assert_eq!(err.to_string(), "`position` must be >= 0, got -1 (int)");
    }
}
