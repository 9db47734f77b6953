use std::{
    error::Error,
    fmt::{Display, Formatter, Result as FmtResult},
};

/// A string or Unix time couldn't be turned into a [`Timestamp`].
///
/// [`Timestamp`]: super::Timestamp
#[derive(Debug)]
pub struct TimestampParseError {
    kind: TimestampParseErrorType,
    source: Option<chrono::ParseError>,
}

impl TimestampParseError {
    pub(super) const fn new(kind: TimestampParseErrorType) -> Self {
        Self { kind, source: None }
    }

    pub(super) const fn chrono(source: chrono::ParseError) -> Self {
        Self {
            kind: TimestampParseErrorType::Parsing,
            source: Some(source),
        }
    }

    /// Immutable reference to the type of error that occurred.
    #[must_use = "retrieving the type has no effect if left unused"]
    pub const fn kind(&self) -> &TimestampParseErrorType {
        &self.kind
    }

    /// Consume the error, returning the owned error type and the chrono error
    /// behind it, if there is one.
    #[must_use = "consuming the error into its parts has no effect if left unused"]
    pub fn into_parts(self) -> (TimestampParseErrorType, Option<chrono::ParseError>) {
        (self.kind, self.source)
    }
}

impl Display for TimestampParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self.kind {
            TimestampParseErrorType::Format => "not an ISO 8601 datetime",
            TimestampParseErrorType::Parsing => "ISO 8601 datetime is invalid",
            TimestampParseErrorType::Range => "datetime is outside the years 0 to 9999",
        })
    }
}

impl Error for TimestampParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|source| source as &(dyn Error + 'static))
    }
}

/// Type of [`TimestampParseError`] that occurred.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum TimestampParseErrorType {
    /// The string lacks a date and time separated by `T`.
    Format,
    /// chrono rejected the string.
    Parsing,
    /// The instant falls outside the years 0 to 9999.
    Range,
}
