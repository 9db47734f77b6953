//! Value-level conversions used by [`Field`].
//!
//! A codec knows how to read one wire value, write it back, recognise its
//! default and accept loosely typed input. It never sees the surrounding
//! object; [`Field`] handles key lookup and default omission.
//!
//! [`Field`]: super::Field

mod aggregate;
mod id;
mod scalar;
mod typed;

pub use self::{
    aggregate::{
        NestedArrayCodec, ObjectArrayCodec, ObjectCodec, StringArrayCodec, StringSetCodec,
    },
    id::{IdArrayCodec, IdCodec},
    scalar::{BoolCodec, ColorCodec, IntCodec, NullableStringCodec, StringCodec},
    typed::{EnumCodec, FlagsCodec, ImageHashCodec, TimestampCodec},
};

use super::{Candidate, ValidationErrorType};
use serde_json::Value;
use std::fmt::Debug;

/// Conversion between one wire value and its domain representation.
pub trait Codec: Send + Sync {
    /// Domain representation.
    type Value: Clone + Debug + PartialEq;

    /// Read a wire value.
    ///
    /// `None` means the key is absent. Must be total: absent, `null` and
    /// unexpected shapes produce the default.
    fn decode(&self, raw: Option<&Value>) -> Self::Value;

    /// Whether a present, non-null wire value is read as it is. When false,
    /// [`decode`] falls back to the default.
    ///
    /// [`decode`]: Self::decode
    fn matches_wire(&self, raw: &Value) -> bool;

    /// Write the wire form of a value.
    fn encode(&self, value: &Self::Value) -> Value;

    /// Whether the value is the declared default, and may be omitted.
    fn is_default(&self, value: &Self::Value) -> bool;

    /// Accept an external value: type check, coerce, then range check.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationErrorType::Type`] when the candidate's type isn't
    /// accepted and [`ValidationErrorType::Value`] when a constraint fails.
    fn accept(&self, candidate: &Candidate) -> Result<Self::Value, ValidationErrorType>;

    /// Whether the key is written even for the default value.
    fn always_emit(&self) -> bool {
        false
    }
}

/// Describe an inclusive range for a value error.
pub(crate) fn range_text(min: Option<i128>, max: Option<i128>, unit: &str) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("between {min} and {max}{unit}"),
        (Some(min), None) => format!(">= {min}{unit}"),
        (None, Some(max)) => format!("<= {max}{unit}"),
        (None, None) => "any value".to_owned(),
    }
}

/// Check an inclusive range, producing a value error on violation.
pub(crate) fn check_range(
    value: i128,
    min: Option<i128>,
    max: Option<i128>,
    unit: &str,
) -> Result<(), ValidationErrorType> {
    let below = min.is_some_and(|min| value < min);
    let above = max.is_some_and(|max| value > max);

    if below || above {
        return Err(ValidationErrorType::value_error(range_text(min, max, unit)));
    }

    Ok(())
}

/// Check a string's length in characters.
pub(crate) fn check_length(
    value: &str,
    min: Option<usize>,
    max: Option<usize>,
) -> Result<(), ValidationErrorType> {
    let length = value.chars().count();

    check_range(
        length as i128,
        min.map(|min| min as i128),
        max.map(|max| max as i128),
        " characters long",
    )
}

/// Coerce an integer candidate into the unsigned 64 bit space of ids and
/// flags.
pub(crate) fn unsigned(value: i128) -> Result<u64, ValidationErrorType> {
    u64::try_from(value)
        .map_err(|_| ValidationErrorType::value_error("a non-negative 64 bit integer"))
}

/// Read an unsigned integer carried either as a JSON number or a decimal
/// string.
pub(crate) fn wire_u64(raw: Option<&Value>) -> Option<u64> {
    match raw? {
        Value::Number(number) => number.as_u64(),
        Value::String(string) => string.parse().ok(),
        _ => None,
    }
}
