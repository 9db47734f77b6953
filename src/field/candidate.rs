//! Loosely typed input accepted by validators.

use crate::{types::id::Id, value::ChangeValue};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A value supplied from outside the library, before validation.
///
/// Build one with `From`: Rust primitives, strings, arrays, optional values,
/// `serde_json::Value`, IDs and pre-built domain objects (flags, enums,
/// timestamps, image hashes, colors) all convert.
#[derive(Clone, Debug, PartialEq)]
pub enum Candidate {
    /// An explicit null / `None`.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer. Wide enough for every `i64` and `u64`.
    Integer(i128),
    /// A floating point number.
    Float(f64),
    /// A string.
    String(String),
    /// A sequence of candidates.
    Array(Vec<Candidate>),
    /// An already typed domain value.
    Domain(ChangeValue),
}

impl Candidate {
    /// Name of the candidate's type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Candidate::Null => "null",
            Candidate::Bool(_) => "bool",
            Candidate::Integer(_) => "int",
            Candidate::Float(_) => "float",
            Candidate::String(_) => "str",
            Candidate::Array(_) => "array",
            Candidate::Domain(value) => value.domain().name(),
        }
    }

    /// Render the candidate with its type, as reported in validation errors.
    pub(crate) fn describe(&self) -> String {
        format!("{self} ({})", self.type_name())
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Candidate::Null => f.write_str("null"),
            Candidate::Bool(value) => Display::fmt(value, f),
            Candidate::Integer(value) => Display::fmt(value, f),
            Candidate::Float(value) => Display::fmt(value, f),
            Candidate::String(value) => write!(f, "{value:?}"),
            Candidate::Array(items) => {
                f.write_str("[")?;

                for (index, item) in items.iter().enumerate() {
                    if index != 0 {
                        f.write_str(", ")?;
                    }

                    Display::fmt(item, f)?;
                }

                f.write_str("]")
            }
            Candidate::Domain(value) => Display::fmt(value, f),
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Candidate {
                fn from(value: $ty) -> Self {
                    Candidate::Integer(i128::from(value))
                }
            }
        )+
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<bool> for Candidate {
    fn from(value: bool) -> Self {
        Candidate::Bool(value)
    }
}

impl From<f32> for Candidate {
    fn from(value: f32) -> Self {
        Candidate::Float(f64::from(value))
    }
}

impl From<f64> for Candidate {
    fn from(value: f64) -> Self {
        Candidate::Float(value)
    }
}

impl From<&str> for Candidate {
    fn from(value: &str) -> Self {
        Candidate::String(value.to_owned())
    }
}

impl From<String> for Candidate {
    fn from(value: String) -> Self {
        Candidate::String(value)
    }
}

impl<T: Into<Candidate>> From<Option<T>> for Candidate {
    fn from(value: Option<T>) -> Self {
        value.map_or(Candidate::Null, Into::into)
    }
}

impl<T: Into<Candidate>> From<Vec<T>> for Candidate {
    fn from(values: Vec<T>) -> Self {
        Candidate::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Candidate>, const N: usize> From<[T; N]> for Candidate {
    fn from(values: [T; N]) -> Self {
        Candidate::Array(values.into_iter().map(Into::into).collect())
    }
}

impl From<ChangeValue> for Candidate {
    fn from(value: ChangeValue) -> Self {
        Candidate::Domain(value)
    }
}

impl<M> From<Id<M>> for Candidate {
    fn from(id: Id<M>) -> Self {
        Candidate::Domain(ChangeValue::Id(id.cast()))
    }
}

impl From<DateTime<Utc>> for Candidate {
    fn from(datetime: DateTime<Utc>) -> Self {
        Candidate::Domain(ChangeValue::Timestamp(datetime.into()))
    }
}

impl From<&Value> for Candidate {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Candidate::Null,
            Value::Bool(value) => Candidate::Bool(*value),
            Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Candidate::Integer(i128::from(value))
                } else if let Some(value) = number.as_u64() {
                    Candidate::Integer(i128::from(value))
                } else {
                    Candidate::Float(number.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(value) => Candidate::String(value.clone()),
            Value::Array(items) => Candidate::Array(items.iter().map(Candidate::from).collect()),
            Value::Object(object) => Candidate::Domain(ChangeValue::Object(object.clone())),
        }
    }
}

impl From<Value> for Candidate {
    fn from(value: Value) -> Self {
        Candidate::from(&value)
    }
}
