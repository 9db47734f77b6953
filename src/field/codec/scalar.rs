use super::{check_length, check_range, Codec};
use crate::{
    field::{Candidate, ValidationErrorType},
    types::util::{hex_color::MAX_COLOR, HexColor},
    value::ChangeValue,
};
use serde_json::Value;

/// A boolean with a per-field default.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BoolCodec {
    default: bool,
}

impl BoolCodec {
    pub const fn new(default: bool) -> Self {
        Self { default }
    }
}

impl Codec for BoolCodec {
    type Value = bool;

    fn decode(&self, raw: Option<&Value>) -> bool {
        raw.and_then(Value::as_bool).unwrap_or(self.default)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.is_boolean()
    }

    fn encode(&self, value: &bool) -> Value {
        Value::Bool(*value)
    }

    fn is_default(&self, value: &bool) -> bool {
        *value == self.default
    }

    fn accept(&self, candidate: &Candidate) -> Result<bool, ValidationErrorType> {
        match candidate {
            Candidate::Bool(value) | Candidate::Domain(ChangeValue::Bool(value)) => Ok(*value),
            _ => Err(ValidationErrorType::type_error("bool")),
        }
    }
}

/// A 64 bit integer with a default and optional inclusive bounds.
///
/// Only integers are accepted as input. Booleans, floats and numeric strings
/// are type errors.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct IntCodec {
    default: i64,
    min: Option<i64>,
    max: Option<i64>,
}

impl IntCodec {
    pub const fn new(default: i64) -> Self {
        Self {
            default,
            min: None,
            max: None,
        }
    }

    /// Set the inclusive lower bound.
    pub const fn min(mut self, min: i64) -> Self {
        self.min = Some(min);

        self
    }

    /// Set the inclusive upper bound.
    pub const fn max(mut self, max: i64) -> Self {
        self.max = Some(max);

        self
    }
}

impl Codec for IntCodec {
    type Value = i64;

    fn decode(&self, raw: Option<&Value>) -> i64 {
        raw.and_then(Value::as_i64).unwrap_or(self.default)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.is_i64()
    }

    fn encode(&self, value: &i64) -> Value {
        Value::from(*value)
    }

    fn is_default(&self, value: &i64) -> bool {
        *value == self.default
    }

    fn accept(&self, candidate: &Candidate) -> Result<i64, ValidationErrorType> {
        let value = match candidate {
            Candidate::Integer(value) => *value,
            Candidate::Domain(ChangeValue::Integer(value)) => i128::from(*value),
            _ => return Err(ValidationErrorType::type_error("int")),
        };

        check_range(
            value,
            self.min.map(i128::from),
            self.max.map(i128::from),
            "",
        )?;

        i64::try_from(value).map_err(|_| ValidationErrorType::value_error("a 64 bit integer"))
    }
}

/// Text with a default and optional length bounds in characters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StringCodec {
    default: &'static str,
    min_len: Option<usize>,
    max_len: Option<usize>,
    always_emit: bool,
}

impl StringCodec {
    pub const fn new() -> Self {
        Self {
            default: "",
            min_len: None,
            max_len: None,
            always_emit: false,
        }
    }

    pub const fn default_value(mut self, default: &'static str) -> Self {
        self.default = default;

        self
    }

    /// Bound the length in characters, inclusively.
    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_len = Some(min);
        self.max_len = Some(max);

        self
    }

    /// Bound the maximum length in characters.
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_len = Some(max);

        self
    }

    /// Write the key even when the value is the default.
    pub const fn emit_defaults(mut self) -> Self {
        self.always_emit = true;

        self
    }
}

impl Default for StringCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for StringCodec {
    type Value = String;

    fn decode(&self, raw: Option<&Value>) -> String {
        raw.and_then(Value::as_str)
            .unwrap_or(self.default)
            .to_owned()
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.is_string()
    }

    fn encode(&self, value: &String) -> Value {
        Value::String(value.clone())
    }

    fn is_default(&self, value: &String) -> bool {
        value == self.default
    }

    fn accept(&self, candidate: &Candidate) -> Result<String, ValidationErrorType> {
        match candidate {
            Candidate::String(value) | Candidate::Domain(ChangeValue::String(value)) => {
                check_length(value, self.min_len, self.max_len)?;

                Ok(value.clone())
            }
            _ => Err(ValidationErrorType::type_error("str")),
        }
    }

    fn always_emit(&self) -> bool {
        self.always_emit
    }
}

/// Optional text: `null`, absent and `""` are all `None`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullableStringCodec {
    min_len: Option<usize>,
    max_len: Option<usize>,
}

impl NullableStringCodec {
    pub const fn new() -> Self {
        Self {
            min_len: None,
            max_len: None,
        }
    }

    /// Bound the length of a present value in characters, inclusively.
    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_len = Some(min);
        self.max_len = Some(max);

        self
    }

    /// Bound the maximum length of a present value in characters.
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_len = Some(max);

        self
    }
}

impl Codec for NullableStringCodec {
    type Value = Option<String>;

    fn decode(&self, raw: Option<&Value>) -> Option<String> {
        raw.and_then(Value::as_str)
            .filter(|value| !value.is_empty())
            .map(ToOwned::to_owned)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.is_string()
    }

    fn encode(&self, value: &Option<String>) -> Value {
        value.clone().map_or(Value::Null, Value::String)
    }

    fn is_default(&self, value: &Option<String>) -> bool {
        value.is_none()
    }

    fn accept(&self, candidate: &Candidate) -> Result<Option<String>, ValidationErrorType> {
        match candidate {
            Candidate::Null => Ok(None),
            Candidate::String(value) | Candidate::Domain(ChangeValue::String(value)) => {
                if value.is_empty() {
                    return Ok(None);
                }

                check_length(value, self.min_len, self.max_len)?;

                Ok(Some(value.clone()))
            }
            _ => Err(ValidationErrorType::type_error("str or null")),
        }
    }
}

/// An RGB color carried as an integer. Black (`0`) means "no color".
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ColorCodec;

impl ColorCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for ColorCodec {
    type Value = HexColor;

    fn decode(&self, raw: Option<&Value>) -> HexColor {
        raw.and_then(Value::as_u64)
            .and_then(|value| u32::try_from(value).ok())
            .and_then(HexColor::from_u32)
            .unwrap_or_default()
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.as_u64()
            .and_then(|value| u32::try_from(value).ok())
            .and_then(HexColor::from_u32)
            .is_some()
    }

    fn encode(&self, value: &HexColor) -> Value {
        Value::from(value.to_u32())
    }

    fn is_default(&self, value: &HexColor) -> bool {
        *value == HexColor::default()
    }

    fn accept(&self, candidate: &Candidate) -> Result<HexColor, ValidationErrorType> {
        let out_of_range =
            || ValidationErrorType::value_error(format!("between 0 and {MAX_COLOR}"));

        match candidate {
            Candidate::Integer(value) => u32::try_from(*value)
                .ok()
                .and_then(HexColor::from_u32)
                .ok_or_else(out_of_range),
            Candidate::String(value) => value
                .parse()
                .map_err(|_| ValidationErrorType::value_error("a #RRGGBB color")),
            Candidate::Domain(ChangeValue::Color(color)) => Ok(*color),
            _ => Err(ValidationErrorType::type_error("int, str or color")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoolCodec, ColorCodec, IntCodec, NullableStringCodec, StringCodec};
    use crate::{
        field::{Candidate, Codec, ValidationErrorType},
        types::util::HexColor,
    };
    use serde_json::json;

    #[test]
    fn bool_accepts_only_bools() {
        let codec = BoolCodec::new(false);
        assert_eq!(codec.accept(&Candidate::from(true)), Ok(true));
        assert!(codec.accept(&Candidate::from(1)).is_err());
        assert!(codec.accept(&Candidate::from(12.6)).is_err());
        assert!(!codec.decode(Some(&json!(null))));
        assert!(BoolCodec::new(true).decode(None));
    }

    #[test]
    fn int_bounds() {
        let codec = IntCodec::new(0).min(0).max(10);
        assert_eq!(codec.accept(&Candidate::from(10)), Ok(10));
        assert!(codec.accept(&Candidate::from(11)).is_err());
        assert!(codec.accept(&Candidate::from(true)).is_err());
        assert!(codec.accept(&Candidate::from("1")).is_err());
        assert_eq!(codec.decode(Some(&json!("5"))), 0);
    }

    #[test]
    fn string_length() {
        let codec = StringCodec::new().length(1, 3);
        assert_eq!(codec.accept(&Candidate::from("abc")), Ok("abc".to_owned()));
        assert!(matches!(
            codec.accept(&Candidate::from("abcd")),
            Err(ValidationErrorType::Value { .. })
        ));
        assert!(codec.accept(&Candidate::Null).is_err());
        assert!(codec.is_default(&String::new()));
    }

    #[test]
    fn nullable_string_empty_is_none() {
        let codec = NullableStringCodec::new();
        assert_eq!(codec.decode(Some(&json!(""))), None);
        assert_eq!(codec.accept(&Candidate::from("")), Ok(None));
        assert_eq!(codec.accept(&Candidate::Null), Ok(None));
        assert_eq!(codec.encode(&None), json!(null));
    }

    #[test]
    fn colors() {
        let codec = ColorCodec::new();
        assert_eq!(codec.decode(Some(&json!(0x00FF00))), HexColor(0, 255, 0));
        assert_eq!(codec.accept(&Candidate::from("#FF0000")), Ok(HexColor(255, 0, 0)));
        assert!(matches!(
            codec.accept(&Candidate::from(0x0100_0000)),
            Err(ValidationErrorType::Value { .. })
        ));
        assert!(matches!(
            codec.accept(&Candidate::from(1.0)),
            Err(ValidationErrorType::Type { .. })
        ));
    }
}
