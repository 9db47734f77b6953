//! Value level converters shared by every conversion entry.

use crate::{
    field::{Candidate, ValidationError},
    value::ChangeValue,
};
use serde_json::Value;

/// Reads one side of a change from its wire value.
pub type GetConverter = fn(Option<&Value>) -> Option<ChangeValue>;

/// Writes one side of a change back into its wire value.
pub type PutConverter = fn(Option<&ChangeValue>) -> Value;

/// Validates external input for one side of a change.
pub type Validator = fn(Candidate) -> Result<Option<ChangeValue>, ValidationError>;

/// Write a change value in its wire form, `null` when unset.
///
/// Every typed [`ChangeValue`] knows its wire form, so all entries share this
/// converter.
pub fn put_change(value: Option<&ChangeValue>) -> Value {
    value.map_or(Value::Null, ChangeValue::to_wire)
}

/// Keep the wire value of an attribute without a conversion.
pub fn get_raw(raw: Option<&Value>) -> Option<ChangeValue> {
    raw.filter(|raw| !raw.is_null())
        .cloned()
        .map(ChangeValue::Raw)
}

#[cfg(test)]
mod tests {
    use super::{get_raw, put_change};
    use crate::value::ChangeValue;
    use serde_json::{json, Value};

    #[test]
    fn raw_values() {
        assert_eq!(get_raw(None), None);
        assert_eq!(get_raw(Some(&Value::Null)), None);
        assert_eq!(
            get_raw(Some(&json!({"a": 1}))),
            Some(ChangeValue::Raw(json!({"a": 1})))
        );
    }

    #[test]
    fn put() {
        assert_eq!(put_change(None), Value::Null);
        assert_eq!(put_change(Some(&ChangeValue::Integer(3))), json!(3));
        assert_eq!(put_change(Some(&ChangeValue::Raw(json!("x")))), json!("x"));
    }
}
