use super::{check_length, range_text, Codec};
use crate::{
    field::{Candidate, Canonical, Nested, ValidationErrorType, WireObject},
    value::{join_set, ChangeValue, IntoChange},
};
use serde_json::Value;
use std::{collections::BTreeSet, marker::PhantomData};

fn check_items(count: usize, max: Option<usize>) -> Result<(), ValidationErrorType> {
    match max {
        Some(max) if count > max => Err(ValidationErrorType::value_error(range_text(
            None,
            Some(max as i128),
            " items",
        ))),
        _ => Ok(()),
    }
}

/// Whether `raw` is an array whose every item passes `item`.
pub(super) fn all_items(raw: &Value, item: fn(&Value) -> bool) -> bool {
    raw.as_array().is_some_and(|items| items.iter().all(item))
}

/// Accept one string of an aggregate, applying the per-item length bound.
fn accept_item(
    candidate: &Candidate,
    max_len: Option<usize>,
) -> Result<String, ValidationErrorType> {
    match candidate {
        Candidate::String(value) | Candidate::Domain(ChangeValue::String(value)) => {
            check_length(value, None, max_len)?;

            Ok(value.clone())
        }
        _ => Err(ValidationErrorType::type_error("array of str")),
    }
}

/// An ordered list of strings.
///
/// Under [`Canonical::EmptyAsNone`] (the default) absent, `null` and `[]`
/// all parse to `None`, and `None` is written back as `[]`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StringArrayCodec {
    canonical: Canonical,
    max_len: Option<usize>,
    max_items: Option<usize>,
}

impl StringArrayCodec {
    pub const fn new() -> Self {
        Self {
            canonical: Canonical::EmptyAsNone,
            max_len: None,
            max_items: None,
        }
    }

    pub const fn canonical(mut self, canonical: Canonical) -> Self {
        self.canonical = canonical;

        self
    }

    /// Bound the length of every item in characters.
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_len = Some(max);

        self
    }

    /// Bound the number of items.
    pub const fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);

        self
    }
}

impl Default for StringArrayCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec for StringArrayCodec {
    type Value = Option<Vec<String>>;

    fn decode(&self, raw: Option<&Value>) -> Option<Vec<String>> {
        let items = raw?.as_array()?;
        let strings = items
            .iter()
            .filter_map(Value::as_str)
            .map(ToOwned::to_owned)
            .collect();

        self.canonical.normalize(Some(strings), Vec::is_empty)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        all_items(raw, Value::is_string)
    }

    fn encode(&self, value: &Option<Vec<String>>) -> Value {
        match value {
            Some(strings) => strings.iter().cloned().map(Value::String).collect(),
            None => self.canonical.empty_array(),
        }
    }

    fn is_default(&self, value: &Option<Vec<String>>) -> bool {
        value.is_none()
    }

    fn accept(&self, candidate: &Candidate) -> Result<Option<Vec<String>>, ValidationErrorType> {
        let strings = match candidate {
            Candidate::Null => return Ok(None),
            Candidate::Array(items) => items
                .iter()
                .map(|item| accept_item(item, self.max_len))
                .collect::<Result<Vec<_>, _>>()?,
            Candidate::Domain(ChangeValue::Strings(strings)) => {
                for string in strings {
                    check_length(string, None, self.max_len)?;
                }

                strings.clone()
            }
            _ => return Err(ValidationErrorType::type_error("array of str")),
        };

        check_items(strings.len(), self.max_items)?;

        Ok(self.canonical.normalize(Some(strings), Vec::is_empty))
    }
}

/// An unordered set of strings sent as one comma separated string, such as
/// a sticker's tags.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StringSetCodec {
    max_len: Option<usize>,
}

impl StringSetCodec {
    pub const fn new() -> Self {
        Self { max_len: None }
    }

    /// Bound the length of the joined wire string in characters.
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_len = Some(max);

        self
    }

    fn split(value: &str) -> Option<BTreeSet<String>> {
        let set: BTreeSet<String> = value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToOwned::to_owned)
            .collect();

        Canonical::EmptyAsNone.normalize(Some(set), BTreeSet::is_empty)
    }

    /// Trim input items, rejecting any that would be split on the wire.
    fn collect<'a>(
        items: impl Iterator<Item = &'a str>,
    ) -> Result<Option<BTreeSet<String>>, ValidationErrorType> {
        let mut set = BTreeSet::new();

        for item in items {
            if item.contains(',') {
                return Err(ValidationErrorType::value_error("items without commas"));
            }

            let item = item.trim();

            if !item.is_empty() {
                set.insert(item.to_owned());
            }
        }

        Ok(Canonical::EmptyAsNone.normalize(Some(set), BTreeSet::is_empty))
    }
}

impl Codec for StringSetCodec {
    type Value = Option<BTreeSet<String>>;

    fn decode(&self, raw: Option<&Value>) -> Option<BTreeSet<String>> {
        match raw? {
            Value::String(value) => Self::split(value),
            Value::Array(items) => {
                let set = items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(ToOwned::to_owned)
                    .collect();

                Canonical::EmptyAsNone.normalize(Some(set), BTreeSet::is_empty)
            }
            _ => None,
        }
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.is_string() || all_items(raw, Value::is_string)
    }

    fn encode(&self, value: &Option<BTreeSet<String>>) -> Value {
        Value::String(value.as_ref().map(join_set).unwrap_or_default())
    }

    fn is_default(&self, value: &Option<BTreeSet<String>>) -> bool {
        value.is_none()
    }

    fn accept(
        &self,
        candidate: &Candidate,
    ) -> Result<Option<BTreeSet<String>>, ValidationErrorType> {
        let set = match candidate {
            Candidate::Null => return Ok(None),
            Candidate::String(value) => Self::split(value),
            Candidate::Array(items) => {
                let items = items
                    .iter()
                    .map(|item| accept_item(item, None))
                    .collect::<Result<Vec<_>, _>>()?;

                Self::collect(items.iter().map(String::as_str))?
            }
            Candidate::Domain(ChangeValue::StringSet(set)) => {
                Self::collect(set.iter().map(String::as_str))?
            }
            _ => return Err(ValidationErrorType::type_error("str or array of str")),
        };

        if let Some(set) = &set {
            check_length(&join_set(set), None, self.max_len)?;
        }

        Ok(set)
    }
}

/// A structured object kept in wire form. Empty objects are `None`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ObjectCodec;

impl ObjectCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for ObjectCodec {
    type Value = Option<WireObject>;

    fn decode(&self, raw: Option<&Value>) -> Option<WireObject> {
        let object = raw?.as_object()?;

        Canonical::EmptyAsNone.normalize(Some(object.clone()), WireObject::is_empty)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.is_object()
    }

    fn encode(&self, value: &Option<WireObject>) -> Value {
        value.clone().map_or(Value::Null, Value::Object)
    }

    fn is_default(&self, value: &Option<WireObject>) -> bool {
        value.is_none()
    }

    fn accept(&self, candidate: &Candidate) -> Result<Option<WireObject>, ValidationErrorType> {
        match candidate {
            Candidate::Null => Ok(None),
            Candidate::Domain(ChangeValue::Object(object)) => Ok(Canonical::EmptyAsNone
                .normalize(Some(object.clone()), WireObject::is_empty)),
            _ => Err(ValidationErrorType::type_error("object or null")),
        }
    }
}

/// A list of structured objects kept in wire form.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ObjectArrayCodec {
    max_items: Option<usize>,
}

impl ObjectArrayCodec {
    pub const fn new() -> Self {
        Self { max_items: None }
    }

    /// Bound the number of objects.
    pub const fn max_items(mut self, max: usize) -> Self {
        self.max_items = Some(max);

        self
    }
}

impl Codec for ObjectArrayCodec {
    type Value = Option<Vec<WireObject>>;

    fn decode(&self, raw: Option<&Value>) -> Option<Vec<WireObject>> {
        let items = raw?.as_array()?;
        let objects = items.iter().filter_map(Value::as_object).cloned().collect();

        Canonical::EmptyAsNone.normalize(Some(objects), Vec::is_empty)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        all_items(raw, Value::is_object)
    }

    fn encode(&self, value: &Option<Vec<WireObject>>) -> Value {
        value
            .iter()
            .flatten()
            .cloned()
            .map(Value::Object)
            .collect()
    }

    fn is_default(&self, value: &Option<Vec<WireObject>>) -> bool {
        value.is_none()
    }

    fn accept(
        &self,
        candidate: &Candidate,
    ) -> Result<Option<Vec<WireObject>>, ValidationErrorType> {
        let objects = match candidate {
            Candidate::Null => return Ok(None),
            Candidate::Array(items) => items
                .iter()
                .map(|item| match item {
                    Candidate::Domain(ChangeValue::Object(object)) => Ok(object.clone()),
                    _ => Err(ValidationErrorType::type_error("array of objects")),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Candidate::Domain(ChangeValue::Objects(objects)) => objects.clone(),
            _ => return Err(ValidationErrorType::type_error("array of objects")),
        };

        check_items(objects.len(), self.max_items)?;

        Ok(Canonical::EmptyAsNone.normalize(Some(objects), Vec::is_empty))
    }
}

/// An ordered list of nested objects such as permission overwrites.
pub struct NestedArrayCodec<T> {
    phantom: PhantomData<fn(T) -> T>,
}

impl<T> NestedArrayCodec<T> {
    pub const fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<T> Default for NestedArrayCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Nested> Codec for NestedArrayCodec<T>
where
    Vec<T>: IntoChange,
{
    type Value = Option<Vec<T>>;

    fn decode(&self, raw: Option<&Value>) -> Option<Vec<T>> {
        let items = raw?.as_array()?;
        let nested = items
            .iter()
            .filter_map(Value::as_object)
            .map(T::from_wire)
            .collect();

        Canonical::EmptyAsNone.normalize(Some(nested), Vec::is_empty)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        all_items(raw, Value::is_object)
    }

    fn encode(&self, value: &Option<Vec<T>>) -> Value {
        value
            .iter()
            .flatten()
            .map(|item| Value::Object(item.to_wire(true)))
            .collect()
    }

    fn is_default(&self, value: &Option<Vec<T>>) -> bool {
        value.is_none()
    }

    fn accept(&self, candidate: &Candidate) -> Result<Option<Vec<T>>, ValidationErrorType> {
        let nested = match candidate {
            Candidate::Null => return Ok(None),
            Candidate::Array(items) => items
                .iter()
                .map(|item| match item {
                    Candidate::Domain(ChangeValue::Object(object)) => T::validate_wire(object)
                        .map_err(|source| ValidationErrorType::value_error(source.to_string())),
                    _ => Err(ValidationErrorType::type_error("array of objects")),
                })
                .collect::<Result<Vec<_>, _>>()?,
            Candidate::Domain(value) => Vec::<T>::from_change(value.clone())
                .map_err(|_| ValidationErrorType::type_error("array of objects"))?,
            _ => return Err(ValidationErrorType::type_error("array of objects")),
        };

        Ok(Canonical::EmptyAsNone.normalize(Some(nested), Vec::is_empty))
    }
}

#[cfg(test)]
mod tests {
    use super::{ObjectArrayCodec, ObjectCodec, StringArrayCodec, StringSetCodec};
    use crate::{
        field::{Candidate, Canonical, Codec, ValidationErrorType},
        value::ChangeValue,
    };
    use serde_json::json;
    use std::collections::BTreeSet;

    #[test]
    fn empty_arrays_are_none() {
        let codec = StringArrayCodec::new();

        assert_eq!(codec.decode(None), None);
        assert_eq!(codec.decode(Some(&json!(null))), None);
        assert_eq!(codec.decode(Some(&json!([]))), None);
        assert_eq!(codec.decode(Some(&json!(["a"]))), Some(vec!["a".to_owned()]));
        assert_eq!(codec.encode(&None), json!([]));
    }

    #[test]
    fn kept_empty_arrays() {
        let codec = StringArrayCodec::new().canonical(Canonical::Keep);

        assert_eq!(codec.decode(Some(&json!([]))), Some(Vec::new()));
        assert_eq!(codec.encode(&None), json!(null));
    }

    #[test]
    fn string_array_input() {
        let codec = StringArrayCodec::new().max_length(3).max_items(2);

        assert_eq!(
            codec.accept(&Candidate::from(vec!["a", "b"])),
            Ok(Some(vec!["a".to_owned(), "b".to_owned()]))
        );
        assert_eq!(codec.accept(&Candidate::from(Vec::<String>::new())), Ok(None));
        assert!(matches!(
            codec.accept(&Candidate::from(vec!["abcd"])),
            Err(ValidationErrorType::Value { .. })
        ));
        assert!(matches!(
            codec.accept(&Candidate::from(vec!["a", "b", "c"])),
            Err(ValidationErrorType::Value { .. })
        ));
        assert!(matches!(
            codec.accept(&Candidate::from("a")),
            Err(ValidationErrorType::Type { .. })
        ));
        assert!(matches!(
            codec.accept(&Candidate::from(vec![1])),
            Err(ValidationErrorType::Type { .. })
        ));
    }

    #[test]
    fn string_sets() {
        let codec = StringSetCodec::new();
        let set: BTreeSet<String> = ["cat".to_owned(), "dog".to_owned()].into();

        assert_eq!(codec.decode(Some(&json!("dog, cat"))), Some(set.clone()));
        assert_eq!(codec.decode(Some(&json!(""))), None);
        assert_eq!(codec.encode(&Some(set.clone())), json!("cat, dog"));
        assert_eq!(codec.accept(&Candidate::from(vec!["dog", "cat", "dog"])), Ok(Some(set)));
        assert!(matches!(
            codec.accept(&Candidate::from(vec!["a,b"])),
            Err(ValidationErrorType::Value { .. })
        ));
    }

    #[test]
    fn built_string_sets_are_checked_like_arrays() {
        let codec = StringSetCodec::new();
        let padded: BTreeSet<String> = [" a".to_owned(), "b ".to_owned()].into();
        let trimmed: BTreeSet<String> = ["a".to_owned(), "b".to_owned()].into();
        let split: BTreeSet<String> = ["b,c".to_owned()].into();

        assert_eq!(
            codec.accept(&Candidate::from(ChangeValue::StringSet(padded))),
            Ok(Some(trimmed))
        );
        assert!(matches!(
            codec.accept(&Candidate::from(ChangeValue::StringSet(split))),
            Err(ValidationErrorType::Value { .. })
        ));
    }

    #[test]
    fn objects() {
        let codec = ObjectCodec::new();

        assert_eq!(codec.decode(Some(&json!({}))), None);
        assert!(codec.decode(Some(&json!({"a": 1}))).is_some());
        assert!(matches!(
            codec.accept(&Candidate::from("a")),
            Err(ValidationErrorType::Type { .. })
        ));

        let codec = ObjectArrayCodec::new().max_items(1);

        assert_eq!(codec.decode(Some(&json!([]))), None);
        assert_eq!(codec.encode(&None), json!([]));
        assert_eq!(
            codec.accept(&Candidate::from(json!([{"a": 1}]))),
            Ok(Some(vec![json!({"a": 1}).as_object().cloned().unwrap()]))
        );
        assert!(matches!(
            codec.accept(&Candidate::from(json!([{}, {}]))),
            Err(ValidationErrorType::Value { .. })
        ));
    }
}
