//! Field converter triplets.
//!
//! Every attribute of a Discord object is declared once as a [`Field`]: its
//! attribute name, its wire key and a [`Codec`]. The field then provides the
//! three conversions every entity needs:
//!
//! - [`Field::parse`] reads the key from a wire object, applying the default
//!   when it is absent. Never fails.
//! - [`Field::put`] writes the key into a wire object, omitting it when the
//!   value is the default unless defaults are requested.
//! - [`Field::validate`] accepts loosely typed external input and returns the
//!   domain value or a [`ValidationError`].
//!
//! ```
//! use discord_conversions::{field::WireObject, types::application::fields::BOT_PUBLIC};
//!
//! let mut data = WireObject::new();
//! BOT_PUBLIC.put(&false, &mut data, false);
//! assert!(data.is_empty());
//!
//! BOT_PUBLIC.put(&true, &mut data, false);
//! assert!(BOT_PUBLIC.parse(&data));
//! ```

mod candidate;
mod codec;
mod error;

pub use self::{
    candidate::Candidate,
    codec::{
        BoolCodec, Codec, ColorCodec, EnumCodec, FlagsCodec, IdArrayCodec, IdCodec,
        ImageHashCodec, IntCodec, NestedArrayCodec, NullableStringCodec, ObjectArrayCodec,
        ObjectCodec, StringArrayCodec, StringCodec, StringSetCodec, TimestampCodec,
    },
    error::{ValidationError, ValidationErrorType},
};

use crate::value::{ChangeValue, ToChange};
use serde_json::{Map, Value};
use std::fmt::Debug;
use tracing::warn;

/// A wire format object: string keys to loosely typed JSON values.
pub type WireObject = Map<String, Value>;

/// One attribute of an entity: its name, wire key and codec.
#[derive(Clone, Copy, Debug)]
pub struct Field<C> {
    name: &'static str,
    key: &'static str,
    codec: C,
}

impl<C> Field<C> {
    /// Declare a field whose wire key differs from its attribute name.
    pub const fn new(name: &'static str, key: &'static str, codec: C) -> Self {
        Self { name, key, codec }
    }

    /// Declare a field whose wire key is its attribute name.
    pub const fn named(name: &'static str, codec: C) -> Self {
        Self::new(name, name, codec)
    }

    /// Attribute name, used in diagnostics.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Key the value is stored under on the wire.
    pub const fn key(&self) -> &'static str {
        self.key
    }

    pub const fn codec(&self) -> &C {
        &self.codec
    }
}

impl<C: Codec> Field<C> {
    /// Read the field from a wire object.
    pub fn parse(&self, data: &WireObject) -> C::Value {
        self.codec.decode(data.get(self.key))
    }

    /// Write the field into a wire object.
    ///
    /// An existing key is overwritten, so calling this repeatedly gives the
    /// same result as calling it once. The key is left untouched when the
    /// value is the default and `include_defaults` is false.
    pub fn put<'a>(
        &self,
        value: &C::Value,
        data: &'a mut WireObject,
        include_defaults: bool,
    ) -> &'a mut WireObject {
        if include_defaults || self.codec.always_emit() || !self.codec.is_default(value) {
            data.insert(self.key.to_owned(), self.codec.encode(value));
        }

        data
    }

    /// Validate external input.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationErrorType::Type`] error if the input's type is not
    /// accepted and a [`ValidationErrorType::Value`] error if the input
    /// violates a constraint of the attribute.
    pub fn validate(&self, candidate: impl Into<Candidate>) -> Result<C::Value, ValidationError> {
        let candidate = candidate.into();

        self.codec
            .accept(&candidate)
            .map_err(|kind| ValidationError::new(kind, self.name, candidate.describe()))
    }
}

impl<C: Codec> Field<C>
where
    C::Value: ToChange,
{
    /// Read one side of an audit log change.
    ///
    /// Unlike [`parse`], an absent or `null` value stays unset instead of
    /// taking the default: a change that sets or clears an attribute only
    /// carries one side. A value of the wrong shape is kept as
    /// [`ChangeValue::Raw`] rather than read as the default.
    ///
    /// [`parse`]: Self::parse
    pub fn parse_change(&self, raw: Option<&Value>) -> Option<ChangeValue> {
        let raw = raw.filter(|raw| !raw.is_null())?;

        if !self.codec.matches_wire(raw) {
            warn!(attribute = self.name, value = %raw, "keeping malformed change value raw");

            return Some(ChangeValue::Raw(raw.clone()));
        }

        self.codec.decode(Some(raw)).to_change()
    }

    /// Validate external input into a change value.
    ///
    /// # Errors
    ///
    /// Same as [`validate`].
    ///
    /// [`validate`]: Self::validate
    pub fn validate_change(
        &self,
        candidate: impl Into<Candidate>,
    ) -> Result<Option<ChangeValue>, ValidationError> {
        self.validate(candidate).map(ToChange::to_change)
    }
}

/// How empty aggregates (lists, sets, text) are represented.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Canonical {
    /// Empty aggregates are kept as they are.
    Keep,
    /// Empty aggregates collapse to `None`; `None` is written back as the
    /// empty aggregate.
    EmptyAsNone,
}

impl Canonical {
    /// Apply the rule to an optional value.
    pub fn normalize<T>(self, value: Option<T>, is_empty: impl FnOnce(&T) -> bool) -> Option<T> {
        match self {
            Canonical::Keep => value,
            Canonical::EmptyAsNone => value.filter(|value| !is_empty(value)),
        }
    }

    /// Apply the rule to a change value.
    pub fn normalize_change(self, value: Option<ChangeValue>) -> Option<ChangeValue> {
        self.normalize(value, ChangeValue::is_empty)
    }

    /// Wire form of an unset array.
    pub(crate) fn empty_array(self) -> Value {
        match self {
            Canonical::Keep => Value::Null,
            Canonical::EmptyAsNone => Value::Array(Vec::new()),
        }
    }
}

/// An object nested inside an attribute, such as a permission overwrite.
pub trait Nested: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// Read the object. Never fails.
    fn from_wire(data: &WireObject) -> Self;

    /// Write the object.
    fn to_wire(&self, include_defaults: bool) -> WireObject;

    /// Read the object from external input, validating every field.
    ///
    /// # Errors
    ///
    /// Returns the first field's validation error.
    fn validate_wire(data: &WireObject) -> Result<Self, ValidationError> {
        Ok(Self::from_wire(data))
    }
}
