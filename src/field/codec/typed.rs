use super::{unsigned, wire_u64, Codec};
use crate::{
    field::{Candidate, ValidationErrorType},
    types::util::{ImageHash, Timestamp, WireEnum, WireFlags},
    value::ChangeValue,
};
use serde_json::Value;
use std::marker::PhantomData;
use tracing::warn;

/// A `bitflags` set. Unknown bits are retained.
pub struct FlagsCodec<F> {
    phantom: PhantomData<fn(F) -> F>,
}

impl<F> FlagsCodec<F> {
    pub const fn new() -> Self {
        Self {
            phantom: PhantomData,
        }
    }
}

impl<F> Default for FlagsCodec<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: WireFlags> Codec for FlagsCodec<F> {
    type Value = F;

    fn decode(&self, raw: Option<&Value>) -> F {
        wire_u64(raw).map_or_else(F::empty, F::from_bits_retain)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        wire_u64(Some(raw)).is_some()
    }

    fn encode(&self, value: &F) -> Value {
        if F::STRING_ENCODED {
            Value::String(value.bits().to_string())
        } else {
            Value::from(value.bits())
        }
    }

    fn is_default(&self, value: &F) -> bool {
        value.bits() == 0
    }

    fn accept(&self, candidate: &Candidate) -> Result<F, ValidationErrorType> {
        let expected = if F::STRING_ENCODED {
            "int, str or flags"
        } else {
            "int or flags"
        };

        match candidate {
            Candidate::Integer(value) => Ok(F::from_bits_retain(unsigned(*value)?)),
            Candidate::String(value) if F::STRING_ENCODED => value
                .parse()
                .map(F::from_bits_retain)
                .map_err(|_| ValidationErrorType::value_error("a decimal bit set")),
            Candidate::Domain(value) => {
                F::from_change(value.clone()).map_err(|_| ValidationErrorType::type_error(expected))
            }
            _ => Err(ValidationErrorType::type_error(expected)),
        }
    }
}

/// An integer enum declared with `wire_enum!`.
pub struct EnumCodec<E> {
    emit_defaults: bool,
    phantom: PhantomData<fn(E) -> E>,
}

impl<E> EnumCodec<E> {
    pub const fn new() -> Self {
        Self {
            emit_defaults: false,
            phantom: PhantomData,
        }
    }

    /// Write the key even when the value is the default variant.
    pub const fn emit_defaults(mut self) -> Self {
        self.emit_defaults = true;

        self
    }
}

impl<E> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: WireEnum> Codec for EnumCodec<E> {
    type Value = E;

    fn decode(&self, raw: Option<&Value>) -> E {
        raw.and_then(Value::as_u64)
            .and_then(|value| u8::try_from(value).ok())
            .map_or_else(E::default, E::from)
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.as_u64().is_some_and(|value| u8::try_from(value).is_ok())
    }

    fn encode(&self, value: &E) -> Value {
        let raw: u8 = (*value).into();

        Value::from(raw)
    }

    fn is_default(&self, value: &E) -> bool {
        *value == E::default()
    }

    fn accept(&self, candidate: &Candidate) -> Result<E, ValidationErrorType> {
        match candidate {
            Candidate::Integer(value) => u8::try_from(*value)
                .map(E::from)
                .map_err(|_| ValidationErrorType::value_error("between 0 and 255")),
            Candidate::Domain(value) => E::from_change(value.clone())
                .map(|value| E::from(Into::<u8>::into(value)))
                .map_err(|_| ValidationErrorType::type_error("int or enum")),
            _ => Err(ValidationErrorType::type_error("int or enum")),
        }
    }

    fn always_emit(&self) -> bool {
        self.emit_defaults
    }
}

/// An optional ISO 8601 timestamp.
///
/// Malformed strings are logged and read as `None` so a single bad value
/// can't fail a whole payload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TimestampCodec;

impl TimestampCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for TimestampCodec {
    type Value = Option<Timestamp>;

    fn decode(&self, raw: Option<&Value>) -> Option<Timestamp> {
        let raw = raw?.as_str()?;

        match Timestamp::parse(raw) {
            Ok(timestamp) => Some(timestamp),
            Err(e) => {
                warn!(value = raw, error = %e, "ignoring malformed timestamp");

                None
            }
        }
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.as_str()
            .is_some_and(|raw| Timestamp::parse(raw).is_ok())
    }

    fn encode(&self, value: &Option<Timestamp>) -> Value {
        value.map_or(Value::Null, |timestamp| Value::String(timestamp.to_string()))
    }

    fn is_default(&self, value: &Option<Timestamp>) -> bool {
        value.is_none()
    }

    fn accept(&self, candidate: &Candidate) -> Result<Option<Timestamp>, ValidationErrorType> {
        match candidate {
            Candidate::Null => Ok(None),
            Candidate::String(value) => Timestamp::parse(value)
                .map(Some)
                .map_err(|_| ValidationErrorType::value_error("an ISO 8601 timestamp")),
            Candidate::Domain(ChangeValue::Timestamp(timestamp)) => {
                if !timestamp.is_wire_representable() {
                    return Err(ValidationErrorType::value_error(
                        "a timestamp between the years 0 and 9999",
                    ));
                }

                Ok(Some(*timestamp))
            }
            _ => Err(ValidationErrorType::type_error("str, timestamp or null")),
        }
    }
}

/// An optional icon, avatar, banner or splash hash.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ImageHashCodec;

impl ImageHashCodec {
    pub const fn new() -> Self {
        Self
    }
}

impl Codec for ImageHashCodec {
    type Value = Option<ImageHash>;

    fn decode(&self, raw: Option<&Value>) -> Option<ImageHash> {
        let raw = raw?.as_str()?;

        match ImageHash::parse(raw) {
            Ok(hash) => Some(hash),
            Err(e) => {
                warn!(value = raw, error = %e, "ignoring malformed image hash");

                None
            }
        }
    }

    fn matches_wire(&self, raw: &Value) -> bool {
        raw.as_str().is_some_and(|raw| ImageHash::parse(raw).is_ok())
    }

    fn encode(&self, value: &Option<ImageHash>) -> Value {
        value.map_or(Value::Null, |hash| Value::String(hash.to_string()))
    }

    fn is_default(&self, value: &Option<ImageHash>) -> bool {
        value.is_none()
    }

    fn accept(&self, candidate: &Candidate) -> Result<Option<ImageHash>, ValidationErrorType> {
        match candidate {
            Candidate::Null => Ok(None),
            Candidate::String(value) => ImageHash::parse(value)
                .map(Some)
                .map_err(|_| ValidationErrorType::value_error("a 32 digit hex hash")),
            Candidate::Domain(ChangeValue::ImageHash(hash)) => Ok(Some(*hash)),
            _ => Err(ValidationErrorType::type_error("str, image hash or null")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{EnumCodec, FlagsCodec, ImageHashCodec, TimestampCodec};
    use crate::{
        field::{Candidate, Codec, ValidationErrorType},
        types::{
            application::ApplicationFlags, channel::ChannelType, permissions::Permissions,
        },
    };
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn integer_flags() {
        let codec = FlagsCodec::<ApplicationFlags>::new();
        let flags = ApplicationFlags::from_bits_retain(1);

        assert_eq!(codec.accept(&Candidate::from(1)), Ok(flags));
        assert_eq!(codec.accept(&Candidate::from(flags)), Ok(flags));
        assert!(matches!(
            codec.accept(&Candidate::from("a")),
            Err(ValidationErrorType::Type { .. })
        ));
        assert!(matches!(
            codec.accept(&Candidate::from(-1)),
            Err(ValidationErrorType::Value { .. })
        ));
        assert_eq!(codec.encode(&flags), json!(1));
    }

    #[test]
    fn string_flags() {
        let codec = FlagsCodec::<Permissions>::new();

        assert_eq!(codec.decode(Some(&json!("8"))), Permissions::ADMINISTRATOR);
        assert_eq!(codec.encode(&Permissions::ADMINISTRATOR), json!("8"));
        assert_eq!(
            codec.accept(&Candidate::from("8")),
            Ok(Permissions::ADMINISTRATOR)
        );
        assert!(matches!(
            codec.accept(&Candidate::from("a")),
            Err(ValidationErrorType::Value { .. })
        ));
    }

    #[test]
    fn enums_keep_unknown_values() {
        let codec = EnumCodec::<ChannelType>::new();

        assert_eq!(codec.decode(Some(&json!(2))), ChannelType::GuildVoice);
        assert_eq!(codec.decode(Some(&json!(200))), ChannelType::Unknown(200));
        assert_eq!(codec.decode(Some(&json!(300))), ChannelType::default());
        assert_eq!(codec.accept(&Candidate::from(2)), Ok(ChannelType::GuildVoice));
        assert_eq!(
            codec.accept(&Candidate::from(ChannelType::GuildVoice)),
            Ok(ChannelType::GuildVoice)
        );
        assert!(matches!(
            codec.accept(&Candidate::from(256)),
            Err(ValidationErrorType::Value { .. })
        ));
        assert!(matches!(
            codec.accept(&Candidate::from("2")),
            Err(ValidationErrorType::Type { .. })
        ));
    }

    #[test]
    fn unknown_enums_with_known_values_are_canonical() {
        let codec = EnumCodec::<ChannelType>::new();

        assert_eq!(
            codec.accept(&Candidate::from(ChannelType::Unknown(2))),
            Ok(ChannelType::GuildVoice)
        );
        assert_eq!(
            codec.accept(&Candidate::from(ChannelType::Unknown(200))),
            Ok(ChannelType::Unknown(200))
        );
    }

    #[test]
    fn malformed_timestamps_are_none() {
        let codec = TimestampCodec::new();

        assert_eq!(codec.decode(Some(&json!("yesterday"))), None);
        assert!(codec
            .decode(Some(&json!("2021-01-01T01:01:01.010000+00:00")))
            .is_some());
        assert!(matches!(
            codec.accept(&Candidate::from("yesterday")),
            Err(ValidationErrorType::Value { .. })
        ));
    }

    #[test]
    fn five_digit_years_rejected() {
        let codec = TimestampCodec::new();
        let last = DateTime::from_timestamp(253_402_300_799, 0).unwrap();
        let first_too_late = DateTime::from_timestamp(253_402_300_800, 0).unwrap();

        assert!(codec.accept(&Candidate::from(last)).is_ok());
        assert!(matches!(
            codec.accept(&Candidate::from(first_too_late)),
            Err(ValidationErrorType::Value { .. })
        ));
    }

    #[test]
    fn image_hashes() {
        let codec = ImageHashCodec::new();
        let raw = "a_1acefe340fafb4ecefae407f3abdb323";
        let hash = codec.decode(Some(&json!(raw)));

        assert!(hash.is_some_and(|hash| hash.is_animated()));
        assert_eq!(codec.encode(&hash), json!(raw));
        assert!(codec.accept(&Candidate::from("nope")).is_err());
    }
}
