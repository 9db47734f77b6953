//! Field converters of scheduled events.

use super::{PrivacyLevel, ScheduledEventEntityType, ScheduledEventStatus};
use crate::{
    field::{
        EnumCodec, Field, IdCodec, ImageHashCodec, NullableStringCodec, ObjectCodec,
        StringCodec, TimestampCodec,
    },
    types::id::marker::{ChannelMarker, GuildMarker, ScheduledEventEntityMarker, ScheduledEventMarker},
};

pub const ID: Field<IdCodec<ScheduledEventMarker>> = Field::named("id", IdCodec::new());

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

pub const CHANNEL_ID: Field<IdCodec<ChannelMarker>> = Field::named("channel_id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(1, 100));

pub const DESCRIPTION: Field<NullableStringCodec> =
    Field::named("description", NullableStringCodec::new().max_length(1000));

/// Cover image.
pub const IMAGE: Field<ImageHashCodec> = Field::named("image", ImageHashCodec::new());

pub const START: Field<TimestampCodec> =
    Field::new("start", "scheduled_start_time", TimestampCodec::new());

pub const END: Field<TimestampCodec> =
    Field::new("end", "scheduled_end_time", TimestampCodec::new());

pub const ENTITY_ID: Field<IdCodec<ScheduledEventEntityMarker>> =
    Field::named("entity_id", IdCodec::new());

/// Entity specific settings such as the location, in wire form.
pub const ENTITY_METADATA: Field<ObjectCodec> =
    Field::named("entity_metadata", ObjectCodec::new());

pub const ENTITY_TYPE: Field<EnumCodec<ScheduledEventEntityType>> =
    Field::named("entity_type", EnumCodec::new());

pub const PRIVACY_LEVEL: Field<EnumCodec<PrivacyLevel>> =
    Field::named("privacy_level", EnumCodec::new().emit_defaults());

pub const STATUS: Field<EnumCodec<ScheduledEventStatus>> =
    Field::named("status", EnumCodec::new());

#[cfg(test)]
mod tests {
    use super::{ENTITY_METADATA, PRIVACY_LEVEL, START};
    use crate::{
        field::WireObject,
        types::{scheduled_event::PrivacyLevel, util::Timestamp},
    };
    use serde_json::{json, Value};

    #[test]
    fn privacy_level_always_written() {
        let mut data = WireObject::new();
        PRIVACY_LEVEL.put(&PrivacyLevel::GuildOnly, &mut data, false);

        assert_eq!(Value::Object(data), json!({"privacy_level": 2}));
    }

    #[test]
    fn start() {
        let data = json!({"scheduled_start_time": "2023-05-06T00:00:00+00:00"});
        let start = START.parse(data.as_object().unwrap());

        assert_eq!(start, Timestamp::from_secs(1_683_331_200).ok());
    }

    #[test]
    fn entity_metadata() {
        let metadata = json!({"location": "Gensokyo"});

        assert_eq!(
            ENTITY_METADATA.validate(metadata.clone()),
            Ok(metadata.as_object().cloned())
        );
        assert_eq!(ENTITY_METADATA.validate(json!({})), Ok(None));
        assert!(ENTITY_METADATA.validate("Gensokyo").unwrap_err().is_type());
    }
}
