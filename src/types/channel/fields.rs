//! Field converters of channels and threads.

use super::{
    forum_tag::ForumTag, permission_overwrite::PermissionOverwrite, ChannelFlags, ChannelType,
    ForumLayout, SortOrder, VideoQualityMode,
};
use crate::{
    field::{
        BoolCodec, EnumCodec, Field, FlagsCodec, IdArrayCodec, IdCodec, IntCodec,
        NestedArrayCodec, NullableStringCodec, ObjectCodec, StringCodec,
    },
    types::id::marker::{ChannelMarker, GuildMarker, TagMarker},
};

/// Longest slowmode, in seconds.
pub const SLOWMODE_MAX: i64 = 21600;

pub const ID: Field<IdCodec<ChannelMarker>> = Field::named("id", IdCodec::new());

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

pub const PARENT_ID: Field<IdCodec<ChannelMarker>> = Field::named("parent_id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(1, 100));

pub const TYPE: Field<EnumCodec<ChannelType>> =
    Field::named("type", EnumCodec::new().emit_defaults());

pub const POSITION: Field<IntCodec> = Field::named("position", IntCodec::new(0).min(0));

pub const TOPIC: Field<NullableStringCodec> =
    Field::named("topic", NullableStringCodec::new().max_length(4096));

pub const NSFW: Field<BoolCodec> = Field::named("nsfw", BoolCodec::new(false));

pub const FLAGS: Field<FlagsCodec<ChannelFlags>> = Field::named("flags", FlagsCodec::new());

/// Seconds a member has to wait between sending messages.
pub const SLOWMODE: Field<IntCodec> = Field::new(
    "slowmode",
    "rate_limit_per_user",
    IntCodec::new(0).min(0).max(SLOWMODE_MAX),
);

pub const BITRATE: Field<IntCodec> =
    Field::named("bitrate", IntCodec::new(64000).min(8000).max(384000));

pub const USER_LIMIT: Field<IntCodec> = Field::named("user_limit", IntCodec::new(0).min(0).max(99));

/// Voice region id, `None` for automatic.
pub const REGION: Field<NullableStringCodec> =
    Field::new("region", "rtc_region", NullableStringCodec::new());

pub const VIDEO_QUALITY_MODE: Field<EnumCodec<VideoQualityMode>> =
    Field::named("video_quality_mode", EnumCodec::new());

pub const PERMISSION_OVERWRITES: Field<NestedArrayCodec<PermissionOverwrite>> =
    Field::named("permission_overwrites", NestedArrayCodec::new());

pub const AVAILABLE_TAGS: Field<NestedArrayCodec<ForumTag>> =
    Field::named("available_tags", NestedArrayCodec::new());

pub const APPLIED_TAG_IDS: Field<IdArrayCodec<TagMarker>> =
    Field::new("applied_tag_ids", "applied_tags", IdArrayCodec::new().max_items(5));

pub const DEFAULT_FORUM_LAYOUT: Field<EnumCodec<ForumLayout>> =
    Field::named("default_forum_layout", EnumCodec::new());

pub const DEFAULT_SORT_ORDER: Field<EnumCodec<SortOrder>> =
    Field::named("default_sort_order", EnumCodec::new());

/// Minutes of inactivity after which new threads are archived.
pub const DEFAULT_THREAD_AUTO_ARCHIVE_AFTER: Field<IntCodec> = Field::new(
    "default_thread_auto_archive_after",
    "default_auto_archive_duration",
    IntCodec::new(1440).min(60).max(10080),
);

/// Emoji shown on the add reaction button of new posts, in wire form.
pub const DEFAULT_THREAD_REACTION: Field<ObjectCodec> = Field::new(
    "default_thread_reaction",
    "default_reaction_emoji",
    ObjectCodec::new(),
);

pub const DEFAULT_THREAD_SLOWMODE: Field<IntCodec> = Field::new(
    "default_thread_slowmode",
    "default_thread_rate_limit_per_user",
    IntCodec::new(0).min(0).max(SLOWMODE_MAX),
);

pub const ARCHIVED: Field<BoolCodec> = Field::named("archived", BoolCodec::new(false));

/// Minutes of inactivity after which the thread is archived.
pub const AUTO_ARCHIVE_DURATION: Field<IntCodec> =
    Field::named("auto_archive_duration", IntCodec::new(1440).min(60).max(10080));

pub const LOCKED: Field<BoolCodec> = Field::named("locked", BoolCodec::new(false));

/// Whether non-moderators can add other members to a private thread.
pub const INVITABLE: Field<BoolCodec> = Field::named("invitable", BoolCodec::new(true));

#[cfg(test)]
mod tests {
    use super::{
        APPLIED_TAG_IDS, AVAILABLE_TAGS, FLAGS, PERMISSION_OVERWRITES, POSITION, SLOWMODE, TYPE,
    };
    use crate::{
        field::WireObject,
        types::{
            channel::{
                forum_tag::ForumTag,
                permission_overwrite::{PermissionOverwrite, PermissionOverwriteTargetType},
                ChannelFlags, ChannelType,
            },
            id::{marker::RoleMarker, Id},
        },
    };
    use serde_json::{json, Value};

    #[test]
    fn slowmode_key() {
        let mut data = WireObject::new();
        SLOWMODE.put(&60, &mut data, false);

        assert_eq!(Value::Object(data.clone()), json!({"rate_limit_per_user": 60}));
        assert_eq!(SLOWMODE.parse(&data), 60);
        assert!(SLOWMODE.validate(SLOWMODE_MAX_PLUS_ONE).unwrap_err().is_value());
    }

    const SLOWMODE_MAX_PLUS_ONE: i64 = super::SLOWMODE_MAX + 1;

    #[test]
    fn position() {
        assert_eq!(POSITION.validate(0), Ok(0));
        assert_eq!(POSITION.validate(1), Ok(1));
        assert!(POSITION.validate(-1).unwrap_err().is_value());
        assert!(POSITION.validate(12.6).unwrap_err().is_type());
        assert!(POSITION.validate("12").unwrap_err().is_type());
    }

    #[test]
    fn type_is_always_written() {
        let mut data = WireObject::new();
        TYPE.put(&ChannelType::GuildText, &mut data, false);

        assert_eq!(Value::Object(data), json!({"type": 0}));
    }

    #[test]
    fn unknown_channel_type_survives() {
        let data = json!({"type": 99});
        let channel_type = TYPE.parse(data.as_object().unwrap());

        assert_eq!(channel_type, ChannelType::Unknown(99));

        let mut out = WireObject::new();
        TYPE.put(&channel_type, &mut out, false);
        assert_eq!(Value::Object(out), data);
    }

    #[test]
    fn flags() {
        assert_eq!(FLAGS.validate(2), Ok(ChannelFlags::PINNED));
        assert!(FLAGS.validate("2").unwrap_err().is_type());
    }

    #[test]
    fn nested_round_trip() {
        let overwrites = Some(vec![PermissionOverwrite::new(
            Id::<RoleMarker>::new(5),
            PermissionOverwriteTargetType::Role,
        )]);
        let tags = Some(vec![ForumTag {
            name: "Yup".to_owned(),
            ..ForumTag::default()
        }]);
        let mut data = WireObject::new();
        PERMISSION_OVERWRITES.put(&overwrites, &mut data, false);
        AVAILABLE_TAGS.put(&tags, &mut data, false);

        assert_eq!(PERMISSION_OVERWRITES.parse(&data), overwrites);
        assert_eq!(AVAILABLE_TAGS.parse(&data), tags);
    }

    #[test]
    fn nested_validation() {
        let candidate = json!([{"id": "5", "type": 0}]);
        let overwrites = PERMISSION_OVERWRITES.validate(candidate).unwrap();

        assert_eq!(overwrites.map(|overwrites| overwrites.len()), Some(1));
        assert!(PERMISSION_OVERWRITES.validate(json!([1])).unwrap_err().is_type());
        assert!(AVAILABLE_TAGS
            .validate(json!([{"name": ""}]))
            .unwrap_err()
            .is_value());
    }

    #[test]
    fn applied_tags() {
        assert_eq!(
            APPLIED_TAG_IDS.parse(json!({"applied_tags": ["2", "1"]}).as_object().unwrap()),
            Some(vec![Id::new(1), Id::new(2)])
        );
        assert!(APPLIED_TAG_IDS
            .validate(vec![1, 2, 3, 4, 5, 6])
            .unwrap_err()
            .is_value());
    }
}
