//! Field converters of auto moderation rules and their trigger metadata.

use super::{
    AutoModerationEventType, AutoModerationTriggerType, EXCLUDED_CHANNELS_MAX,
    EXCLUDED_ROLES_MAX, KEYWORDS_MAX, KEYWORD_LENGTH_MAX, REGEX_PATTERNS_MAX,
    REGEX_PATTERN_LENGTH_MAX,
};
use crate::{
    field::{
        BoolCodec, EnumCodec, Field, IdArrayCodec, IdCodec, IntCodec, ObjectArrayCodec,
        ObjectCodec, StringArrayCodec, StringCodec,
    },
    types::id::marker::{ChannelMarker, GuildMarker, RoleMarker, UserMarker},
};

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

pub const CREATOR_ID: Field<IdCodec<UserMarker>> = Field::named("creator_id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(1, 100));

pub const ENABLED: Field<BoolCodec> = Field::named("enabled", BoolCodec::new(false));

pub const EVENT_TYPE: Field<EnumCodec<AutoModerationEventType>> =
    Field::named("event_type", EnumCodec::new().emit_defaults());

pub const TRIGGER_TYPE: Field<EnumCodec<AutoModerationTriggerType>> =
    Field::named("trigger_type", EnumCodec::new().emit_defaults());

/// Actions executed when the rule triggers, in wire form.
pub const ACTIONS: Field<ObjectArrayCodec> =
    Field::named("actions", ObjectArrayCodec::new().max_items(3));

/// Trigger specific settings, in wire form.
pub const TRIGGER_METADATA: Field<ObjectCodec> =
    Field::named("trigger_metadata", ObjectCodec::new());

pub const EXCLUDED_CHANNEL_IDS: Field<IdArrayCodec<ChannelMarker>> = Field::new(
    "excluded_channel_ids",
    "exempt_channels",
    IdArrayCodec::new().max_items(EXCLUDED_CHANNELS_MAX),
);

pub const EXCLUDED_ROLE_IDS: Field<IdArrayCodec<RoleMarker>> = Field::new(
    "excluded_role_ids",
    "exempt_roles",
    IdArrayCodec::new().max_items(EXCLUDED_ROLES_MAX),
);

/// Words that trigger a keyword rule. Stored under `keyword_filter`.
pub const KEYWORDS: Field<StringArrayCodec> = Field::new(
    "keywords",
    "keyword_filter",
    StringArrayCodec::new()
        .max_length(KEYWORD_LENGTH_MAX)
        .max_items(KEYWORDS_MAX),
);

pub const REGEX_PATTERNS: Field<StringArrayCodec> = Field::named(
    "regex_patterns",
    StringArrayCodec::new()
        .max_length(REGEX_PATTERN_LENGTH_MAX)
        .max_items(REGEX_PATTERNS_MAX),
);

/// Words exempt from a keyword rule. Stored under `allow_list`.
pub const EXCLUDED_KEYWORDS: Field<StringArrayCodec> = Field::new(
    "excluded_keywords",
    "allow_list",
    StringArrayCodec::new()
        .max_length(KEYWORD_LENGTH_MAX)
        .max_items(KEYWORDS_MAX),
);

/// Unique mentions allowed in one message before a mention spam rule
/// triggers.
pub const MENTION_LIMIT: Field<IntCodec> =
    Field::new("mention_limit", "mention_total_limit", IntCodec::new(0).min(0).max(50));

#[cfg(test)]
mod tests {
    use super::{EXCLUDED_ROLE_IDS, KEYWORDS, TRIGGER_TYPE};
    use crate::{
        field::WireObject,
        types::{auto_moderation::AutoModerationTriggerType, id::Id},
    };
    use serde_json::{json, Value};

    fn put_keywords(value: Option<Vec<&str>>, include_defaults: bool) -> Value {
        let value = value.map(|keywords| keywords.into_iter().map(str::to_owned).collect());
        let mut data = WireObject::new();
        KEYWORDS.put(&value, &mut data, include_defaults);

        Value::Object(data)
    }

    #[test]
    fn keywords_put() {
        assert_eq!(put_keywords(None, false), json!({}));
        assert_eq!(put_keywords(None, true), json!({"keyword_filter": []}));
        assert_eq!(put_keywords(Some(vec!["a"]), false), json!({"keyword_filter": ["a"]}));
    }

    #[test]
    fn keywords_parse() {
        for (data, expected) in [
            (json!({}), None),
            (json!({"keyword_filter": null}), None),
            (json!({"keyword_filter": []}), None),
            (json!({"keyword_filter": ["a"]}), Some(vec!["a".to_owned()])),
        ] {
            assert_eq!(KEYWORDS.parse(data.as_object().unwrap()), expected);
        }
    }

    #[test]
    fn keywords_round_trip() {
        for value in [None, Some(vec!["a".to_owned(), "b".to_owned()])] {
            let mut data = WireObject::new();
            KEYWORDS.put(&value, &mut data, true);

            assert_eq!(KEYWORDS.parse(&data), value);
        }
    }

    #[test]
    fn keyword_length() {
        assert!(KEYWORDS.validate(vec!["a".repeat(61)]).unwrap_err().is_value());
        assert!(KEYWORDS.validate(vec![1]).unwrap_err().is_type());
    }

    #[test]
    fn excluded_roles() {
        let ids: Vec<u64> = (1..=21).collect();
        assert!(EXCLUDED_ROLE_IDS.validate(ids).unwrap_err().is_value());
        assert_eq!(
            EXCLUDED_ROLE_IDS.validate(vec!["2", "1"]),
            Ok(Some(vec![Id::new(1), Id::new(2)]))
        );
    }

    #[test]
    fn trigger_type_always_written() {
        let mut data = WireObject::new();
        TRIGGER_TYPE.put(&AutoModerationTriggerType::None, &mut data, false);

        assert_eq!(Value::Object(data), json!({"trigger_type": 0}));
    }
}
