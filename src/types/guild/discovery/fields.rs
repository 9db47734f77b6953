//! Field converters of guild discovery metadata.

use super::{KEYWORDS_MAX, KEYWORD_LENGTH_MAX};
use crate::{
    field::{BoolCodec, Field, IdCodec, IntCodec, StringArrayCodec},
    types::id::marker::GuildMarker,
};

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

/// Search terms the guild is listed under.
pub const KEYWORDS: Field<StringArrayCodec> = Field::named(
    "keywords",
    StringArrayCodec::new()
        .max_length(KEYWORD_LENGTH_MAX)
        .max_items(KEYWORDS_MAX),
);

pub const PRIMARY_CATEGORY_ID: Field<IntCodec> =
    Field::named("primary_category_id", IntCodec::new(0).min(0));

/// Whether the guild's emojis are shown in discovery.
pub const EMOJI_DISCOVERABILITY_ENABLED: Field<BoolCodec> =
    Field::named("emoji_discoverability_enabled", BoolCodec::new(true));

#[cfg(test)]
mod tests {
    use super::{EMOJI_DISCOVERABILITY_ENABLED, KEYWORDS};
    use crate::field::WireObject;
    use serde_json::{json, Value};

    #[test]
    fn parse_keywords() {
        for (input, expected) in [
            (json!({}), None),
            (json!({"keywords": null}), None),
            (json!({"keywords": []}), None),
            (json!({"keywords": ["a"]}), Some(vec!["a".to_owned()])),
        ] {
            assert_eq!(KEYWORDS.parse(input.as_object().unwrap()), expected);
        }
    }

    #[test]
    fn keyword_limits() {
        assert!(KEYWORDS.validate(["a"; 11]).unwrap_err().is_value());
        assert!(KEYWORDS.validate(["a".repeat(31)]).unwrap_err().is_value());
        assert!(KEYWORDS.validate([1]).unwrap_err().is_type());
    }

    #[test]
    fn true_default_omitted() {
        let mut data = WireObject::new();
        EMOJI_DISCOVERABILITY_ENABLED.put(&true, &mut data, false);
        assert!(data.is_empty());

        EMOJI_DISCOVERABILITY_ENABLED.put(&false, &mut data, false);
        assert_eq!(
            Value::Object(data),
            json!({"emoji_discoverability_enabled": false})
        );
    }
}
