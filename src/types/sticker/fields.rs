//! Field converters of guild stickers.

use super::StickerFormat;
use crate::{
    field::{
        BoolCodec, EnumCodec, Field, IdCodec, NullableStringCodec, StringCodec, StringSetCodec,
    },
    types::id::marker::{GuildMarker, StickerMarker},
};

pub const ID: Field<IdCodec<StickerMarker>> = Field::named("id", IdCodec::new());

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(2, 30));

pub const DESCRIPTION: Field<NullableStringCodec> =
    Field::named("description", NullableStringCodec::new().length(2, 100));

/// Whether the sticker can be used, false after losing boosts.
pub const AVAILABLE: Field<BoolCodec> = Field::named("available", BoolCodec::new(true));

pub const FORMAT: Field<EnumCodec<StickerFormat>> =
    Field::new("format", "format_type", EnumCodec::new());

/// Autocomplete and suggestion tags, a comma separated list on the wire.
pub const TAGS: Field<StringSetCodec> = Field::named("tags", StringSetCodec::new().max_length(200));

#[cfg(test)]
mod tests {
    use super::{FORMAT, TAGS};
    use crate::{field::WireObject, types::sticker::StickerFormat};
    use serde_json::{json, Value};
    use std::collections::BTreeSet;

    #[test]
    fn tags() {
        let data = json!({"tags": "smile, happy"});
        let tags = TAGS.parse(data.as_object().unwrap());
        let expected: BTreeSet<String> = ["happy".to_owned(), "smile".to_owned()].into();

        assert_eq!(tags, Some(expected));

        let mut out = WireObject::new();
        TAGS.put(&tags, &mut out, false);
        assert_eq!(Value::Object(out), json!({"tags": "happy, smile"}));
        assert!(TAGS.validate(["a,b"]).unwrap_err().is_value());
    }

    #[test]
    fn format() {
        assert_eq!(
            FORMAT.parse(json!({"format_type": 3}).as_object().unwrap()),
            StickerFormat::Lottie
        );
    }
}
