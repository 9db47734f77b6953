//! Field converters of messages.

use super::CONTENT_LENGTH_MAX;
use crate::{
    field::{BoolCodec, Field, IdCodec, StringCodec},
    types::id::marker::{ChannelMarker, GuildMarker, MessageMarker, UserMarker},
};

pub const ID: Field<IdCodec<MessageMarker>> = Field::named("id", IdCodec::new());

pub const CHANNEL_ID: Field<IdCodec<ChannelMarker>> = Field::named("channel_id", IdCodec::new());

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

pub const AUTHOR_ID: Field<IdCodec<UserMarker>> = Field::named("author_id", IdCodec::new());

pub const CONTENT: Field<StringCodec> =
    Field::named("content", StringCodec::new().max_length(CONTENT_LENGTH_MAX));

pub const PINNED: Field<BoolCodec> = Field::named("pinned", BoolCodec::new(false));

/// Whether the message is read out by text to speech.
pub const TTS: Field<BoolCodec> = Field::named("tts", BoolCodec::new(false));

#[cfg(test)]
mod tests {
    use super::{CONTENT, ID};
    use crate::{field::WireObject, types::id::Id};
    use serde_json::{json, Value};

    #[test]
    fn id_validation() {
        let id = Some(Id::new(202304260002));

        assert_eq!(ID.validate(202304260002_u64), Ok(id));
        assert_eq!(ID.validate("202304260002"), Ok(id));
        assert!(ID.validate(-1).unwrap_err().is_value());
        assert!(ID.validate("-1").unwrap_err().is_value());
        assert!(ID.validate(12.6).unwrap_err().is_type());
    }

    #[test]
    fn id_wire_form() {
        let mut data = WireObject::new();
        ID.put(&Some(Id::new(202304260002)), &mut data, false);

        assert_eq!(Value::Object(data.clone()), json!({"id": "202304260002"}));
        assert_eq!(ID.parse(&data), Some(Id::new(202304260002)));
        assert_eq!(ID.parse(json!({"id": 202304260002_u64}).as_object().unwrap()), Some(Id::new(202304260002)));
        assert_eq!(ID.parse(&WireObject::new()), None);
    }

    #[test]
    fn content_length() {
        assert!(CONTENT.validate("a".repeat(2000)).is_ok());
        assert!(CONTENT.validate("a".repeat(2001)).unwrap_err().is_value());
    }
}
