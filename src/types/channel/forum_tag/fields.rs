use crate::{
    field::{BoolCodec, Field, IdCodec, NullableStringCodec, StringCodec},
    types::id::marker::{EmojiMarker, TagMarker},
};

pub const ID: Field<IdCodec<TagMarker>> = Field::named("id", IdCodec::new());

/// Always written, even when empty.
pub const NAME: Field<StringCodec> =
    Field::named("name", StringCodec::new().length(1, 20).emit_defaults());

pub const MODERATED: Field<BoolCodec> = Field::named("moderated", BoolCodec::new(false));

pub const EMOJI_ID: Field<IdCodec<EmojiMarker>> = Field::named("emoji_id", IdCodec::new());

pub const EMOJI_NAME: Field<NullableStringCodec> =
    Field::named("emoji_name", NullableStringCodec::new());
