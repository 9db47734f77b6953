//! Field converters of applications.

use crate::{
    field::{BoolCodec, Field, FlagsCodec, IdCodec, ImageHashCodec, NullableStringCodec, StringCodec},
    types::id::marker::ApplicationMarker,
};

use super::ApplicationFlags;

pub const ID: Field<IdCodec<ApplicationMarker>> = Field::named("id", IdCodec::new());

pub const NAME: Field<StringCodec> = Field::named("name", StringCodec::new().length(2, 32));

pub const DESCRIPTION: Field<NullableStringCodec> =
    Field::named("description", NullableStringCodec::new().max_length(400));

pub const ICON: Field<ImageHashCodec> = Field::named("icon", ImageHashCodec::new());

/// Whether users other than the owner can add the bot to guilds.
pub const BOT_PUBLIC: Field<BoolCodec> = Field::named("bot_public", BoolCodec::new(false));

/// Whether the bot requires the full OAuth2 code grant flow to join.
pub const BOT_REQUIRE_CODE_GRANT: Field<BoolCodec> =
    Field::named("bot_require_code_grant", BoolCodec::new(false));

pub const FLAGS: Field<FlagsCodec<ApplicationFlags>> = Field::named("flags", FlagsCodec::new());
