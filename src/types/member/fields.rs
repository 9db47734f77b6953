//! Field converters of guild members.

use crate::{
    field::{BoolCodec, Field, IdArrayCodec, IdCodec, ImageHashCodec, NullableStringCodec, TimestampCodec},
    types::id::marker::{GuildMarker, RoleMarker, UserMarker},
};

pub const USER_ID: Field<IdCodec<UserMarker>> = Field::named("user_id", IdCodec::new());

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

pub const NICK: Field<NullableStringCodec> =
    Field::named("nick", NullableStringCodec::new().length(1, 32));

/// Guild specific avatar.
pub const AVATAR: Field<ImageHashCodec> = Field::named("avatar", ImageHashCodec::new());

pub const DEAF: Field<BoolCodec> = Field::named("deaf", BoolCodec::new(false));

pub const MUTE: Field<BoolCodec> = Field::named("mute", BoolCodec::new(false));

/// Whether the member has not yet passed membership screening.
pub const PENDING: Field<BoolCodec> = Field::named("pending", BoolCodec::new(false));

pub const JOINED_AT: Field<TimestampCodec> = Field::named("joined_at", TimestampCodec::new());

/// End of the member's timeout.
pub const TIMED_OUT_UNTIL: Field<TimestampCodec> = Field::new(
    "timed_out_until",
    "communication_disabled_until",
    TimestampCodec::new(),
);

pub const ROLE_IDS: Field<IdArrayCodec<RoleMarker>> =
    Field::new("role_ids", "roles", IdArrayCodec::new());
