//! Field converters of stage instances.

use crate::{
    field::{EnumCodec, Field, IdCodec, StringCodec},
    types::{
        id::marker::{ChannelMarker, GuildMarker},
        scheduled_event::PrivacyLevel,
    },
};

pub const CHANNEL_ID: Field<IdCodec<ChannelMarker>> = Field::named("channel_id", IdCodec::new());

pub const GUILD_ID: Field<IdCodec<GuildMarker>> = Field::named("guild_id", IdCodec::new());

pub const TOPIC: Field<StringCodec> = Field::named("topic", StringCodec::new().length(1, 120));

pub const PRIVACY_LEVEL: Field<EnumCodec<PrivacyLevel>> =
    Field::named("privacy_level", EnumCodec::new().emit_defaults());
